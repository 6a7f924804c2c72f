//! File-based cache implementation.
//!
//! [`FilePageCache`] stores each rendered page as a file on disk:
//!
//! ```text
//! {root}/
//! +-- VERSION                    # contains the cache version string
//! +-- pages/
//! |   +-- _index.html            # route "/"
//! |   +-- services__family-law.html
//! +-- tags/
//!     +-- services               # newline-separated routes under this tag
//! ```
//!
//! On construction, [`FilePageCache`] validates the `VERSION` file in the
//! cache root. If the version mismatches or is missing, the entire cache
//! directory is wiped and recreated, so a cache written by a previous build
//! is never served.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{CacheError, PageCache};

/// File-based [`PageCache`] rooted at a directory on disk.
pub struct FilePageCache {
    root: PathBuf,
}

impl FilePageCache {
    /// Create a new file-based cache at `root`, validating the cache version.
    ///
    /// If the `VERSION` file inside `root` does not match `version`, the
    /// entire cache directory is removed and recreated with the new version.
    /// Errors during validation are logged but never fatal.
    #[must_use]
    pub fn new(root: PathBuf, version: &str) -> Self {
        validate_version(&root, version);
        Self { root }
    }

    fn page_path(&self, route: &str) -> PathBuf {
        self.root
            .join("pages")
            .join(format!("{}.html", route_key(route)))
    }

    fn tag_path(&self, tag: &str) -> PathBuf {
        self.root.join("tags").join(sanitize(tag))
    }
}

impl PageCache for FilePageCache {
    fn get(&self, route: &str) -> Option<String> {
        fs::read_to_string(self.page_path(route)).ok()
    }

    fn set(&self, route: &str, html: &str, tags: &[&str]) {
        let path = self.page_path(route);

        // Cache writes are best-effort
        let Some(parent) = path.parent() else {
            return;
        };
        if fs::create_dir_all(parent).is_err() {
            return;
        }
        if let Err(e) = fs::write(&path, html) {
            tracing::warn!(route, "failed to write page cache entry: {e}");
            return;
        }

        for tag in tags {
            if let Err(e) = self.append_tag(tag, route) {
                tracing::warn!(tag, route, "failed to update tag index: {e}");
            }
        }
    }

    fn purge_route(&self, route: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.page_path(route)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn purge_tag(&self, tag: &str) -> Result<(), CacheError> {
        let tag_path = self.tag_path(tag);
        let routes = match fs::read_to_string(&tag_path) {
            Ok(routes) => routes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for route in routes.lines().filter(|r| !r.is_empty()) {
            self.purge_route(route)?;
        }

        match fs::remove_file(&tag_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn purge_all(&self) -> Result<(), CacheError> {
        for dir in ["pages", "tags"] {
            match fs::remove_dir_all(self.root.join(dir)) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

impl FilePageCache {
    /// Record `route` as a member of `tag`, deduplicating.
    fn append_tag(&self, tag: &str, route: &str) -> std::io::Result<()> {
        let path = self.tag_path(tag);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };
        if existing.lines().any(|r| r == route) {
            return Ok(());
        }

        let mut updated = existing;
        updated.push_str(route);
        updated.push('\n');
        fs::write(&path, updated)
    }
}

/// Filesystem key for a route path.
///
/// `"/"` maps to `_index`; other routes drop the leading slash and flatten
/// separators so every entry is a single file in `pages/`.
fn route_key(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        return "_index".to_owned();
    }
    sanitize(&trimmed.replace('/', "__"))
}

/// Restrict a cache key to filesystem-safe characters.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Validate the cache version, wiping the directory on mismatch.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");

    // Try to read the existing version
    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            tracing::debug!("cache version matches: {version}");
            return;
        }
        Ok(stored) => {
            tracing::info!(
                "cache version mismatch (stored={stored}, current={version}), wiping cache"
            );
        }
        Err(_) => {
            tracing::info!("no cache VERSION file found, initializing cache");
        }
    }

    // Wipe and recreate
    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove cache directory: {e}");
    }
    if let Err(e) = fs::create_dir_all(root) {
        tracing::warn!("failed to create cache directory: {e}");
        return;
    }
    if let Err(e) = fs::write(&version_file, version) {
        tracing::warn!("failed to write cache VERSION file: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/about", "<html>about</html>", &[]);
        assert_eq!(cache.get("/about"), Some("<html>about</html>".to_owned()));
    }

    #[test]
    fn test_root_route_key() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/", "<html>home</html>", &[]);
        assert_eq!(cache.get("/"), Some("<html>home</html>".to_owned()));
        assert!(tmp.path().join("cache/pages/_index.html").exists());
    }

    #[test]
    fn test_nested_route_flattened() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/services/family-law", "detail", &[]);
        assert!(
            tmp.path()
                .join("cache/pages/services__family-law.html")
                .exists()
        );
    }

    #[test]
    fn test_purge_route_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/about", "about", &[]);
        cache.purge_route("/about").unwrap();
        cache.purge_route("/about").unwrap();
        assert_eq!(cache.get("/about"), None);
    }

    #[test]
    fn test_purge_tag_removes_tagged_routes() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/services/a", "a", &["services"]);
        cache.set("/services/b", "b", &["services"]);
        cache.set("/about", "about", &["about"]);

        cache.purge_tag("services").unwrap();

        assert_eq!(cache.get("/services/a"), None);
        assert_eq!(cache.get("/services/b"), None);
        assert_eq!(cache.get("/about"), Some("about".to_owned()));
    }

    #[test]
    fn test_purge_unknown_tag_is_ok() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");
        assert!(cache.purge_tag("never-seen").is_ok());
    }

    #[test]
    fn test_tag_index_deduplicates() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/services/a", "a1", &["services"]);
        cache.set("/services/a", "a2", &["services"]);

        let index = fs::read_to_string(tmp.path().join("cache/tags/services")).unwrap();
        assert_eq!(index, "/services/a\n");
    }

    #[test]
    fn test_purge_all() {
        let tmp = TempDir::new().unwrap();
        let cache = FilePageCache::new(tmp.path().join("cache"), "v1");

        cache.set("/", "home", &["layout"]);
        cache.set("/about", "about", &[]);
        cache.purge_all().unwrap();

        assert_eq!(cache.get("/"), None);
        assert_eq!(cache.get("/about"), None);
    }

    #[test]
    fn test_version_match_keeps_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        let cache = FilePageCache::new(root.clone(), "v1");
        cache.set("/about", "preserved", &[]);

        let cache2 = FilePageCache::new(root, "v1");
        assert_eq!(cache2.get("/about"), Some("preserved".to_owned()));
    }

    #[test]
    fn test_version_mismatch_wipes_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        let cache = FilePageCache::new(root.clone(), "v1");
        cache.set("/about", "will-be-wiped", &[]);

        let cache2 = FilePageCache::new(root.clone(), "v2");
        assert_eq!(cache2.get("/about"), None);
        assert_eq!(fs::read_to_string(root.join("VERSION")).unwrap(), "v2");
    }

    #[test]
    fn test_missing_version_file_wipes_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(root.join("pages/orphan.html"), "stale").unwrap();

        let cache = FilePageCache::new(root.clone(), "v1");
        assert_eq!(cache.get("/orphan"), None);
        assert_eq!(fs::read_to_string(root.join("VERSION")).unwrap(), "v1");
    }
}

//! In-memory cache implementation.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::{CacheError, PageCache};

#[derive(Default)]
struct Inner {
    /// Rendered HTML keyed by route.
    pages: HashMap<String, String>,
    /// Routes stored under each tag.
    tags: HashMap<String, HashSet<String>>,
}

/// In-process [`PageCache`] backed by a `RwLock`ed map.
///
/// The default cache when no cache directory is configured: pages survive for
/// the lifetime of the process and are purged by the revalidation webhook.
#[derive(Default)]
pub struct MemoryPageCache {
    inner: RwLock<Inner>,
}

impl MemoryPageCache {
    /// Create an empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageCache for MemoryPageCache {
    fn get(&self, route: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.pages.get(route).cloned()
    }

    fn set(&self, route: &str, html: &str, tags: &[&str]) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        inner.pages.insert(route.to_owned(), html.to_owned());
        for tag in tags {
            inner
                .tags
                .entry((*tag).to_owned())
                .or_default()
                .insert(route.to_owned());
        }
    }

    fn purge_route(&self, route: &str) -> Result<(), CacheError> {
        if let Ok(mut inner) = self.inner.write() {
            inner.pages.remove(route);
        }
        Ok(())
    }

    fn purge_tag(&self, tag: &str) -> Result<(), CacheError> {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(routes) = inner.tags.remove(tag) {
                for route in routes {
                    inner.pages.remove(&route);
                }
            }
        }
        Ok(())
    }

    fn purge_all(&self) -> Result<(), CacheError> {
        if let Ok(mut inner) = self.inner.write() {
            inner.pages.clear();
            inner.tags.clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let cache = MemoryPageCache::new();
        cache.set("/about", "<html>about</html>", &[]);

        assert_eq!(cache.get("/about"), Some("<html>about</html>".to_owned()));
        assert_eq!(cache.get("/contact"), None);
    }

    #[test]
    fn test_overwrite() {
        let cache = MemoryPageCache::new();
        cache.set("/", "first", &[]);
        cache.set("/", "second", &[]);

        assert_eq!(cache.get("/"), Some("second".to_owned()));
    }

    #[test]
    fn test_purge_route() {
        let cache = MemoryPageCache::new();
        cache.set("/about", "about", &[]);

        cache.purge_route("/about").unwrap();
        assert_eq!(cache.get("/about"), None);
    }

    #[test]
    fn test_purge_route_is_idempotent() {
        let cache = MemoryPageCache::new();
        cache.set("/about", "about", &[]);

        cache.purge_route("/about").unwrap();
        cache.purge_route("/about").unwrap();
        cache.purge_route("/never-stored").unwrap();
        assert_eq!(cache.get("/about"), None);
    }

    #[test]
    fn test_purge_tag_removes_all_tagged_routes() {
        let cache = MemoryPageCache::new();
        cache.set("/services/a", "a", &["services", "service-a"]);
        cache.set("/services/b", "b", &["services", "service-b"]);
        cache.set("/about", "about", &["about"]);

        cache.purge_tag("services").unwrap();

        assert_eq!(cache.get("/services/a"), None);
        assert_eq!(cache.get("/services/b"), None);
        assert_eq!(cache.get("/about"), Some("about".to_owned()));
    }

    #[test]
    fn test_purge_unknown_tag_is_ok() {
        let cache = MemoryPageCache::new();
        assert!(cache.purge_tag("no-such-tag").is_ok());
    }

    #[test]
    fn test_purge_all() {
        let cache = MemoryPageCache::new();
        cache.set("/", "home", &["layout"]);
        cache.set("/about", "about", &[]);

        cache.purge_all().unwrap();

        assert_eq!(cache.get("/"), None);
        assert_eq!(cache.get("/about"), None);
    }
}

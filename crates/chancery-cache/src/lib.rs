//! Rendered-page cache for Chancery.
//!
//! This crate decouples page producers (the HTTP handlers) and the
//! revalidation dispatcher from the underlying cache storage. The core API is
//! the [`PageCache`] trait: a key-value store of rendered HTML keyed by route,
//! with symbolic tags grouping routes for bulk invalidation.
//!
//! Purges are idempotent: purging a route or tag that holds nothing is `Ok`,
//! never an error. This is what makes webhook-driven invalidation safe to
//! repeat and safe to run concurrently.
//!
//! # Implementations
//!
//! - [`NullPageCache`]: No-op implementation (always miss, purges succeed)
//! - [`MemoryPageCache`]: In-process map, the default when no cache dir is
//!   configured
//! - [`FilePageCache`]: File-based implementation with version validation
//!
//! # Example
//!
//! ```
//! use chancery_cache::{MemoryPageCache, PageCache};
//!
//! let cache = MemoryPageCache::new();
//! cache.set("/services/family-law", "<html>…</html>", &["services", "service-family-law"]);
//! assert!(cache.get("/services/family-law").is_some());
//! cache.purge_tag("services").unwrap();
//! assert!(cache.get("/services/family-law").is_none());
//! ```

mod file;
mod memory;

pub use file::FilePageCache;
pub use memory::MemoryPageCache;

/// Cache operation error.
///
/// Only storage-level failures surface here; logical misses and purges of
/// absent entries are not errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// I/O error from the backing store.
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store of rendered pages keyed by route, with tag-based bulk purge.
///
/// Routes are URL paths with a leading slash (`"/"`, `"/services/family-law"`).
/// Tags are opaque symbolic names chosen by the caller (`"services"`,
/// `"service-family-law"`). A route may carry any number of tags; purging a
/// tag purges every route stored with it.
pub trait PageCache: Send + Sync {
    /// Retrieve the cached HTML for a route, if present.
    fn get(&self, route: &str) -> Option<String>;

    /// Store rendered HTML for a route under the given tags.
    ///
    /// Overwrites any existing entry for the same route. Storage failures are
    /// logged and swallowed: the cache is an optimization, never a
    /// correctness dependency.
    fn set(&self, route: &str, html: &str, tags: &[&str]);

    /// Remove the cached entry for a single route.
    ///
    /// Purging a route with no entry is a no-op and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] only when the backing store fails.
    fn purge_route(&self, route: &str) -> Result<(), CacheError>;

    /// Remove every cached entry stored under a tag.
    ///
    /// Purging an unknown tag is a no-op and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] only when the backing store fails.
    fn purge_tag(&self, tag: &str) -> Result<(), CacheError>;

    /// Remove every cached entry.
    ///
    /// Used for site-wide invalidations (navigation or settings changes that
    /// affect the shared layout on every page).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] only when the backing store fails.
    fn purge_all(&self) -> Result<(), CacheError>;
}

/// No-op [`PageCache`] that never stores or retrieves data.
///
/// Every `get` returns `None`; every `set` is discarded; every purge
/// succeeds. Use when caching is disabled.
pub struct NullPageCache;

impl PageCache for NullPageCache {
    fn get(&self, _route: &str) -> Option<String> {
        None
    }

    fn set(&self, _route: &str, _html: &str, _tags: &[&str]) {}

    fn purge_route(&self, _route: &str) -> Result<(), CacheError> {
        Ok(())
    }

    fn purge_tag(&self, _tag: &str) -> Result<(), CacheError> {
        Ok(())
    }

    fn purge_all(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cache_always_misses() {
        let cache = NullPageCache;

        assert_eq!(cache.get("/about"), None);
        cache.set("/about", "<html></html>", &["about"]);
        assert_eq!(cache.get("/about"), None);
    }

    #[test]
    fn test_null_cache_purges_succeed() {
        let cache = NullPageCache;

        assert!(cache.purge_route("/about").is_ok());
        assert!(cache.purge_tag("services").is_ok());
        assert!(cache.purge_all().is_ok());
    }
}

//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use chancery_cache::PageCache;
use chancery_content::ContentClient;
use chancery_revalidate::Dispatcher;
use chancery_site::SiteRenderer;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content Store query client.
    pub(crate) content: ContentClient,
    /// Rendered-page cache.
    pub(crate) cache: Arc<dyn PageCache>,
    /// Webhook invalidation dispatcher.
    pub(crate) dispatcher: Dispatcher,
    /// Page renderer.
    pub(crate) renderer: SiteRenderer,
    /// Application version.
    pub(crate) version: String,
}

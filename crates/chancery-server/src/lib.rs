//! HTTP server for the Chancery site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered pages backed by the Content Store
//! - The revalidation webhook that purges the page cache on publish
//! - Derived listings (sitemap.xml, robots.txt) and embedded static assets
//!
//! # Architecture
//!
//! ```text
//! Browser/CDN ──HTTP──► axum server (chancery-server)
//!                          │
//!                          ├─► Page handlers ──► cache? ──► ContentClient ──► SiteRenderer
//!                          │
//!                          ├─► POST /api/revalidate ──► Dispatcher ──► PageCache purges
//!                          │
//!                          └─► sitemap.xml / robots.txt / embedded assets
//! ```
//!
//! Content problems degrade: a failed fetch renders the content-missing
//! state, a failed cache write is dropped, and only a malformed webhook
//! payload or a fully-failed purge reports an error status.

mod app;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use chancery_cache::{FilePageCache, NullPageCache, PageCache};
use chancery_config::Config;
use chancery_content::{ContentClient, MediaUrlBuilder};
use chancery_revalidate::Dispatcher;
use chancery_site::SiteRenderer;

use state::AppState;

/// Run the server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `version` - Application version (for cache invalidation)
///
/// # Errors
///
/// Returns an error if the content client cannot be built or the listener
/// fails to bind.
pub async fn run_server(
    config: &Config,
    version: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = ContentClient::from_config(&config.content)?;
    let media = MediaUrlBuilder::from_config(&config.content);

    // Disabled caching still keeps the webhook harmless: purges against the
    // null cache are no-ops
    let cache: Arc<dyn PageCache> = if config.cache_resolved.enabled {
        Arc::new(FilePageCache::new(
            config.cache_resolved.cache_dir(),
            version,
        ))
    } else {
        Arc::new(NullPageCache)
    };

    let state = Arc::new(AppState {
        content,
        cache: Arc::clone(&cache),
        dispatcher: Dispatcher::new(cache),
        renderer: SiteRenderer::new(
            media,
            config.site.base_url.clone(),
            config.site.default_title.clone(),
        ),
        version: version.to_owned(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.server.host, config.server.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

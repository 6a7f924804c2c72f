//! Sitemap and robots endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use chancery_site::{robots_txt, sitemap_xml};

use crate::state::AppState;

/// Handle GET /sitemap.xml.
///
/// Derived from the live service catalog; an upstream failure yields a
/// sitemap with the static routes only.
pub(crate) async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    let services = state.content.services().await.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch services for sitemap: {e}");
        Vec::new()
    });

    let xml = sitemap_xml(&state.renderer.base_url(), &services);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Handle GET /robots.txt.
pub(crate) async fn robots(State(state): State<Arc<AppState>>) -> Response {
    let no_index = match state.content.site_settings().await {
        Ok(settings) => settings
            .and_then(|s| s.seo)
            .is_some_and(|seo| seo.no_index),
        Err(e) => {
            // When settings are unreachable, stay indexable
            tracing::warn!("failed to fetch settings for robots.txt: {e}");
            false
        }
    };

    let body = robots_txt(&state.renderer.base_url(), no_index);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

//! HTTP request handlers.

pub(crate) mod health;
pub(crate) mod pages;
pub(crate) mod revalidate;
pub(crate) mod seo;

use std::sync::Arc;

use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

use chancery_content::{ServiceSummary, SiteSettings};

use crate::state::AppState;

/// Cache-Control value for rendered pages.
///
/// Short edge TTL; real freshness comes from webhook purges.
const PAGE_CACHE_CONTROL: &str = "public, max-age=60";

/// Wrap rendered HTML in a response with page cache headers.
pub(crate) fn html_response(html: String) -> Response {
    (
        [(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)],
        Html(html),
    )
        .into_response()
}

/// Fetch the data every page needs: site settings and the service catalog.
///
/// The two queries are independent and run concurrently. Upstream failure
/// substitutes the empty state: pages render their content-missing sections
/// instead of surfacing a 5xx.
pub(crate) async fn base_data(
    state: &Arc<AppState>,
) -> (Option<SiteSettings>, Vec<ServiceSummary>) {
    let (settings, services) = tokio::join!(state.content.site_settings(), state.content.services());

    let settings = settings.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch site settings: {e}");
        None
    });
    let services = services.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch services: {e}");
        Vec::new()
    });

    (settings, services)
}

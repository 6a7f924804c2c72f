//! Embedded static assets.
//!
//! The site ships two assets: the stylesheet and the placeholder image used
//! for unresolvable media references. Both are embedded in the binary so
//! the server has no runtime asset directory.

use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use std::sync::Arc;

use crate::state::AppState;

/// Site stylesheet.
const SITE_CSS: &str = include_str!("../assets/site.css");

/// Placeholder shown for missing media assets.
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 450" role="img" aria-label="Image unavailable"><rect width="800" height="450" fill="#e5e5e5"/><path d="M320 180h160v90l-40-30-40 40-40-50-40 40z" fill="#a3a3a3"/><circle cx="360" cy="205" r="14" fill="#a3a3a3"/></svg>"##;

/// Cache-Control for immutable embedded assets.
const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";

async fn site_css() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        SITE_CSS,
    )
}

async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        PLACEHOLDER_SVG,
    )
}

/// Routes for embedded static assets.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets/site.css", get(site_css))
        .route("/placeholder.svg", get(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_svg() {
        assert!(PLACEHOLDER_SVG.starts_with("<svg"));
        assert!(PLACEHOLDER_SVG.ends_with("</svg>"));
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(SITE_CSS.contains("site-header"));
    }
}

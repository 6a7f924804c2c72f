//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // Page routes
    let page_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/services", get(handlers::pages::services))
        .route("/services/{slug}", get(handlers::pages::service_detail))
        .route("/contact", get(handlers::pages::contact))
        .route("/privacy-security", get(handlers::pages::privacy_security))
        .route("/terms-conditions", get(handlers::pages::terms_conditions))
        .route(
            "/complaints-procedure",
            get(handlers::pages::complaints_procedure),
        );

    // Derived listings and API routes
    let api_routes = Router::new()
        .route("/sitemap.xml", get(handlers::seo::sitemap))
        .route("/robots.txt", get(handlers::seo::robots))
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/revalidate",
            get(handlers::revalidate::get).post(handlers::revalidate::post),
        );

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .merge(static_files::static_router())
        .fallback(handlers::pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

//! Page endpoints.
//!
//! Every handler follows the same shape: serve from the page cache when the
//! route is present, otherwise fetch what the page needs from the Content
//! Store, assemble the HTML, store it under the route's invalidation tags
//! and serve it. Upstream failures degrade to content-missing sections; only
//! an unknown service slug produces a non-2xx (404).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use chancery_content::LegalNoticeItem;

use crate::handlers::{base_data, html_response};
use crate::state::AppState;

/// Serve a cached page if present.
fn cached(state: &Arc<AppState>, route: &str) -> Option<Response> {
    let html = state.cache.get(route)?;
    tracing::debug!(route, "page cache hit");
    Some(html_response(html))
}

/// Handle GET /.
pub(crate) async fn home(State(state): State<Arc<AppState>>) -> Response {
    if let Some(response) = cached(&state, "/") {
        return response;
    }

    let ((settings, services), testimonials) =
        tokio::join!(base_data(&state), state.content.testimonials());
    let testimonials = testimonials.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch testimonials: {e}");
        Vec::new()
    });

    let html = state
        .renderer
        .home(settings.as_ref(), &services, &testimonials);
    state.cache.set("/", &html, &["homePage"]);
    html_response(html)
}

/// Handle GET /about.
pub(crate) async fn about(State(state): State<Arc<AppState>>) -> Response {
    if let Some(response) = cached(&state, "/about") {
        return response;
    }

    let ((settings, services), about) = tokio::join!(base_data(&state), state.content.about_page());
    let about = about.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch about page: {e}");
        None
    });

    let html = state
        .renderer
        .about(settings.as_ref(), &services, about.as_ref());
    state.cache.set("/about", &html, &["aboutPage"]);
    html_response(html)
}

/// Handle GET /services.
pub(crate) async fn services(State(state): State<Arc<AppState>>) -> Response {
    if let Some(response) = cached(&state, "/services") {
        return response;
    }

    let (settings, services) = base_data(&state).await;
    let html = state.renderer.services(settings.as_ref(), &services);
    state.cache.set("/services", &html, &["services"]);
    html_response(html)
}

/// Handle GET /services/{slug}.
pub(crate) async fn service_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let route = format!("/services/{slug}");
    if let Some(response) = cached(&state, &route) {
        return response;
    }

    let ((settings, services), service) =
        tokio::join!(base_data(&state), state.content.service_by_slug(&slug));

    let service = match service {
        Ok(service) => service,
        Err(e) => {
            tracing::warn!(slug, "failed to fetch service: {e}");
            None
        }
    };

    let Some(service) = service else {
        let html = state.renderer.not_found(settings.as_ref(), &services);
        return (StatusCode::NOT_FOUND, html_response(html)).into_response();
    };

    let html = state
        .renderer
        .service_detail(settings.as_ref(), &services, &service);
    let slug_tag = format!("service-{slug}");
    state
        .cache
        .set(&route, &html, &["services", slug_tag.as_str()]);
    html_response(html)
}

/// Handle GET /contact.
pub(crate) async fn contact(State(state): State<Arc<AppState>>) -> Response {
    if let Some(response) = cached(&state, "/contact") {
        return response;
    }

    let (settings, services) = base_data(&state).await;
    let html = state.renderer.contact(settings.as_ref(), &services);
    state.cache.set("/contact", &html, &["global-data"]);
    html_response(html)
}

/// Which legal notice a route maps to.
#[derive(Clone, Copy)]
pub(crate) enum LegalPage {
    PrivacySecurity,
    TermsConditions,
    ComplaintsProcedure,
}

impl LegalPage {
    fn route(self) -> &'static str {
        match self {
            Self::PrivacySecurity => "/privacy-security",
            Self::TermsConditions => "/terms-conditions",
            Self::ComplaintsProcedure => "/complaints-procedure",
        }
    }

    fn fallback_title(self) -> &'static str {
        match self {
            Self::PrivacySecurity => "Privacy & Security",
            Self::TermsConditions => "Terms & Conditions",
            Self::ComplaintsProcedure => "Complaints Procedure",
        }
    }
}

/// Handle GET /privacy-security.
pub(crate) async fn privacy_security(state: State<Arc<AppState>>) -> Response {
    legal(state, LegalPage::PrivacySecurity).await
}

/// Handle GET /terms-conditions.
pub(crate) async fn terms_conditions(state: State<Arc<AppState>>) -> Response {
    legal(state, LegalPage::TermsConditions).await
}

/// Handle GET /complaints-procedure.
pub(crate) async fn complaints_procedure(state: State<Arc<AppState>>) -> Response {
    legal(state, LegalPage::ComplaintsProcedure).await
}

/// Shared implementation for the legal-notice routes.
async fn legal(State(state): State<Arc<AppState>>, page: LegalPage) -> Response {
    let route = page.route();
    if let Some(response) = cached(&state, route) {
        return response;
    }

    let (settings, services) = base_data(&state).await;
    let notice = notice_for(settings.as_ref(), page);

    // Notices hosted elsewhere redirect instead of rendering
    if let Some(url) = notice.and_then(|n| n.external_url.as_deref()) {
        return Redirect::temporary(url).into_response();
    }

    let html = state.renderer.legal_notice(
        settings.as_ref(),
        &services,
        notice,
        page.fallback_title(),
    );
    state.cache.set(route, &html, &["settings"]);
    html_response(html)
}

/// Pick the configured notice for a legal page.
fn notice_for(
    settings: Option<&chancery_content::SiteSettings>,
    page: LegalPage,
) -> Option<&LegalNoticeItem> {
    let notices = settings?.legal_notices.as_ref()?;
    match page {
        LegalPage::PrivacySecurity => notices.privacy_security.as_ref(),
        LegalPage::TermsConditions => notices.terms_conditions.as_ref(),
        LegalPage::ComplaintsProcedure => notices.complaints_procedure.as_ref(),
    }
}

/// Fallback for unmatched routes.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    let (settings, services) = base_data(&state).await;
    let html = state.renderer.not_found(settings.as_ref(), &services);
    (StatusCode::NOT_FOUND, html_response(html)).into_response()
}

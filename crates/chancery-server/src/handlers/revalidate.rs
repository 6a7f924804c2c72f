//! Content revalidation webhook.
//!
//! The Content Store calls `POST /api/revalidate` on publish with
//! `{_type, slug?: {current}, _id?}`. The handler hands the notification to
//! the dispatcher and reports what was invalidated. `GET` on the same path
//! is a liveness probe.
//!
//! The endpoint is intentionally unauthenticated, matching the deployed
//! webhook configuration; every notification is logged.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Webhook notification payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ChangePayload {
    /// Document type tag.
    #[serde(rename = "_type")]
    document_type: String,
    /// Slug, present for slugged document types.
    #[serde(default)]
    slug: Option<SlugField>,
    /// Document id (logged only).
    #[serde(rename = "_id", default)]
    id: Option<String>,
}

/// Slug wrapper as the Content Store sends it.
#[derive(Debug, Deserialize)]
struct SlugField {
    #[serde(default)]
    current: String,
}

/// Success response body.
#[derive(Serialize)]
struct RevalidatedResponse {
    revalidated: bool,
    #[serde(rename = "type")]
    document_type: String,
    slug: Option<String>,
    timestamp: String,
    message: String,
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    error: String,
    timestamp: String,
}

/// Liveness response body.
#[derive(Serialize)]
pub(crate) struct LivenessResponse {
    message: String,
    timestamp: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Handle POST /api/revalidate.
pub(crate) async fn post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChangePayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            // Malformed payloads are the caller's problem; report and stop
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Error revalidating".to_owned(),
                    error: rejection.body_text(),
                    timestamp: timestamp(),
                }),
            )
                .into_response();
        }
    };

    let slug = payload
        .slug
        .as_ref()
        .map(|s| s.current.as_str())
        .filter(|s| !s.is_empty());

    tracing::info!(
        document_type = %payload.document_type,
        slug = slug.unwrap_or("-"),
        id = payload.id.as_deref().unwrap_or("-"),
        "webhook received"
    );

    match state.dispatcher.dispatch(&payload.document_type, slug) {
        Ok(outcome) => {
            tracing::info!(
                targets = outcome.targets.len(),
                failed = outcome.failed,
                "revalidated {:?}",
                outcome.document_type
            );
            Json(RevalidatedResponse {
                revalidated: true,
                document_type: payload.document_type.clone(),
                slug: slug.map(str::to_owned),
                timestamp: timestamp(),
                message: format!("Successfully revalidated {}", payload.document_type),
            })
            .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Error revalidating".to_owned(),
                error: e.to_string(),
                timestamp: timestamp(),
            }),
        )
            .into_response(),
    }
}

/// Handle GET /api/revalidate (liveness probe).
pub(crate) async fn get() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Revalidation webhook endpoint is active".to_owned(),
        timestamp: timestamp(),
    })
}

// HTTP request handlers
use crate::application::statistics_session::RefreshOutcome;
use crate::domain::time_range::TimeRange;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    /// Path of the manual retry action, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    retry: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Load statistics for a user, switching to `?range=` when given
pub async fn get_statistics(
    Path(user_id): Path<String>,
    Query(query): Query<RangeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let range = match query.range.as_deref().map(str::parse::<TimeRange>) {
        Some(Ok(range)) => Some(range),
        Some(Err(e)) => {
            let message = e.to_string();
            let body = ErrorBody {
                error: &message,
                retry: None,
            };
            return respond(StatusCode::BAD_REQUEST, &body, compress).await;
        }
        None => None,
    };

    let session = state.session(&user_id).await;
    let outcome = match range {
        Some(range) => session.set_range(range).await,
        None => session.refresh().await,
    };

    outcome_response(&user_id, outcome, compress).await
}

/// Retry with the session's current range
pub async fn refresh_statistics(
    Path(user_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let session = state.session(&user_id).await;
    let outcome = session.refresh().await;
    outcome_response(&user_id, outcome, compress).await
}

/// Current view state without fetching anything
pub async fn view_statistics(
    Path(user_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    match state.existing_session(&user_id).await {
        Some(session) => respond(StatusCode::OK, &session.snapshot().await, compress).await,
        None => {
            let body = ErrorBody {
                error: "No statistics loaded for this user",
                retry: Some(retry_path(&user_id)),
            };
            respond(StatusCode::NOT_FOUND, &body, compress).await
        }
    }
}

async fn outcome_response(
    user_id: &str,
    outcome: RefreshOutcome,
    compress: bool,
) -> axum::response::Response {
    match outcome {
        RefreshOutcome::Committed(state) | RefreshOutcome::Superseded(state) => {
            respond(StatusCode::OK, &state, compress).await
        }
        RefreshOutcome::Failed(e) => {
            let body = ErrorBody {
                error: e.user_message(),
                retry: Some(retry_path(user_id)),
            };
            respond(StatusCode::BAD_GATEWAY, &body, compress).await
        }
    }
}

fn retry_path(user_id: &str) -> String {
    format!("/users/{}/statistics/refresh", urlencoding::encode(user_id))
}

async fn respond<T: Serialize>(
    status: StatusCode,
    body: &T,
    compress: bool,
) -> axum::response::Response {
    match json_response(status, body, compress).await {
        Ok(response) => response.into_response(),
        Err(status) => status.into_response(),
    }
}

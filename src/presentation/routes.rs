// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_statistics, health_check, refresh_statistics, view_statistics,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/users/:user_id/statistics", get(get_statistics))
        .route("/users/:user_id/statistics/refresh", post(refresh_statistics))
        .route("/users/:user_id/statistics/view", get(view_statistics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// HTTP request handlers
use crate::application::pipeline::PipelineState;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/chart", get(current_chart))
        .route("/chart/refresh", post(refresh_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current pipeline state, as last published
pub async fn current_chart(State(state): State<Arc<AppState>>) -> Response {
    state_response(state.pipeline.state())
}

/// Refresh from the feed, joining any refresh already in flight
pub async fn refresh_chart(State(state): State<Arc<AppState>>) -> Response {
    state_response(state.pipeline.refresh().await)
}

fn state_response(pipeline_state: PipelineState) -> Response {
    let status = match &pipeline_state {
        PipelineState::Loading => StatusCode::ACCEPTED,
        PipelineState::Failed { .. } => StatusCode::BAD_GATEWAY,
        PipelineState::Ready { .. } => StatusCode::OK,
    };
    (status, Json(pipeline_state)).into_response()
}

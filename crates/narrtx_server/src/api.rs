//! HTTP API for narrative processing and health checks.

use crate::{ApiError, NarrativeProcessor};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use narrtx_core::{NarrativeRequest, NarrativeResult};
use narrtx_error::{ProcessingError, ProcessingErrorKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{Instrument, debug, instrument};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// API server state.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Shared pipeline.
    pub processor: Arc<NarrativeProcessor>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(processor: Arc<NarrativeProcessor>) -> Self {
        Self { processor }
    }
}

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "ok" when the server answers
    pub status: String,
    /// Human-readable note
    pub message: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

/// Creates the API router.
pub fn create_router(processor: Arc<NarrativeProcessor>) -> Router {
    let state = ApiState::new(processor);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/process-narrative", post(process_narrative))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::default()))
}

/// Clean, score and judge a narrative.
///
/// The pipeline runs on its own task; a panic there becomes a 500.
#[instrument(skip_all)]
async fn process_narrative(
    State(state): State<ApiState>,
    payload: Result<Json<NarrativeRequest>, JsonRejection>,
) -> Result<Json<NarrativeResult>, ApiError> {
    let Json(request) = payload?;
    let text = request.validated_text()?.to_string();
    debug!(text_len = text.len(), "Received narrative");

    let processor = Arc::clone(&state.processor);
    let result = tokio::spawn(async move { processor.process(&text).await }.in_current_span())
        .await
        .map_err(|e| ProcessingError::new(ProcessingErrorKind::Unexpected(e.to_string())))??;

    Ok(Json(result))
}

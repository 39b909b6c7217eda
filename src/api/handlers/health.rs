//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether storage answers.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status":"OK"}`
/// - **503 Service Unavailable**: storage did not answer
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let records = state.url_service.health().await?;
    tracing::debug!(records, "health check passed");

    Ok(Json(StatusResponse::ok()))
}

//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// - **302 Found** with `Location` set to the stored URL
/// - **404 Not Found** `{"status":"Error","error":"not found"}`
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.url_service.resolve(&alias).await?;

    let location = HeaderValue::from_str(&url)
        .map_err(|e| AppError::internal(format!("stored url is not a valid header: {e}")))?;

    tracing::debug!(alias = %alias, url = %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

//! Handler for the URL save endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::save::{AliasResponse, SaveRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a URL to an alias.
///
/// # Endpoint
///
/// `POST /url` (Basic Auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// `alias` is optional; a random 6-character alias is generated when it is
/// missing or empty.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or `url` is missing or malformed
/// - 409 if the URL or the alias is already stored
/// - 500 on storage failures
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<AliasResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();

    let record = state
        .url_service
        .save(&url, payload.alias.as_deref())
        .await?;

    Ok(Json(AliasResponse::ok(record.alias)))
}

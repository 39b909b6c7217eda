//! Handler for removing a mapping.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::save::AliasResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Basic Auth)
///
/// # Errors
///
/// Returns 404 if nothing is stored under the alias, including when it was
/// already deleted.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AliasResponse>, AppError> {
    state.url_service.delete(&alias).await?;

    Ok(Json(AliasResponse::ok(alias)))
}

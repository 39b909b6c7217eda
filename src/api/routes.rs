//! Routes of the `/url` group.
//!
//! Every endpoint here requires Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// The `/url` route group, protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /`        - Save a URL under a given or generated alias
/// - `DELETE /{alias}` - Delete a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_handler))
        .route("/{alias}", delete(delete_handler))
}

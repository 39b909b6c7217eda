//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the stored URL (public)
//! - `GET    /health`       - Storage health check (public)
//! - `POST   /url`          - Save a URL (Basic Auth)
//! - `DELETE /url/{alias}`  - Delete a mapping (Basic Auth)
//!
//! # Middleware
//!
//! Outer to inner: request id, tracing span, access log, panic recovery,
//! request timeout. A known path hit with the wrong method answers `405`
//! and unknown paths answer `404`, both as JSON envelopes.
//!
//! Trailing slashes are trimmed before routing, so `POST /url/` reaches the
//! same authenticated handler as `POST /url`.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{access_log, auth, panic, request_id, timeout, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::error_handling::HandleErrorLayer;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request; slower
///   requests are answered with `408 Request Timeout`
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let url_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .nest("/url", url_router)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer())
                .layer(middleware::from_fn(access_log::layer))
                .layer(panic::layer())
                .layer(HandleErrorLayer::new(timeout::handle_error))
                .layer(TimeoutLayer::new(request_timeout)),
        );

    // Normalization has to run before routing, so it wraps the whole router.
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router);

    Router::new().fallback_service(normalized)
}

async fn fallback_handler() -> AppError {
    AppError::not_found("not found")
}

async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("method not allowed")
}

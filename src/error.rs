//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure leaves the service as the JSON envelope
//! `{"status":"Error","error":"..."}` with a status code matching the variant.
//! Internal details are logged, never returned to the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::api::dto::response::StatusResponse;
use crate::domain::repositories::StorageError;

/// Challenge sent with every 401 response.
pub const AUTH_CHALLENGE: &str = r#"Basic realm="shortener""#;

/// Message returned to clients for any internal failure.
const INTERNAL_MESSAGE: &str = "internal error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing request fields (400).
    #[error("{0}")]
    Validation(String),

    /// Uniqueness conflict on save (409).
    #[error("{0}")]
    Conflict(String),

    /// Lookup miss (404).
    #[error("{0}")]
    NotFound(String),

    /// Missing or wrong credentials (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Any other storage or I/O failure (500). The message is for logs only.
    #[error("{0}")]
    Internal(String),

    /// Storage is unreachable (503).
    #[error("{0}")]
    Unavailable(String),

    /// Route exists but not for this method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Handling exceeded the request timeout (408).
    #[error("{0}")]
    Timeout(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Internal(_) => INTERNAL_MESSAGE,
            AppError::Validation(m)
            | AppError::Conflict(m)
            | AppError::NotFound(m)
            | AppError::Unauthorized(m)
            | AppError::Unavailable(m)
            | AppError::MethodNotAllowed(m)
            | AppError::Timeout(m) => m,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed");
        }

        let status = self.status_code();
        let body = Json(StatusResponse::error(self.public_message()));

        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(AUTH_CHALLENGE),
            );
        }

        response
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UrlExists => AppError::conflict("url already exists"),
            StorageError::UrlNotFound => AppError::not_found("not found"),
            StorageError::InvalidInput(message) => AppError::validation(message),
            other @ (StorageError::Database(_) | StorageError::Migrate(_)) => {
                AppError::internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(format!(
            "failed to decode request: {}",
            rejection.body_text()
        ))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |err| format!("field {field} {}", describe(err)))
            })
            .collect();

        AppError::validation(messages.join(", "))
    }
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    match err.code.as_ref() {
        "required" => "is a required field".to_string(),
        "url" => "is not a valid URL".to_string(),
        _ => "is not valid".to_string(),
    }
}

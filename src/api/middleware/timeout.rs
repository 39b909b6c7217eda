//! Request timeout handling.
//!
//! [`tower::timeout::TimeoutLayer`] fails slow requests with an
//! [`Elapsed`] error; [`handle_error`] turns that error into the JSON
//! envelope through `axum::error_handling::HandleErrorLayer`.

use axum::BoxError;
use tower::timeout::error::Elapsed;

use crate::error::AppError;

/// Maps errors raised by the timeout layer to a response.
///
/// Elapsed requests answer `408` with `request timed out`; any other error
/// is internal.
pub async fn handle_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("request timed out");
        return AppError::timeout("request timed out");
    }

    AppError::internal(format!("unhandled middleware error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let err = handle_error(BoxError::from("connection reset")).await;

        assert!(matches!(err, AppError::Internal(m) if m.contains("connection reset")));
    }
}

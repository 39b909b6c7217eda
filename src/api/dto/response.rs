//! Response envelope shared by every endpoint.

use serde::Serialize;

/// Outcome marker carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// `{ "status": "OK" | "Error", "error"?: string }`
///
/// Endpoints that return extra fields flatten this struct into their own
/// response type.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_omits_error() {
        let value = serde_json::to_value(StatusResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": "OK" }));
    }

    #[test]
    fn test_error_carries_message() {
        let value = serde_json::to_value(StatusResponse::error("not found")).unwrap();
        assert_eq!(value, json!({ "status": "Error", "error": "not found" }));
    }
}

//! DTOs for the save and delete endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::StatusResponse;

/// Request to map a URL to an alias.
///
/// `alias` may be omitted or empty, in which case one is generated.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to redirect to (must be a well-formed absolute URL).
    #[validate(required, url)]
    pub url: Option<String>,

    #[serde(default)]
    pub alias: Option<String>,
}

/// Response carrying the alias a record was stored (or deleted) under.
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    #[serde(flatten)]
    pub response: StatusResponse,
    pub alias: String,
}

impl AliasResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            response: StatusResponse::ok(),
            alias: alias.into(),
        }
    }
}

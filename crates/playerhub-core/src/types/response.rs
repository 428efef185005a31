//! The response envelope shared by every API endpoint.

use serde::{Deserialize, Serialize};

/// Standard response body: `{code, status, message, data}`.
///
/// `data` serializes as `null` when absent, which is what every error
/// response carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse<T = serde_json::Value> {
    /// HTTP status code mirrored into the body.
    pub code: u16,
    /// Canonical reason phrase, e.g. `"Unauthorized"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Payload, if any.
    pub data: Option<T>,
}

impl<T> BaseResponse<T> {
    /// A `200 Success` envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            status: "Success".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// An envelope with the given code and status and no payload.
    pub fn empty(code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
            message: message.into(),
            data: None,
        }
    }
}

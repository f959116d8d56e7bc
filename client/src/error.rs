use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Check your connection and try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure value handed to callers of every portal operation.
///
/// `error` is a message fit for display, `code` a stable machine-readable tag
/// and `details` optional context such as the HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    fn new(code: &str, msg: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details,
        }
    }

    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::new(
            "NETWORK_ERROR",
            NETWORK_ERROR_MESSAGE,
            Some(json!({ "cause": cause.to_string() })),
        )
    }

    pub fn from_status(status: StatusCode) -> Self {
        let code = status.as_u16();
        let (tag, msg) = match code {
            400 => ("BAD_REQUEST", "Invalid request. Please check your details.".to_string()),
            401 => ("UNAUTHORIZED", "Invalid username or password.".to_string()),
            403 => ("FORBIDDEN", "You don't have access.".to_string()),
            404 => ("NOT_FOUND", "Service not found.".to_string()),
            500 => ("SERVER_ERROR", "Server error. Please try again later.".to_string()),
            other => ("HTTP_ERROR", format!("Unexpected error (HTTP {}).", other)),
        };
        Self::new(tag, msg, Some(json!({ "status": code })))
    }

    pub fn unauthorized() -> Self {
        Self::from_status(StatusCode::UNAUTHORIZED)
    }

    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::new(
            "DECODE_ERROR",
            GENERIC_ERROR_MESSAGE,
            Some(json!({ "cause": cause.to_string() })),
        )
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg, None)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg, None)
    }

    pub fn login_failed() -> Self {
        Self::new("LOGIN_FAILED", "Login failed: empty token.", None)
    }

    pub fn storage(cause: impl std::fmt::Display) -> Self {
        Self::new(
            "STORAGE_ERROR",
            GENERIC_ERROR_MESSAGE,
            Some(json!({ "cause": cause.to_string() })),
        )
    }

    /// HTTP status carried by errors built from a response.
    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|details| details.get("status"))
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err)
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::network(err)
        }
    }
}

impl From<crate::state::prefs::StoreError> for ApiError {
    fn from(err: crate::state::prefs::StoreError) -> Self {
        Self::storage(err)
    }
}

//! Standardized error response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub message: String,

    /// The HTTP status code, repeated in the body.
    pub status: u16,

    /// When the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            timestamp: Utc::now(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "An unexpected error occurred. Please try again later.")
    }
}

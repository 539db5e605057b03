//! Message and error bodies.

use serde::{Deserialize, Serialize};

/// `{"message": ...}`, returned by endpoints with nothing else to say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body. `message` is always present and safe to show to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

//! Error handling middleware - `{"message": ...}` JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use brain_core::error::DomainError;
use brain_shared::ErrorResponse;
use std::fmt;

/// Application-level error type rendered as an [`ErrorResponse`].
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                ErrorResponse::new(message.clone())
            }
            AppError::Internal(detail) => {
                // Details stay in the log
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            not_found @ DomainError::NotFound { .. } => AppError::NotFound(not_found.to_string()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let not_found: AppError = DomainError::not_found("Content").into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert!(matches!(&not_found, AppError::NotFound(m) if m == "Content not found"));

        let invalid: AppError = DomainError::validation("Invalid OTP").into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let internal: AppError = DomainError::Internal("pool timed out".into()).into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

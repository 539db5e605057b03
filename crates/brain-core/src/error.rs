//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, CacheError, MailError};

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str },

    /// Rejected input; the message is shown to the caller as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str) -> Self {
        DomainError::NotFound { entity_type }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<CacheError> for DomainError {
    fn from(err: CacheError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<MailError> for DomainError {
    fn from(err: MailError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

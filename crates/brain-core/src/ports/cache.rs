use async_trait::async_trait;
use std::time::Duration;

/// Key-value store with optional per-key expiry (Redis, in-memory).
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a live value. Expired keys read as absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Set a value, replacing any previous one. `None` keeps it until deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

//! Outbound mail port.

use async_trait::async_trait;

/// Delivers signup verification codes.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_otp(&self, email: &str, code: &str) -> Result<(), MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Mail rejected by relay: {0}")]
    Rejected(String),
}

//! Development mailer that writes codes to the log instead of sending them.

use async_trait::async_trait;

use brain_core::domain::mask_email;
use brain_core::ports::{MailError, Mailer};

pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<(), MailError> {
        tracing::warn!(
            user_email = %mask_email(email),
            otp = %code,
            subject = super::OTP_SUBJECT,
            "No mail relay configured; logging signup code"
        );
        Ok(())
    }
}

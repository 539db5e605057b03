//! Mailer implementations for signup codes.

mod log;

pub use log::LogMailer;

#[cfg(feature = "mail")]
mod relay;
#[cfg(feature = "mail")]
pub use relay::{RelayMailer, RelayMailerConfig};

pub(crate) const OTP_SUBJECT: &str = "OTP for email verification";

pub(crate) fn otp_html(code: &str) -> String {
    format!("<p>Your OTP for signup at second brain is <strong>{code}</strong></p>")
}

#[cfg(test)]
mod tests {
    use brain_core::ports::Mailer;

    use super::*;

    #[test]
    fn test_otp_html_embeds_code() {
        assert_eq!(
            otp_html("042137"),
            "<p>Your OTP for signup at second brain is <strong>042137</strong></p>"
        );
    }

    #[tokio::test]
    async fn test_log_mailer_never_fails() {
        LogMailer.send_otp("a@example.com", "123456").await.unwrap();
    }
}

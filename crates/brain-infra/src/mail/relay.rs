//! HTTP mail relay client.

use async_trait::async_trait;
use serde::Serialize;

use brain_core::domain::mask_email;
use brain_core::ports::{MailError, Mailer};

/// Relay endpoint and sender credentials.
#[derive(Debug, Clone)]
pub struct RelayMailerConfig {
    pub url: String,
    pub from: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RelayMailerConfig {
    /// Returns `None` when `MAIL_API_URL` is unset.
    ///
    /// The sender defaults to `EMAIL_USER` when `EMAIL_FROM` is absent.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("MAIL_API_URL").ok().filter(|s| !s.is_empty())?;
        let username = std::env::var("EMAIL_USER").ok();

        Some(Self {
            url,
            from: std::env::var("EMAIL_FROM")
                .ok()
                .or_else(|| username.clone())
                .unwrap_or_else(|| "no-reply@localhost".to_string()),
            username,
            password: std::env::var("EMAIL_PASSWORD").ok(),
        })
    }
}

#[derive(Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

/// Posts each message as JSON to a mail relay.
pub struct RelayMailer {
    config: RelayMailerConfig,
    client: reqwest::Client,
}

impl RelayMailer {
    pub fn new(config: RelayMailerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<(), MailError> {
        let mail = OutgoingMail {
            from: &self.config.from,
            to: email,
            subject: super::OTP_SUBJECT,
            html: super::otp_html(code),
        };

        let mut request = self.client.post(&self.config.url).json(&mail);
        if let Some(user) = &self.config.username {
            request = request.basic_auth(user, self.config.password.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected(format!("{status}: {body}")));
        }

        tracing::debug!(user_email = %mask_email(email), "Signup code mailed");
        Ok(())
    }
}

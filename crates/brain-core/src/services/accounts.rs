//! Email-verified signup and password login.

use std::sync::Arc;

use crate::domain::{User, mask_email};
use crate::error::{DomainError, RepoError};
use crate::ports::{Mailer, PasswordService, UserRepository};

use super::OtpStore;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const EMAIL_TAKEN: &str = "Email already registered";

/// Fields submitted on signup. Empty strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub otp: String,
}

pub struct AccountService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    otp: OtpStore,
    mailer: Arc<dyn Mailer>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        otp: OtpStore,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            users,
            passwords,
            otp,
            mailer,
        }
    }

    /// Issue a signup code for an unregistered email and mail it.
    pub async fn request_otp(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::validation(EMAIL_TAKEN));
        }

        let code = self.otp.request_code(email).await?;
        self.mailer.send_otp(email, &code).await?;

        tracing::info!(user_email = %mask_email(email), "Signup code issued");
        Ok(())
    }

    /// Create a verified account. The submitted code is consumed on success.
    pub async fn signup(&self, input: SignupInput) -> Result<User, DomainError> {
        let SignupInput {
            username,
            email,
            password,
            otp,
        } = input;

        if [&username, &email, &password, &otp]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(DomainError::validation(ALL_FIELDS_REQUIRED));
        }

        if !self.otp.verify_code(&email, &otp).await? {
            return Err(DomainError::validation("Invalid OTP"));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::validation(EMAIL_TAKEN));
        }

        let password_hash = self.passwords.hash(&password)?;
        let user = User::verified(username, email, password_hash);

        let saved = match self.users.insert(user).await {
            Ok(user) => user,
            // Lost a race with a concurrent signup for the same email.
            Err(RepoError::Constraint(_)) => return Err(DomainError::validation(EMAIL_TAKEN)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %saved.id, "User signed up");
        Ok(saved)
    }

    /// Check credentials and return the matching user.
    ///
    /// An unknown email and a wrong password are reported with different
    /// messages.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::validation(ALL_FIELDS_REQUIRED));
        }

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::validation("User not found"))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(DomainError::validation("Invalid credentials"));
        }

        Ok(user)
    }
}

//! One-time signup codes keyed by email.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::ports::{Cache, CacheError};

const KEY_PREFIX: &str = "otp:";

/// Pending signup codes, one per email.
///
/// Requesting a code again for the same email replaces the pending one.
/// Codes are single-use. With `ttl` unset a code stays pending until it is
/// verified.
pub struct OtpStore {
    cache: Arc<dyn Cache>,
    ttl: Option<Duration>,
}

impl OtpStore {
    pub fn new(cache: Arc<dyn Cache>, ttl: Option<Duration>) -> Self {
        Self { cache, ttl }
    }

    /// Six random decimal digits, zero-padded.
    pub fn generate_code() -> String {
        let n: u32 = rand::rng().random_range(0..1_000_000);
        format!("{n:06}")
    }

    fn key(email: &str) -> String {
        format!("{KEY_PREFIX}{email}")
    }

    /// Issue a fresh code for `email` and return it for delivery.
    pub async fn request_code(&self, email: &str) -> Result<String, CacheError> {
        let code = Self::generate_code();
        self.cache.set(&Self::key(email), &code, self.ttl).await?;
        Ok(code)
    }

    /// Check `submitted` against the pending code, consuming it on a match.
    ///
    /// A mismatch leaves the pending code in place. No pending code is a
    /// plain `false`.
    pub async fn verify_code(&self, email: &str, submitted: &str) -> Result<bool, CacheError> {
        let key = Self::key(email);
        match self.cache.get(&key).await? {
            Some(pending) if pending == submitted => {
                self.cache.delete(&key).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

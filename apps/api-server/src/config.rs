//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use brain_infra::auth::JwtConfig;
use brain_infra::database::DatabaseConfig;

#[cfg(feature = "redis")]
use brain_infra::cache::RedisConfig;
#[cfg(feature = "mail")]
use brain_infra::mail::RelayMailerConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on in-memory repositories.
    pub database: Option<DatabaseConfig>,
    /// `None` leaves the token service unregistered.
    pub jwt: Option<JwtConfig>,
    /// Lifetime of a pending signup code; `None` keeps it until used.
    pub otp_ttl: Option<Duration>,
    #[cfg(feature = "redis")]
    pub redis: Option<RedisConfig>,
    #[cfg(feature = "mail")]
    pub mail: Option<RelayMailerConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            otp_ttl: env::var("OTP_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
            #[cfg(feature = "redis")]
            redis: RedisConfig::from_env(),
            #[cfg(feature = "mail")]
            mail: RelayMailerConfig::from_env(),
        }
    }
}

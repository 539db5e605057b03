//! # Brain Infrastructure
//!
//! Concrete implementations of the ports defined in `brain-core`:
//! persistence, the OTP cache, token and password services, and mail
//! delivery.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `redis` - Redis-backed OTP cache
//! - `mail` - HTTP mail relay

pub mod cache;
pub mod database;
pub mod mail;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::{
    DatabaseConfig, InMemoryContentRepository, InMemoryShareLinkRepository,
    InMemoryTagRepository, InMemoryUserRepository,
};
pub use mail::LogMailer;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{
    PostgresContentRepository, PostgresShareLinkRepository, PostgresTagRepository,
    PostgresUserRepository,
};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};

#[cfg(feature = "mail")]
pub use mail::{RelayMailer, RelayMailerConfig};

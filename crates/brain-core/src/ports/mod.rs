//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod cache;
mod mailer;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use cache::{Cache, CacheError};
pub use mailer::{MailError, Mailer};
pub use repository::{
    BaseRepository, ContentRepository, ShareLinkRepository, TagRepository, UserRepository,
};

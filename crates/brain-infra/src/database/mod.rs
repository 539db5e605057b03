//! Persistence: PostgreSQL repositories via SeaORM plus in-memory fallbacks.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
mod postgres_content;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::{
    InMemoryContentRepository, InMemoryShareLinkRepository, InMemoryTagRepository,
    InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_content::PostgresContentRepository;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresShareLinkRepository, PostgresTagRepository, PostgresUserRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;

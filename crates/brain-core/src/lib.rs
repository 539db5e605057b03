//! # Brain Core
//!
//! The domain layer of the Second Brain service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the ports infrastructure must implement, and the services that
//! enforce the account, content and sharing rules on top of those ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;

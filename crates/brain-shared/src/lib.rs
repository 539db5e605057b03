//! # Brain Shared
//!
//! Request and response bodies of the HTTP API. Kept free of server
//! dependencies so a client can deserialize the same types.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};

//! SeaORM entities, one per table.

pub mod content;
pub mod content_tag;
pub mod share_link;
pub mod tag;
pub mod user;

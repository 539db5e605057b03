//! Domain entities - the core business objects.

mod content;
mod share_link;
mod tag;
mod user;

pub use content::{Content, ContentDetails, ContentType, InvalidContentType};
pub use share_link::ShareLink;
pub use tag::{DEFAULT_TAG_COLOR, Tag};
pub use user::{User, mask_email};

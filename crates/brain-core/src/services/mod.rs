//! Application services built on the ports.

mod accounts;
mod content;
mod otp;
mod share;

pub use accounts::{AccountService, SignupInput};
pub use content::{ContentPatch, ContentService, NewContent, TagInput};
pub use otp::OtpStore;
pub use share::ShareService;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tag;

/// The kinds of item a user can save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "socialPost")]
    SocialPost,
    #[serde(rename = "Notes")]
    Notes,
    #[serde(rename = "document")]
    Document,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Video,
        ContentType::SocialPost,
        ContentType::Notes,
        ContentType::Document,
    ];

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::SocialPost => "socialPost",
            ContentType::Notes => "Notes",
            ContentType::Document => "document",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the enumerated content types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid content type: {0}")]
pub struct InvalidContentType(pub String);

impl FromStr for ContentType {
    type Err = InvalidContentType;

    /// Matching is exact: `"Notes"` is valid, `"notes"` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidContentType(s.to_string()))
    }
}

/// Content entity - a saved item owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub content_type: ContentType,
    pub link: Option<String>,
    pub image: Option<String>,
    /// Attached tags, in the order they were supplied.
    pub tag_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn new(user_id: Uuid, title: String, content_type: ContentType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description: String::new(),
            content_type,
            link: None,
            image: None,
            tag_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Content with its tags resolved, as returned to callers.
#[derive(Debug, Clone)]
pub struct ContentDetails {
    pub content: Content,
    pub tags: Vec<Tag>,
}

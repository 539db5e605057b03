use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color given to tags created without one.
pub const DEFAULT_TAG_COLOR: &str = "#000000";

/// Tag entity. Titles are unique per owner, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(user_id: Uuid, title: String, color: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            color: color.unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

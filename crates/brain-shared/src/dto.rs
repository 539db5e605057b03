//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request a signup code for `email`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestOtpRequest {
    #[serde(default)]
    pub email: String,
}

/// Complete signup with the emailed code. Missing fields deserialize as
/// empty so the handler can answer with a validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub otp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The caller's own account, as returned after signup and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Another user's profile; no id or timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserResponse {
    pub email: String,
    pub username: String,
    pub is_verified: bool,
}

/// Signup and login success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// A tag reference inside a content request. Accepts either a bare title
/// string or `{"title": ..., "color": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRequest {
    Title(String),
    Detailed {
        #[serde(default)]
        title: String,
        #[serde(default)]
        color: Option<String>,
    },
}

impl TagRequest {
    pub fn title(&self) -> &str {
        match self {
            TagRequest::Title(title) => title,
            TagRequest::Detailed { title, .. } => title,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            TagRequest::Title(_) => None,
            TagRequest::Detailed { color, .. } => color.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContentRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<TagRequest>>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<TagRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<TagResponse>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    pub message: String,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability token exposing one user's whole content library.
///
/// Links never expire and cannot be revoked; anyone holding `hash` can
/// resolve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLink {
    pub id: Uuid,
    pub hash: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShareLink {
    pub fn new(user_id: Uuid, hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            hash,
            user_id,
            created_at: Utc::now(),
        }
    }
}

//! Share-link issuance and public resolution.

use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::domain::{ContentDetails, ShareLink};
use crate::error::{DomainError, RepoError};
use crate::ports::ShareLinkRepository;

use super::ContentService;

/// Random bytes per hash; hex encoding doubles the length.
const HASH_BYTES: usize = 6;
const MAX_INSERT_ATTEMPTS: usize = 3;

pub struct ShareService {
    links: Arc<dyn ShareLinkRepository>,
    content: Arc<ContentService>,
}

impl ShareService {
    pub fn new(links: Arc<dyn ShareLinkRepository>, content: Arc<ContentService>) -> Self {
        Self { links, content }
    }

    pub fn generate_hash() -> String {
        let mut bytes = [0u8; HASH_BYTES];
        rand::rng().fill(&mut bytes);
        hex::encode(bytes)
    }

    /// Issue a new link for `user_id`. A hash collision draws a fresh hash.
    pub async fn create_link(&self, user_id: Uuid) -> Result<ShareLink, DomainError> {
        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let link = ShareLink::new(user_id, Self::generate_hash());
            match self.links.insert(link).await {
                Ok(saved) => {
                    tracing::info!(user_id = %user_id, link_id = %saved.id, "Share link created");
                    return Ok(saved);
                }
                Err(RepoError::Constraint(_)) => {
                    tracing::warn!(attempt, "Share hash collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::Internal(format!(
            "no unique share hash after {MAX_INSERT_ATTEMPTS} attempts"
        )))
    }

    /// All content owned by the link's creator. Requires no authentication.
    pub async fn resolve(&self, hash: &str) -> Result<Vec<ContentDetails>, DomainError> {
        let link = self
            .links
            .find_by_hash(hash)
            .await?
            .ok_or_else(|| DomainError::not_found("Link"))?;

        self.content.list(link.user_id).await
    }
}

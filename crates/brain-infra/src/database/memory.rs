//! In-memory repositories - used when no `DATABASE_URL` is configured.
//!
//! Each repository enforces the same unique keys as the PostgreSQL schema.
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use brain_core::domain::{Content, ContentType, ShareLink, Tag, User};
use brain_core::error::RepoError;
use brain_core::ports::{
    BaseRepository, ContentRepository, ShareLinkRepository, TagRepository, UserRepository,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: RwLock<Vec<Tag>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_or_create(
        &self,
        user_id: Uuid,
        title: &str,
        color: Option<&str>,
    ) -> Result<Tag, RepoError> {
        // Lookup and insert under one write lock
        let mut tags = self.tags.write().await;

        if let Some(existing) = tags.iter().find(|t| t.user_id == user_id && t.title == title) {
            return Ok(existing.clone());
        }

        let tag = Tag::new(user_id, title.to_string(), color.map(str::to_string));
        tags.push(tag.clone());
        Ok(tag)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepoError> {
        let tags = self.tags.read().await;
        Ok(tags.iter().filter(|t| ids.contains(&t.id)).cloned().collect())
    }

    async fn search_by_title(&self, user_id: Uuid, query: &str) -> Result<Vec<Tag>, RepoError> {
        let needle = query.to_lowercase();
        let tags = self.tags.read().await;

        let mut found: Vec<Tag> = tags
            .iter()
            .filter(|t| t.user_id == user_id && t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(found)
    }
}

/// Content kept in insertion order, which is also creation order.
#[derive(Default)]
pub struct InMemoryContentRepository {
    items: RwLock<Vec<Content>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn owned_where<F>(&self, user_id: Uuid, keep: F) -> Vec<Content>
    where
        F: Fn(&Content) -> bool,
    {
        let items = self.items.read().await;
        items
            .iter()
            .filter(|c| c.user_id == user_id && keep(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn insert(&self, content: Content) -> Result<Content, RepoError> {
        self.items.write().await.push(content.clone());
        Ok(content)
    }

    async fn update(&self, content: Content) -> Result<Content, RepoError> {
        let mut items = self.items.write().await;

        let slot = items
            .iter_mut()
            .find(|c| c.id == content.id && c.user_id == content.user_id)
            .ok_or(RepoError::NotFound)?;
        *slot = content.clone();
        Ok(content)
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Content>, RepoError> {
        Ok(self.owned_where(user_id, |c| c.id == id).await.into_iter().next())
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|c| !(c.id == id && c.user_id == user_id));
        Ok(items.len() < before)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Content>, RepoError> {
        Ok(self.owned_where(user_id, |_| true).await)
    }

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        content_type: ContentType,
    ) -> Result<Vec<Content>, RepoError> {
        Ok(self
            .owned_where(user_id, |c| c.content_type == content_type)
            .await)
    }

    async fn search(
        &self,
        user_id: Uuid,
        query: &str,
        tag_ids: &[Uuid],
    ) -> Result<Vec<Content>, RepoError> {
        let needle = query.to_lowercase();
        Ok(self
            .owned_where(user_id, |c| {
                c.title.to_lowercase().contains(&needle)
                    || c.tag_ids.iter().any(|id| tag_ids.contains(id))
            })
            .await)
    }
}

#[derive(Default)]
pub struct InMemoryShareLinkRepository {
    links: RwLock<HashMap<String, ShareLink>>,
}

impl InMemoryShareLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<ShareLink, Uuid> for InMemoryShareLinkRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ShareLink>, RepoError> {
        let links = self.links.read().await;
        Ok(links.values().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, link: ShareLink) -> Result<ShareLink, RepoError> {
        let mut links = self.links.write().await;

        if links.contains_key(&link.hash) {
            return Err(RepoError::Constraint("share_links.hash".to_string()));
        }

        links.insert(link.hash.clone(), link.clone());
        Ok(link)
    }
}

#[async_trait]
impl ShareLinkRepository for InMemoryShareLinkRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, RepoError> {
        Ok(self.links.read().await.get(hash).cloned())
    }
}

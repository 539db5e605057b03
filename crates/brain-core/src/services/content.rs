//! Content operations and tag resolution.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use uuid::Uuid;

use crate::domain::{Content, ContentDetails, ContentType, Tag};
use crate::error::DomainError;
use crate::ports::{ContentRepository, TagRepository};

const CONTENT: &str = "Content";
const INVALID_TYPE: &str = "Invalid content type";

/// A tag reference by title, as submitted with content.
#[derive(Debug, Clone)]
pub struct TagInput {
    pub title: String,
    /// Used only when the tag does not exist yet.
    pub color: Option<String>,
}

impl TagInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }
}

/// Fields for a new content item. `title` and `content_type` are required.
#[derive(Debug, Clone, Default)]
pub struct NewContent {
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<TagInput>>,
}

/// Partial update. `None` leaves a field unchanged; `Some("")` overwrites it.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    /// Replaces the whole tag set when present.
    pub tags: Option<Vec<TagInput>>,
}

pub struct ContentService {
    contents: Arc<dyn ContentRepository>,
    tags: Arc<dyn TagRepository>,
}

impl ContentService {
    pub fn new(contents: Arc<dyn ContentRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { contents, tags }
    }

    fn parse_type(raw: &str) -> Result<ContentType, DomainError> {
        raw.parse().map_err(|_| DomainError::validation(INVALID_TYPE))
    }

    /// Resolve tag titles to ids owned by `user_id`, creating missing tags.
    ///
    /// Lookups run concurrently. Titles that resolve to the same tag appear
    /// once, at their first position.
    pub async fn resolve_tags(
        &self,
        user_id: Uuid,
        inputs: &[TagInput],
    ) -> Result<Vec<Uuid>, DomainError> {
        if inputs.iter().any(|t| t.title.is_empty()) {
            return Err(DomainError::validation("Tag title is required"));
        }

        let resolved = try_join_all(inputs.iter().map(|t| {
            self.tags
                .find_or_create(user_id, &t.title, t.color.as_deref())
        }))
        .await?;

        let mut seen = HashSet::new();
        Ok(resolved
            .into_iter()
            .map(|tag| tag.id)
            .filter(|id| seen.insert(*id))
            .collect())
    }

    /// Attach tag records to each item, preserving item and tag order.
    pub async fn with_tags(&self, items: Vec<Content>) -> Result<Vec<ContentDetails>, DomainError> {
        let mut ids: Vec<Uuid> = items.iter().flat_map(|c| c.tag_ids.iter().copied()).collect();
        ids.sort_unstable();
        ids.dedup();

        let by_id: HashMap<Uuid, Tag> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.tags
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        Ok(items
            .into_iter()
            .map(|content| {
                let tags = content
                    .tag_ids
                    .iter()
                    .filter_map(|id| by_id.get(id).cloned())
                    .collect();
                ContentDetails { content, tags }
            })
            .collect())
    }

    async fn single(&self, content: Content) -> Result<ContentDetails, DomainError> {
        let mut details = self.with_tags(vec![content]).await?;
        details
            .pop()
            .ok_or_else(|| DomainError::Internal("content vanished while loading tags".into()))
    }

    pub async fn create(&self, user_id: Uuid, input: NewContent) -> Result<ContentDetails, DomainError> {
        let (title, raw_type) = match (input.title, input.content_type) {
            (Some(title), Some(raw_type)) if !title.is_empty() && !raw_type.is_empty() => {
                (title, raw_type)
            }
            _ => return Err(DomainError::validation("Title and type are required")),
        };
        let content_type = Self::parse_type(&raw_type)?;

        let tag_ids = match &input.tags {
            Some(tags) => self.resolve_tags(user_id, tags).await?,
            None => Vec::new(),
        };

        let mut content = Content::new(user_id, title, content_type);
        content.description = input.description.unwrap_or_default();
        content.link = input.link.filter(|s| !s.is_empty());
        content.image = input.image.filter(|s| !s.is_empty());
        content.tag_ids = tag_ids;

        let saved = self.contents.insert(content).await?;
        tracing::info!(content_id = %saved.id, user_id = %user_id, "Content created");

        self.single(saved).await
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: ContentPatch,
    ) -> Result<ContentDetails, DomainError> {
        let mut content = self
            .contents
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(CONTENT))?;

        let content_type = patch
            .content_type
            .as_deref()
            .map(Self::parse_type)
            .transpose()?;

        if let Some(tags) = &patch.tags {
            content.tag_ids = self.resolve_tags(user_id, tags).await?;
        }
        if let Some(title) = patch.title {
            content.title = title;
        }
        if let Some(content_type) = content_type {
            content.content_type = content_type;
        }
        if let Some(description) = patch.description {
            content.description = description;
        }
        if let Some(link) = patch.link {
            content.link = Some(link);
        }
        if let Some(image) = patch.image {
            content.image = Some(image);
        }
        content.updated_at = Utc::now();

        let saved = self.contents.update(content).await?;
        tracing::info!(content_id = %saved.id, user_id = %user_id, "Content updated");

        self.single(saved).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        if !self.contents.delete_owned(id, user_id).await? {
            return Err(DomainError::not_found(CONTENT));
        }
        tracing::info!(content_id = %id, user_id = %user_id, "Content deleted");
        Ok(())
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ContentDetails>, DomainError> {
        let items = self.contents.find_by_user(user_id).await?;
        self.with_tags(items).await
    }

    pub async fn list_by_type(
        &self,
        user_id: Uuid,
        raw_type: &str,
    ) -> Result<Vec<ContentDetails>, DomainError> {
        let content_type = Self::parse_type(raw_type)?;
        let items = self
            .contents
            .find_by_user_and_type(user_id, content_type)
            .await?;
        self.with_tags(items).await
    }

    /// Case-insensitive substring match on titles, or on the titles of the
    /// caller's tags.
    pub async fn search(&self, user_id: Uuid, query: &str) -> Result<Vec<ContentDetails>, DomainError> {
        if query.is_empty() {
            return Err(DomainError::validation("Search query is required"));
        }

        let tag_ids: Vec<Uuid> = self
            .tags
            .search_by_title(user_id, query)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        let items = self.contents.search(user_id, query, &tag_ids).await?;
        self.with_tags(items).await
    }
}

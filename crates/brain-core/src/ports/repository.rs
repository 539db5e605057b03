use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Content, ContentType, ShareLink, Tag, User};
use crate::error::RepoError;

/// Generic repository trait for entities that are looked up by id and
/// inserted once.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique-key collisions surface as
    /// [`RepoError::Constraint`].
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Per-user tag storage.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Return the tag titled `title` owned by `user_id`, creating it with
    /// `color` if absent. Concurrent calls for the same pair yield the same
    /// tag.
    async fn find_or_create(
        &self,
        user_id: Uuid,
        title: &str,
        color: Option<&str>,
    ) -> Result<Tag, RepoError>;

    /// Fetch tags by id. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepoError>;

    /// Tags owned by `user_id` whose title contains `query`, ignoring case.
    async fn search_by_title(&self, user_id: Uuid, query: &str) -> Result<Vec<Tag>, RepoError>;
}

/// Content storage. Every read and write is scoped to an owner.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn insert(&self, content: Content) -> Result<Content, RepoError>;

    /// Overwrite a stored item, including its tag list.
    async fn update(&self, content: Content) -> Result<Content, RepoError>;

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Content>, RepoError>;

    /// Delete an item. Returns `false` when no row matched `(id, user_id)`.
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Content>, RepoError>;

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        content_type: ContentType,
    ) -> Result<Vec<Content>, RepoError>;

    /// Items whose title contains `query` (ignoring case) or that carry any
    /// of `tag_ids`.
    async fn search(
        &self,
        user_id: Uuid,
        query: &str,
        tag_ids: &[Uuid],
    ) -> Result<Vec<Content>, RepoError>;
}

/// Share link repository.
#[async_trait]
pub trait ShareLinkRepository: BaseRepository<ShareLink, Uuid> {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, RepoError>;
}

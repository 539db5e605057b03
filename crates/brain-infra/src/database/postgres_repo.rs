//! PostgreSQL repository implementations for users, tags and share links.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict, SimpleExpr};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use brain_core::domain::{ShareLink, Tag, User, mask_email};
use brain_core::error::RepoError;
use brain_core::ports::{ShareLinkRepository, TagRepository, UserRepository};

use super::entity::share_link::{self, Entity as ShareLinkEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

/// PostgreSQL share link repository.
pub type PostgresShareLinkRepository = PostgresBaseRepository<ShareLinkEntity>;

/// `lower(column) LIKE '%query%'` with LIKE metacharacters in `query` escaped.
pub(crate) fn contains_ignore_case(column: impl ColumnTrait + 'static, query: &str) -> SimpleExpr {
    let escaped = query
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{escaped}%")).escape('\\'))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

async fn find_tag(db: &DbConn, user_id: Uuid, title: &str) -> Result<Option<tag::Model>, RepoError> {
    TagEntity::find()
        .filter(tag::Column::UserId.eq(user_id))
        .filter(tag::Column::Title.eq(title))
        .one(db)
        .await
        .map_err(map_db_err)
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_or_create(
        &self,
        user_id: Uuid,
        title: &str,
        color: Option<&str>,
    ) -> Result<Tag, RepoError> {
        if let Some(existing) = find_tag(&self.db, user_id, title).await? {
            return Ok(existing.into());
        }

        // A concurrent insert of the same (user_id, title) wins silently;
        // the re-fetch below returns whichever row landed.
        let candidate: tag::ActiveModel =
            Tag::new(user_id, title.to_string(), color.map(str::to_string)).into();
        TagEntity::insert(candidate)
            .on_conflict(
                OnConflict::columns([tag::Column::UserId, tag::Column::Title])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        find_tag(&self.db, user_id, title)
            .await?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = TagEntity::find()
            .filter(tag::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search_by_title(&self, user_id: Uuid, query: &str) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .filter(tag::Column::UserId.eq(user_id))
            .filter(contains_ignore_case(tag::Column::Title, query))
            .order_by_asc(tag::Column::Title)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ShareLinkRepository for PostgresShareLinkRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, RepoError> {
        let result = ShareLinkEntity::find()
            .filter(share_link::Column::Hash.eq(hash))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

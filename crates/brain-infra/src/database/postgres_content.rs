//! PostgreSQL content repository. Each write replaces the item's
//! `content_tags` rows inside the same transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbConn, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use brain_core::domain::{Content, ContentType};
use brain_core::error::RepoError;
use brain_core::ports::ContentRepository;

use super::entity::content::{self, Entity as ContentEntity};
use super::entity::content_tag::{self, Entity as ContentTagEntity};
use super::postgres_base::map_db_err;
use super::postgres_repo::contains_ignore_case;

pub struct PostgresContentRepository {
    db: DbConn,
}

impl PostgresContentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Tag ids per content id, in attachment order.
    async fn tag_ids_for(&self, content_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, RepoError> {
        if content_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = ContentTagEntity::find()
            .filter(content_tag::Column::ContentId.is_in(content_ids.iter().copied()))
            .order_by_asc(content_tag::Column::Position)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_content: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in rows {
            by_content.entry(row.content_id).or_default().push(row.tag_id);
        }
        Ok(by_content)
    }

    async fn load(&self, query: Select<ContentEntity>) -> Result<Vec<Content>, RepoError> {
        let models = query
            .order_by_asc(content::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut tags = self.tag_ids_for(&ids).await?;

        models
            .into_iter()
            .map(|m| {
                let tag_ids = tags.remove(&m.id).unwrap_or_default();
                m.into_domain(tag_ids)
            })
            .collect()
    }

    fn owned_by(user_id: Uuid) -> Select<ContentEntity> {
        ContentEntity::find().filter(content::Column::UserId.eq(user_id))
    }
}

async fn replace_tags<C: ConnectionTrait>(conn: &C, content: &Content) -> Result<(), DbErr> {
    ContentTagEntity::delete_many()
        .filter(content_tag::Column::ContentId.eq(content.id))
        .exec(conn)
        .await?;

    if content.tag_ids.is_empty() {
        return Ok(());
    }

    let rows = content
        .tag_ids
        .iter()
        .enumerate()
        .map(|(position, tag_id)| content_tag::ActiveModel {
            content_id: Set(content.id),
            tag_id: Set(*tag_id),
            position: Set(position as i32),
        });

    ContentTagEntity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn insert(&self, content: Content) -> Result<Content, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = content::ActiveModel::from(&content)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        replace_tags(&txn, &content).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        model.into_domain(content.tag_ids)
    }

    async fn update(&self, content: Content) -> Result<Content, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = content::ActiveModel::from(&content)
            .update(&txn)
            .await
            .map_err(map_db_err)?;
        replace_tags(&txn, &content).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        model.into_domain(content.tag_ids)
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Content>, RepoError> {
        let query = Self::owned_by(user_id).filter(content::Column::Id.eq(id));
        Ok(self.load(query).await?.into_iter().next())
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
        // content_tags rows go with it via ON DELETE CASCADE
        let result = ContentEntity::delete_many()
            .filter(content::Column::Id.eq(id))
            .filter(content::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Content>, RepoError> {
        self.load(Self::owned_by(user_id)).await
    }

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        content_type: ContentType,
    ) -> Result<Vec<Content>, RepoError> {
        let query =
            Self::owned_by(user_id).filter(content::Column::ContentType.eq(content_type.as_str()));
        self.load(query).await
    }

    async fn search(
        &self,
        user_id: Uuid,
        query: &str,
        tag_ids: &[Uuid],
    ) -> Result<Vec<Content>, RepoError> {
        let mut matches = Condition::any().add(contains_ignore_case(content::Column::Title, query));

        if !tag_ids.is_empty() {
            let tagged: Vec<Uuid> = ContentTagEntity::find()
                .filter(content_tag::Column::TagId.is_in(tag_ids.iter().copied()))
                .all(&self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|row| row.content_id)
                .collect();

            if !tagged.is_empty() {
                matches = matches.add(content::Column::Id.is_in(tagged));
            }
        }

        self.load(Self::owned_by(user_id).filter(matches)).await
    }
}

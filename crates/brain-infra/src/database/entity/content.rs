//! Content entity for SeaORM. Tags live in `content_tags`.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use brain_core::domain::{Content, ContentType};
use brain_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// One of the [`ContentType`] wire names.
    pub content_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::content_tag::Entity")]
    ContentTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::content_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain entity, attaching tag ids loaded separately.
    pub fn into_domain(self, tag_ids: Vec<Uuid>) -> Result<Content, RepoError> {
        let content_type: ContentType = self
            .content_type
            .parse()
            .map_err(|e: brain_core::domain::InvalidContentType| RepoError::Query(e.to_string()))?;

        Ok(Content {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            content_type,
            link: self.link,
            image: self.image,
            tag_ids,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl From<&Content> for ActiveModel {
    fn from(content: &Content) -> Self {
        Self {
            id: Set(content.id),
            user_id: Set(content.user_id),
            title: Set(content.title.clone()),
            description: Set(content.description.clone()),
            content_type: Set(content.content_type.as_str().to_string()),
            link: Set(content.link.clone()),
            image: Set(content.image.clone()),
            created_at: Set(content.created_at.into()),
            updated_at: Set(content.updated_at.into()),
        }
    }
}

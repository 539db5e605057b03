//! Share link entity.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "share_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub hash: String,
    pub user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for brain_core::domain::ShareLink {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            hash: model.hash,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<brain_core::domain::ShareLink> for ActiveModel {
    fn from(link: brain_core::domain::ShareLink) -> Self {
        Self {
            id: Set(link.id),
            hash: Set(link.hash),
            user_id: Set(link.user_id),
            created_at: Set(link.created_at.into()),
        }
    }
}

//! Users, tags, contents, their tag join table, and share links.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tags::Title).string().not_null())
                    .col(
                        ColumnDef::new(Tags::Color)
                            .string()
                            .not_null()
                            .default("#000000"),
                    )
                    .col(timestamp(Tags::CreatedAt))
                    .col(timestamp(Tags::UpdatedAt))
                    .foreign_key(&mut owner_fk("fk_tags_user", Tags::Table, Tags::UserId))
                    .to_owned(),
            )
            .await?;

        // find-or-create relies on this for concurrent inserts
        manager
            .create_index(
                Index::create()
                    .name("idx_tags_user_title")
                    .table(Tags::Table)
                    .col(Tags::UserId)
                    .col(Tags::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contents::UserId).uuid().not_null())
                    .col(ColumnDef::new(Contents::Title).string().not_null())
                    .col(
                        ColumnDef::new(Contents::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Contents::ContentType).string().not_null())
                    .col(ColumnDef::new(Contents::Link).text().null())
                    .col(ColumnDef::new(Contents::Image).text().null())
                    .col(timestamp(Contents::CreatedAt))
                    .col(timestamp(Contents::UpdatedAt))
                    .foreign_key(&mut owner_fk(
                        "fk_contents_user",
                        Contents::Table,
                        Contents::UserId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contents_user_created")
                    .table(Contents::Table)
                    .col(Contents::UserId)
                    .col(Contents::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContentTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ContentTags::ContentId).uuid().not_null())
                    .col(ColumnDef::new(ContentTags::TagId).uuid().not_null())
                    .col(ColumnDef::new(ContentTags::Position).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ContentTags::ContentId)
                            .col(ContentTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_tags_content")
                            .from(ContentTags::Table, ContentTags::ContentId)
                            .to(Contents::Table, Contents::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_tags_tag")
                            .from(ContentTags::Table, ContentTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShareLinks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ShareLinks::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(ShareLinks::Hash)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ShareLinks::UserId).uuid().not_null())
                    .col(timestamp(ShareLinks::CreatedAt))
                    .foreign_key(&mut owner_fk(
                        "fk_share_links_user",
                        ShareLinks::Table,
                        ShareLinks::UserId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShareLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// `user_id` reference to `users.id`, deleted with the user.
fn owner_fk<T, C>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Users::Table, Users::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    UserId,
    Title,
    Color,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contents {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ContentType,
    Link,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContentTags {
    Table,
    ContentId,
    TagId,
    Position,
}

#[derive(DeriveIden)]
enum ShareLinks {
    Table,
    Id,
    Hash,
    UserId,
    CreatedAt,
}

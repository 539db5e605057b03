#[cfg(test)]
mod tests {
    use crate::database::entity::{content, content_tag, share_link, tag, user};
    use crate::database::{
        PostgresContentRepository, PostgresShareLinkRepository, PostgresTagRepository,
        PostgresUserRepository,
    };
    use brain_core::domain::{ContentType, ShareLink};
    use brain_core::ports::{
        BaseRepository, ContentRepository, ShareLinkRepository, TagRepository, UserRepository,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_user_by_email() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "jane".to_owned(),
                email: "jane@example.com".to_owned(),
                password_hash: "$argon2id$v=19$stub".to_owned(),
                is_verified: true,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);
        let found = repo.find_by_email("jane@example.com").await.unwrap().unwrap();

        assert_eq!(found.id, user_id);
        assert_eq!(found.username, "jane");
        assert!(found.is_verified);
    }

    #[tokio::test]
    async fn test_find_or_create_returns_existing_tag() {
        let user_id = uuid::Uuid::new_v4();
        let tag_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Only the initial lookup is expected; no insert follows a hit.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![tag::Model {
                id: tag_id,
                user_id,
                title: "rust".to_owned(),
                color: "#b7410e".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresTagRepository::new(db);
        let tag = repo.find_or_create(user_id, "rust", None).await.unwrap();

        assert_eq!(tag.id, tag_id);
        assert_eq!(tag.color, "#b7410e");
    }

    #[tokio::test]
    async fn test_share_link_insert_and_lookup() {
        let link = ShareLink::new(uuid::Uuid::new_v4(), "0a1b2c3d4e5f".to_owned());
        let row = share_link::Model {
            id: link.id,
            hash: link.hash.clone(),
            user_id: link.user_id,
            created_at: link.created_at.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()], vec![row]])
            .into_connection();

        let repo = PostgresShareLinkRepository::new(db);
        let saved = repo.insert(link.clone()).await.unwrap();
        assert_eq!(saved.hash, "0a1b2c3d4e5f");

        let found = repo.find_by_hash("0a1b2c3d4e5f").await.unwrap().unwrap();
        assert_eq!(found.user_id, link.user_id);
    }

    #[tokio::test]
    async fn test_find_content_by_user_attaches_tag_ids_in_order() {
        let user_id = uuid::Uuid::new_v4();
        let content_id = uuid::Uuid::new_v4();
        let first_tag = uuid::Uuid::new_v4();
        let second_tag = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![content::Model {
                id: content_id,
                user_id,
                title: "Ownership explained".to_owned(),
                description: String::new(),
                content_type: "video".to_owned(),
                link: Some("https://example.com/v".to_owned()),
                image: None,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .append_query_results(vec![vec![
                content_tag::Model {
                    content_id,
                    tag_id: first_tag,
                    position: 0,
                },
                content_tag::Model {
                    content_id,
                    tag_id: second_tag,
                    position: 1,
                },
            ]])
            .into_connection();

        let repo = PostgresContentRepository::new(db);
        let items = repo.find_by_user(user_id).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content_type, ContentType::Video);
        assert_eq!(items[0].tag_ids, vec![first_tag, second_tag]);
    }

    #[tokio::test]
    async fn test_delete_unmatched_content_returns_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresContentRepository::new(db);
        let deleted = repo
            .delete_owned(uuid::Uuid::new_v4(), uuid::Uuid::new_v4())
            .await
            .unwrap();

        assert!(!deleted);
    }
}

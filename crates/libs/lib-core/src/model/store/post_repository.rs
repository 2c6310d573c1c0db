//! # Post Repository
//!
//! Posts are always returned with their author loaded; there is no lazy
//! relationship to resolve later.

use super::models::{Post, PostForCreate, PostRow, PublicUser};
use super::DbPool;
use crate::error::{AppError, Result};
use lib_utils::now_utc;
use sqlx::query_as;
use tracing::{debug, instrument};

const SELECT_POST_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.created_at,
           u.id AS author_id, u.username AS author_username, u.created_at AS author_created_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

pub struct PostRepository;

impl PostRepository {
    /// Persist a post owned by `author`.
    ///
    /// `author` must be a user already resolved from the store; the fields in
    /// `data` are expected to have passed request validation.
    #[instrument(skip(pool, data), fields(author_id = author.id))]
    pub async fn create(pool: &DbPool, data: PostForCreate, author: &PublicUser) -> Result<Post> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, author_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(author.id)
        .bind(now_utc())
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(post_id = id, "Post created");

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Post {id} vanished after insert")))
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Post>> {
        let row = query_as::<_, PostRow>(&format!("{SELECT_POST_WITH_AUTHOR} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Post::from))
    }

    /// Every post in insertion order, each with its author.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Post>> {
        let rows = query_as::<_, PostRow>(&format!("{SELECT_POST_WITH_AUTHOR} ORDER BY p.id ASC"))
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::{create_memory_pool, UserRepository};

    async fn setup_with_author() -> (DbPool, PublicUser) {
        let pool = create_memory_pool()
            .await
            .expect("Failed to create test database");
        let author = UserRepository::create(&pool, "post-test-user", "password123")
            .await
            .expect("User creation should succeed in test");
        (pool, author)
    }

    fn new_post(title: &str, content: &str) -> PostForCreate {
        PostForCreate {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_post_has_author() {
        let (pool, author) = setup_with_author().await;

        let post = PostRepository::create(&pool, new_post("Postingan Tes Saya", "Ini kontennya."), &author)
            .await
            .unwrap();

        assert_eq!(post.title, "Postingan Tes Saya");
        assert_eq!(post.content, "Ini kontennya.");
        assert_eq!(post.author, author);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let (pool, _) = setup_with_author().await;

        let posts = PostRepository::list_all(&pool).await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order_with_authors() {
        let (pool, alice) = setup_with_author().await;
        let bob = UserRepository::create(&pool, "bob", "password123")
            .await
            .unwrap();

        PostRepository::create(&pool, new_post("First post", "one"), &alice)
            .await
            .unwrap();
        PostRepository::create(&pool, new_post("Second post", "two"), &bob)
            .await
            .unwrap();
        PostRepository::create(&pool, new_post("Third post", "three"), &alice)
            .await
            .unwrap();

        let posts = PostRepository::list_all(&pool).await.unwrap();
        let summary: Vec<(&str, &str)> = posts
            .iter()
            .map(|p| (p.title.as_str(), p.author.username.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("First post", "post-test-user"),
                ("Second post", "bob"),
                ("Third post", "post-test-user"),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let (pool, _) = setup_with_author().await;

        assert!(PostRepository::find_by_id(&pool, 42).await.unwrap().is_none());
    }
}

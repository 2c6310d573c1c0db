//! # User Repository
//!
//! Database access for user records.
//!
//! Two read paths exist on purpose: [`UserRepository::find_by_username`] returns
//! the password hash and is used only by login; every other read returns a
//! [`PublicUser`], which has no hash field at all.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{UserRepository, create_memory_pool};
//! # async fn example() -> lib_core::Result<()> {
//! let pool = create_memory_pool().await?;
//!
//! let user = UserRepository::create(&pool, "alice", "password123").await?;
//! let found = UserRepository::find_by_id(&pool, user.id).await?;
//! assert_eq!(found, Some(user));
//! # Ok(())
//! # }
//! ```

use super::models::{PublicUser, UserCredentials};
use super::DbPool;
use crate::error::{AppError, Result};
use lib_auth::hash_password;
use lib_utils::now_utc;
use sqlx::query_as;
use tracing::{debug, instrument};

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Create a user, hashing `password` before it is stored.
    ///
    /// Hashing runs on the blocking thread pool. Uniqueness of `username` is
    /// enforced by the table's unique constraint, so concurrent registrations
    /// of the same name cannot both succeed.
    ///
    /// # Errors
    ///
    /// * [`AppError::Conflict`] - the username is already taken
    /// * [`AppError::Internal`] - hashing or database failure
    #[instrument(skip(pool, password))]
    pub async fn create(pool: &DbPool, username: &str, password: &str) -> Result<PublicUser> {
        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {e}")))??;

        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(&password_hash)
        .bind(now_utc())
        .execute(pool)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => AppError::Conflict("Username already exists".to_string()),
            other => other,
        })?;

        let id = result.last_insert_rowid();
        debug!(user_id = id, "User created");

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("User {id} vanished after insert")))
    }

    /// Find a user by username, **including the password hash**.
    ///
    /// For credential verification only.
    pub async fn find_by_username(pool: &DbPool, username: &str) -> Result<Option<UserCredentials>> {
        let user = query_as::<_, UserCredentials>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find a user by id. The result never contains the password hash.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<PublicUser>> {
        let user = query_as::<_, PublicUser>("SELECT id, username, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }
}

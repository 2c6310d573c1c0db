use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user as seen by everything except the login flow.
///
/// Carries no password material; this is the only user shape that is ever
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A user record including its password hash.
///
/// Only returned by [`UserRepository::find_by_username`](super::UserRepository::find_by_username)
/// for credential checks. Deliberately not `Serialize`.
#[derive(Clone, FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserCredentials {
    /// Drop the hash, keeping the public part of the record.
    pub fn into_public(self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"***REDACTED***")
            .finish()
    }
}

/// A post with its author loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: PublicUser,
}

/// Data required to create a post. The author is supplied separately.
#[derive(Debug, Clone)]
pub struct PostForCreate {
    pub title: String,
    pub content: String,
}

impl From<crate::dto::CreatePostRequest> for PostForCreate {
    fn from(req: crate::dto::CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Flat row of `posts JOIN users`.
#[derive(Debug, FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub author_created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            author: PublicUser {
                id: row.author_id,
                username: row.author_username,
                created_at: row.author_created_at,
            },
        }
    }
}

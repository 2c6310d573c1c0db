//! # Post Handlers

use crate::extract::ValidatedJson;
use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use lib_auth::Identity;
use lib_core::dto::CreatePostRequest;
use lib_core::model::store::{Post, PostRepository, UserRepository};
use lib_core::{AppError, DbPool, Result};
use tracing::{info, instrument, warn};

/// Publish a post as the bearer of the token.
///
/// The author is looked up again by id. A token that outlived its account
/// is answered with `401`.
#[instrument(skip(pool, identity, req), fields(user_id = identity.user_id))]
pub async fn create_post(
    State(pool): State<DbPool>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let Some(author) = UserRepository::find_by_id(&pool, identity.user_id).await? else {
        warn!("[POSTS] Token refers to a missing user");
        return Err(AppError::Unauthorized);
    };

    let post = PostRepository::create(&pool, req.into(), &author).await?;
    info!(post_id = post.id, "[POSTS] Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// List every post with its author, oldest first.
#[instrument(skip(pool))]
pub async fn list_posts(State(pool): State<DbPool>) -> Result<Json<Vec<Post>>> {
    let posts = PostRepository::list_all(&pool).await?;
    Ok(Json(posts))
}

#[cfg(test)]
mod tests;

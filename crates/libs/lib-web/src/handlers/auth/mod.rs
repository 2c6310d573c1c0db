//! # Authentication Handlers
//!
//! Registration, login and the profile of the bearer of a token.
//!
//! ## Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use lib_web::handlers::auth::{login, profile, register};
//!
//! let app = Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .route("/auth/profile", get(profile).route_layer(guard));
//! ```

use crate::extract::ValidatedJson;
use crate::server::AppState;
use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use lib_auth::Identity;
use lib_core::dto::{AccessTokenResponse, LoginRequest, ProfileResponse, RegisterRequest};
use lib_core::model::store::PublicUser;
use lib_core::Result;
use tracing::{info, instrument};

/// Register handler - creates a new account.
///
/// # Returns
///
/// * `201` with the public user (`id`, `username`, `created_at`)
/// * `400` if the username is empty or the password is shorter than 8 characters
/// * `409` if the username is taken
#[instrument(skip(state, req), fields(username = %req.username))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>)> {
    info!("[REGISTER] New registration request");
    let user = state.auth().register(&req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login handler - exchanges credentials for an access token.
///
/// Answers `201` on success and `401` for any credential mismatch.
#[instrument(skip(state, req), fields(username = %req.username))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<AccessTokenResponse>)> {
    info!("[LOGIN] Login attempt");
    let access_token = state.auth().login(&req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(AccessTokenResponse { access_token })))
}

/// Profile handler. Echoes the identity the guard verified.
pub async fn profile(Extension(identity): Extension<Identity>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: identity.user_id,
        username: identity.username,
    })
}

#[cfg(test)]
mod tests;

//! # Auth Service
//!
//! Registration and login.
//!
//! Login failures are indistinguishable to the caller: an unknown username and
//! a wrong password both produce [`AppError::Unauthorized`].

use lib_auth::{verify_password, TokenService};
use lib_core::model::store::{PublicUser, UserRepository};
use lib_core::{AppError, DbPool, Result};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct AuthService {
    db: DbPool,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(db: DbPool, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create an account. Fails with [`AppError::Conflict`] if the username is taken.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<PublicUser> {
        let user = UserRepository::create(&self.db, username, password).await?;
        info!(user_id = user.id, "[REGISTER] User registered");
        Ok(user)
    }

    /// Check credentials and issue an access token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let Some(user) = UserRepository::find_by_username(&self.db, username).await? else {
            warn!("[LOGIN] Unknown username");
            return Err(AppError::Unauthorized);
        };

        let password = password.to_owned();
        let password_hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {e}")))?;

        if !is_valid {
            warn!(user_id = user.id, "[LOGIN] Wrong password");
            return Err(AppError::Unauthorized);
        }

        let token = self
            .tokens
            .issue(user.id, &user.username)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        info!(user_id = user.id, "[LOGIN] User authenticated");
        Ok(token)
    }
}

//! # Application Configuration
//!
//! Configuration is read from environment variables once at startup, validated,
//! and then passed explicitly to whatever needs it. Nothing reads it from
//! global state.

use crate::error::{AppError, Result};
use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};

/// Shortest accepted signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long.**
    pub jwt_secret: String,

    /// JWT token validity period in hours
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub jwt_expiration_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `DATABASE_URL` (default `sqlite:data/blog.db`)
    /// - `JWT_SECRET` (required)
    /// - `JWT_EXPIRATION_HOURS` (default 1)
    pub fn from_env() -> Result<Self> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/blog.db");
        let jwt_secret = get_env("JWT_SECRET")?;
        let jwt_expiration_hours = get_env_parse_or("JWT_EXPIRATION_HOURS", 1)?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::Config(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} characters long"
            )));
        }

        if !(1..=720).contains(&self.jwt_expiration_hours) {
            return Err(AppError::Config(
                "JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

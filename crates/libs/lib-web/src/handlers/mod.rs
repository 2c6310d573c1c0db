//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature area. Handlers stay thin: they extract
//! the request, delegate to [`crate::services`] or the store, and shape the
//! response.
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: account endpoints
//!   - `POST /auth/register` - Create a new account
//!   - `POST /auth/login` - Exchange credentials for an access token
//!   - `GET /auth/profile` - Identity carried by the bearer token
//!
//! - **[`posts`]**: blog posts
//!   - `POST /posts` - Publish a post (bearer token required)
//!   - `GET /posts` - List all posts with their authors
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`. [`AppError`] renders itself as
//! `{ "code", "error", "message": [...] }` with the matching status code.
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS → Request stamp → Trace span → Request logging
//!     ↓
//! Auth guard (protected routes only)
//!     ↓
//! Extractors (ValidatedJson)
//!     ↓
//! Handler
//! ```

pub mod auth;
pub mod posts;

use axum::http::Uri;
use lib_core::AppError;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Cannot find {}", uri.path()))
}

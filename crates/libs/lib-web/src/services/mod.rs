//! # Services Layer
//!
//! Business logic sitting between HTTP handlers and the store:
//!
//! ```text
//! Handlers (HTTP) → Services (Business Logic) → Repositories / Token service
//! ```
//!
//! Services hold their dependencies (pool, token service) and return
//! `Result<T, AppError>`.

pub mod auth;

pub use auth::AuthService;

//! # Core Library
//!
//! Configuration, errors, DTOs and the SQLite store for users and posts.

pub mod config;
pub mod dto;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{create_memory_pool, create_pool, migrate, DbPool};

//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies of the REST API. Request DTOs derive
//! [`validator::Validate`]; their rules run before any handler logic.

pub mod auth;
pub mod de;
pub mod error;
pub mod posts;

pub use auth::*;
pub use error::*;
pub use posts::*;

//! # Authentication Library
//!
//! Password hashing and signed identity tokens.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password, PwdError};
pub use token::{Claims, Identity, TokenError, TokenService};

//! # Authentication DTOs
//!
//! - `POST /auth/register` - [`RegisterRequest`] -> [`PublicUser`](crate::model::store::models::PublicUser)
//! - `POST /auth/login` - [`LoginRequest`] -> [`AccessTokenResponse`]
//! - `GET /auth/profile` - [`ProfileResponse`]
//!
//! Missing string fields deserialize as empty strings so that they surface as
//! field-level validation messages instead of a generic body rejection.

use super::de::string_or_empty;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request.
///
/// ```json
/// { "username": "alice", "password": "password123" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 1, max = 50, message = "username must be between 1 and 50 characters"))]
    pub username: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 8, message = "password must be longer than or equal to 8 characters"))]
    pub password: String,
}

/// Login request.
///
/// Carries no validation rules: an empty or missing field is just another
/// credential mismatch and is answered with `401`, like a wrong password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// Bearer token for the `Authorization` header
    pub access_token: String,
}

/// Identity decoded from the caller's token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: i64,
    pub username: String,
}

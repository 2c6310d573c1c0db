//! # Post DTOs

use super::de::string_or_empty;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /posts`. The author is never part of the body; it comes from
/// the caller's token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 5, message = "title must be longer than or equal to 5 characters"))]
    pub title: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 1, message = "content should not be empty"))]
    pub content: String,
}

use serde::{Deserialize, Serialize};

/// Standard error body for every failed request.
///
/// ```json
/// {
///   "code": "Validation",
///   "error": "Bad Request",
///   "message": ["content should not be empty", "title must be longer than or equal to 5 characters"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Stable machine-readable code (`Validation`, `Unauthorized`, `Conflict`, ...)
    pub code: String,
    /// HTTP reason phrase
    pub error: String,
    /// Client-safe messages; one per failed field rule for validation errors
    pub message: Vec<String>,
}

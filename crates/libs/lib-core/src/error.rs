//! # Centralized Error Handling
//!
//! [`AppError`] is the single error type shared by the store, services and
//! HTTP handlers. Each variant maps to exactly one HTTP status:
//!
//! | Variant | Status |
//! |---------|--------|
//! | [`Validation`](AppError::Validation) | 400 Bad Request |
//! | [`Unauthorized`](AppError::Unauthorized) | 401 Unauthorized |
//! | [`NotFound`](AppError::NotFound) | 404 Not Found |
//! | [`Conflict`](AppError::Conflict) | 409 Conflict |
//! | [`Config`](AppError::Config) / [`Internal`](AppError::Internal) | 500 Internal Server Error |
//!
//! Authentication failures carry no detail at all: the client only ever sees
//! "Unauthorized", whatever the cause. Server errors are logged in full and
//! answered with a generic message.

use crate::dto::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lib_auth::PwdError;
use thiserror::Error;
use validator::ValidationErrors;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// One message per failed field rule.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Unknown user, wrong password, or a missing/invalid/expired token.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violation (e.g. username taken).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, stable error code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::Unauthorized => "Unauthorized",
            AppError::NotFound(_) => "NotFound",
            AppError::Conflict(_) => "Conflict",
            AppError::Config(_) => "Config",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Messages that are safe to show to the client.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(messages) => messages.clone(),
            AppError::Unauthorized => vec!["Unauthorized".to_string()],
            AppError::NotFound(msg) | AppError::Conflict(msg) => vec![msg.clone()],
            AppError::Config(_) | AppError::Internal(_) => {
                vec!["An internal error occurred".to_string()]
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = ErrorResponse {
            code: self.code().to_string(),
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.user_messages(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// Unique constraint violations become [`AppError::Conflict`]; anything else is
/// an internal error.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Resource already exists".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Internal(format!("Migration error: {}", err))
    }
}

impl From<PwdError> for AppError {
    fn from(err: PwdError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Flatten field errors into sorted, human-readable messages.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();

        AppError::Validation(messages)
    }
}

//! # Validated JSON Extractor
//!
//! [`ValidatedJson`] deserializes a JSON body and runs its `validator` rules
//! before the handler body executes. Any failure, including a malformed body,
//! is answered with `400` and a list of messages.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use lib_core::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

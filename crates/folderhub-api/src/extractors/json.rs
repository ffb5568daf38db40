//! JSON body extractor with `validator` rules applied.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use folderhub_core::error::AppError;

/// Like `Json<T>`, but rejects with an [`AppError`] so malformed bodies get
/// the same `{"detail": ...}` shape as every other failure.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        Ok(ValidJson(value))
    }
}

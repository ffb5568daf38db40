//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use folderhub_core::error::AppError;
use folderhub_service::folder::NOT_FOUND_MESSAGE;

/// Folder id taken from the `{id}` path segment.
///
/// A segment that is not a UUID cannot name any folder, so it is rejected
/// as not found rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct FolderId(pub Uuid);

/// Parses a folder UUID from a path segment.
pub fn parse_folder_id(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))
}

impl<S> FromRequestParts<S> for FolderId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))?;
        parse_folder_id(&raw).map(FolderId)
    }
}

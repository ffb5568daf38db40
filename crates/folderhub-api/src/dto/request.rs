//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /folders/` and `POST /folders/{id}/update`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FolderNameRequest {
    /// Folder name.
    #[validate(length(min = 1, message = "Folder name cannot be empty"))]
    pub name: String,
}

/// Body of `POST /folders/{id}/update/parent`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FolderParentRequest {
    /// New parent; `null` moves the folder to the root. The key itself is
    /// required.
    #[serde(deserialize_with = "Option::deserialize")]
    pub parent_id: Option<Uuid>,
}

/// Body of `POST /folders/{id}/update/items`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FolderItemsRequest {
    /// Replacement payload, stored verbatim.
    pub items: serde_json::Value,
}

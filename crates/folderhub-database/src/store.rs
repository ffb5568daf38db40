//! Persistence trait the folder service is written against.

use async_trait::async_trait;
use uuid::Uuid;

use folderhub_core::result::AppResult;
use folderhub_entity::folder::{CreateFolder, Folder};

/// Owner-scoped folder persistence.
///
/// Every lookup and write is keyed by both the folder id and the owning
/// user, so a folder belonging to someone else is indistinguishable from a
/// missing one. Implementations must reject a write that would give two
/// folders of one owner the same name under the same parent, returning a
/// `Conflict` error.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// All folders owned by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>>;

    /// A single folder, if it exists and belongs to `user_id`.
    async fn find_by_id_and_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Folder>>;

    /// The folder named `name` directly under `parent_id` (root when `None`).
    async fn find_by_parent_and_name(
        &self,
        parent_id: Option<Uuid>,
        user_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Folder>>;

    /// Ids on the chain from `folder_id` up to its root, starting with
    /// `folder_id` itself. Empty when the folder does not exist.
    async fn ancestor_ids(&self, folder_id: Uuid, user_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Insert a new folder and return the stored record.
    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Set the name. `None` when the folder vanished.
    async fn update_name(&self, id: Uuid, user_id: Uuid, name: &str) -> AppResult<Option<Folder>>;

    /// Set the parent. `None` when the folder vanished.
    async fn update_parent(
        &self,
        id: Uuid,
        user_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Option<Folder>>;

    /// Replace the items payload. `None` when the folder vanished.
    async fn update_items(
        &self,
        id: Uuid,
        user_id: Uuid,
        items: &serde_json::Value,
    ) -> AppResult<Option<Folder>>;

    /// Remove a folder. Children are left in place.
    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

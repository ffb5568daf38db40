//! Folder CRUD operations scoped to the calling user.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_database::store::FolderStore;
use folderhub_entity::folder::{CreateFolder, Folder};

use crate::context::RequestContext;

/// Shown for any folder the caller cannot see, whether missing or foreign.
pub const NOT_FOUND_MESSAGE: &str = "We could not find what you're looking for :/";

const MSG_EXISTS: &str = "Folder already exists";
const MSG_CREATE_FAILED: &str = "Error creating folder";
const MSG_UPDATE_FAILED: &str = "Error updating folder";
const MSG_DELETE_FAILED: &str = "Error deleting folder";

/// Maintains each user's folder forest.
///
/// Every mutation first resolves the folder through the same owner-scoped
/// lookup as [`FolderService::get_folder`], so a folder owned by another
/// user always yields `NotFound` before any write is attempted.
#[derive(Clone)]
pub struct FolderService {
    /// Folder persistence.
    store: Arc<dyn FolderStore>,
}

impl std::fmt::Debug for FolderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderService").finish_non_exhaustive()
    }
}

/// Turns a raw persistence failure into the operation's `Internal` error,
/// logging the cause. Domain errors pass through untouched.
fn write_failure(
    operation: &'static str,
    folder_id: Option<Uuid>,
) -> impl FnOnce(AppError) -> AppError {
    move |e| {
        if e.kind != ErrorKind::Database {
            return e;
        }
        error!(error = %e, folder_id = ?folder_id, "{operation}");
        AppError::with_source(ErrorKind::Internal, operation, e)
    }
}

fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    Ok(())
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn FolderStore>) -> Self {
        Self { store }
    }

    /// Lists every folder owned by the caller.
    pub async fn list_folders(&self, ctx: &RequestContext) -> Result<Vec<Folder>, AppError> {
        self.store.list_by_user(ctx.user_id).await
    }

    /// Gets a folder by ID, if the caller owns it.
    pub async fn get_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<Folder, AppError> {
        self.store
            .find_by_id_and_user(folder_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Creates a root-level folder.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Folder, AppError> {
        require_name(name)?;
        let fail = || write_failure(MSG_CREATE_FAILED, None);

        if self
            .store
            .find_by_parent_and_name(None, ctx.user_id, name)
            .await
            .map_err(fail())?
            .is_some()
        {
            return Err(AppError::conflict(MSG_EXISTS));
        }

        let folder = self
            .store
            .insert(&CreateFolder::root(ctx.user_id, name))
            .await
            .map_err(fail())?;

        info!(
            user_id = %ctx.user_id,
            ip = %ctx.ip_address,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder, keeping sibling names unique.
    ///
    /// Renaming a folder to its current name succeeds.
    pub async fn rename_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_name: &str,
    ) -> Result<Folder, AppError> {
        let fail = || write_failure(MSG_UPDATE_FAILED, Some(folder_id));
        let folder = self.get_folder(ctx, folder_id).await.map_err(fail())?;
        require_name(new_name)?;

        let clash = self
            .store
            .find_by_parent_and_name(folder.parent_id, ctx.user_id, new_name)
            .await
            .map_err(fail())?;
        if clash.is_some_and(|other| other.id != folder_id) {
            return Err(AppError::conflict(MSG_EXISTS));
        }

        let folder = self
            .store
            .update_name(folder_id, ctx.user_id, new_name)
            .await
            .map_err(fail())?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(
            user_id = %ctx.user_id,
            ip = %ctx.ip_address,
            folder_id = %folder_id,
            new_name = %new_name,
            "Folder renamed"
        );

        Ok(folder)
    }

    /// Moves a folder under `new_parent_id`, or to the root when `None`.
    ///
    /// The destination must belong to the caller and must not be the folder
    /// itself or one of its descendants.
    pub async fn move_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> Result<Folder, AppError> {
        let fail = || write_failure(MSG_UPDATE_FAILED, Some(folder_id));
        let folder = self.get_folder(ctx, folder_id).await.map_err(fail())?;

        if let Some(parent_id) = new_parent_id {
            let ancestors = self
                .store
                .ancestor_ids(parent_id, ctx.user_id)
                .await
                .map_err(fail())?;
            if ancestors.is_empty() {
                return Err(AppError::not_found("Parent folder not found"));
            }
            if ancestors.contains(&folder_id) {
                return Err(AppError::conflict(
                    "Cannot move a folder into itself or one of its descendants",
                ));
            }
        }

        let clash = self
            .store
            .find_by_parent_and_name(new_parent_id, ctx.user_id, &folder.name)
            .await
            .map_err(fail())?;
        if clash.is_some_and(|other| other.id != folder_id) {
            return Err(AppError::conflict(MSG_EXISTS));
        }

        let folder = self
            .store
            .update_parent(folder_id, ctx.user_id, new_parent_id)
            .await
            .map_err(fail())?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(
            user_id = %ctx.user_id,
            ip = %ctx.ip_address,
            folder_id = %folder_id,
            new_parent = ?new_parent_id,
            "Folder moved"
        );

        Ok(folder)
    }

    /// Replaces the folder's items payload wholesale.
    pub async fn update_items(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        items: serde_json::Value,
    ) -> Result<Folder, AppError> {
        let fail = || write_failure(MSG_UPDATE_FAILED, Some(folder_id));
        self.get_folder(ctx, folder_id).await.map_err(fail())?;

        let folder = self
            .store
            .update_items(folder_id, ctx.user_id, &items)
            .await
            .map_err(fail())?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(
            user_id = %ctx.user_id,
            ip = %ctx.ip_address,
            folder_id = %folder_id,
            "Folder items replaced"
        );

        Ok(folder)
    }

    /// Deletes a folder. Child folders and referenced content are left alone.
    pub async fn delete_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<bool, AppError> {
        let fail = || write_failure(MSG_DELETE_FAILED, Some(folder_id));
        let folder = self.get_folder(ctx, folder_id).await.map_err(fail())?;

        let deleted = self
            .store
            .delete(folder_id, ctx.user_id)
            .await
            .map_err(fail())?;
        if !deleted {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        info!(
            user_id = %ctx.user_id,
            ip = %ctx.ip_address,
            folder_id = %folder_id,
            name = %folder.name,
            "Folder deleted"
        );

        Ok(true)
    }
}

//! Folder CRUD handlers.

use axum::Json;
use axum::extract::State;

use folderhub_core::error::AppError;
use folderhub_entity::folder::Folder;

use crate::dto::request::{FolderItemsRequest, FolderNameRequest, FolderParentRequest};
use crate::extractors::{AuthUser, FolderId, ValidJson};
use crate::state::AppState;

/// GET /api/v1/folders/
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Folder>>, AppError> {
    let folders = state.folder_service.list_folders(&auth).await?;
    Ok(Json(folders))
}

/// POST /api/v1/folders/
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<FolderNameRequest>,
) -> Result<Json<Folder>, AppError> {
    let folder = state.folder_service.create_folder(&auth, &req.name).await?;
    Ok(Json(folder))
}

/// GET /api/v1/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    FolderId(id): FolderId,
) -> Result<Json<Folder>, AppError> {
    let folder = state.folder_service.get_folder(&auth, id).await?;
    Ok(Json(folder))
}

/// POST /api/v1/folders/{id}/update
pub async fn rename_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    FolderId(id): FolderId,
    ValidJson(req): ValidJson<FolderNameRequest>,
) -> Result<Json<Folder>, AppError> {
    let folder = state
        .folder_service
        .rename_folder(&auth, id, &req.name)
        .await?;
    Ok(Json(folder))
}

/// POST /api/v1/folders/{id}/update/parent
pub async fn move_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    FolderId(id): FolderId,
    ValidJson(req): ValidJson<FolderParentRequest>,
) -> Result<Json<Folder>, AppError> {
    let folder = state
        .folder_service
        .move_folder(&auth, id, req.parent_id)
        .await?;
    Ok(Json(folder))
}

/// POST /api/v1/folders/{id}/update/items
pub async fn update_items(
    State(state): State<AppState>,
    auth: AuthUser,
    FolderId(id): FolderId,
    ValidJson(req): ValidJson<FolderItemsRequest>,
) -> Result<Json<Folder>, AppError> {
    let folder = state
        .folder_service
        .update_items(&auth, id, req.items)
        .await?;
    Ok(Json(folder))
}

/// DELETE /api/v1/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    FolderId(id): FolderId,
) -> Result<Json<bool>, AppError> {
    let deleted = state.folder_service.delete_folder(&auth, id).await?;
    Ok(Json(deleted))
}

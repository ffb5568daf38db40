//! Process-local folder store.
//!
//! Backs the service when no database is configured and in tests. The
//! sibling-name check and the write happen under one write lock, which
//! gives the same guarantee as the unique index in PostgreSQL.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// In-memory [`FolderStore`].
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    folders: RwLock<HashMap<Uuid, Folder>>,
}

impl MemoryFolderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of folders across all users.
    pub async fn len(&self) -> usize {
        self.folders.read().await.len()
    }

    /// Whether the store holds no folders.
    pub async fn is_empty(&self) -> bool {
        self.folders.read().await.is_empty()
    }
}

/// Whether some folder other than `except` already uses `name` under `parent_id`.
fn sibling_taken(
    folders: &HashMap<Uuid, Folder>,
    user_id: Uuid,
    parent_id: Option<Uuid>,
    name: &str,
    except: Option<Uuid>,
) -> bool {
    folders.values().any(|f| {
        f.is_owned_by(user_id)
            && f.parent_id == parent_id
            && f.name == name
            && Some(f.id) != except
    })
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>> {
        let folders = self.folders.read().await;
        let mut owned: Vec<Folder> = folders
            .values()
            .filter(|f| f.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn find_by_id_and_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Folder>> {
        let folders = self.folders.read().await;
        Ok(folders.get(&id).filter(|f| f.is_owned_by(user_id)).cloned())
    }

    async fn find_by_parent_and_name(
        &self,
        parent_id: Option<Uuid>,
        user_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Folder>> {
        let folders = self.folders.read().await;
        Ok(folders
            .values()
            .find(|f| f.is_owned_by(user_id) && f.parent_id == parent_id && f.name == name)
            .cloned())
    }

    async fn ancestor_ids(&self, folder_id: Uuid, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        let folders = self.folders.read().await;
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(folder_id);

        while let Some(id) = cursor {
            let Some(folder) = folders.get(&id).filter(|f| f.is_owned_by(user_id)) else {
                break;
            };
            if !seen.insert(folder.id) {
                break;
            }
            chain.push(folder.id);
            cursor = folder.parent_id;
        }

        Ok(chain)
    }

    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut folders = self.folders.write().await;
        if sibling_taken(&folders, data.user_id, data.parent_id, &data.name, None) {
            return Err(AppError::conflict("Folder already exists"));
        }

        let folder = data.clone().into_folder();
        folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn update_name(&self, id: Uuid, user_id: Uuid, name: &str) -> AppResult<Option<Folder>> {
        let mut folders = self.folders.write().await;
        let Some(parent_id) = folders
            .get(&id)
            .filter(|f| f.is_owned_by(user_id))
            .map(|f| f.parent_id)
        else {
            return Ok(None);
        };
        if sibling_taken(&folders, user_id, parent_id, name, Some(id)) {
            return Err(AppError::conflict("Folder already exists"));
        }

        Ok(folders.get_mut(&id).map(|folder| {
            folder.name = name.to_string();
            folder.updated_at = Utc::now();
            folder.clone()
        }))
    }

    async fn update_parent(
        &self,
        id: Uuid,
        user_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Option<Folder>> {
        let mut folders = self.folders.write().await;
        let Some(name) = folders
            .get(&id)
            .filter(|f| f.is_owned_by(user_id))
            .map(|f| f.name.clone())
        else {
            return Ok(None);
        };
        if sibling_taken(&folders, user_id, parent_id, &name, Some(id)) {
            return Err(AppError::conflict("Folder already exists"));
        }

        Ok(folders.get_mut(&id).map(|folder| {
            folder.parent_id = parent_id;
            folder.updated_at = Utc::now();
            folder.clone()
        }))
    }

    async fn update_items(
        &self,
        id: Uuid,
        user_id: Uuid,
        items: &serde_json::Value,
    ) -> AppResult<Option<Folder>> {
        let mut folders = self.folders.write().await;
        Ok(folders
            .get_mut(&id)
            .filter(|f| f.is_owned_by(user_id))
            .map(|folder| {
                folder.items = items.clone();
                folder.updated_at = Utc::now();
                folder.clone()
            }))
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut folders = self.folders.write().await;
        let owned = folders.get(&id).is_some_and(|f| f.is_owned_by(user_id));
        if owned {
            folders.remove(&id);
        }
        Ok(owned)
    }
}

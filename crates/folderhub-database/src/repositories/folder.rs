//! PostgreSQL folder repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Unique index over `(user_id, parent_id, name)`.
const SIBLING_NAME_INDEX: &str = "folders_user_parent_name_key";

/// Repository for folder CRUD and ancestry queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a write error, turning a sibling-name collision into `Conflict`.
fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.is_unique_violation()
                && db_err.constraint() == Some(SIBLING_NAME_INDEX) =>
        {
            AppError::conflict("Folder already exists")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_by_id_and_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_by_parent_and_name(
        &self,
        parent_id: Option<Uuid>,
        user_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders \
             WHERE user_id = $1 AND parent_id IS NOT DISTINCT FROM $2 AND name = $3",
        )
        .bind(user_id)
        .bind(parent_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find folder by name", e)
        })
    }

    async fn ancestor_ids(&self, folder_id: Uuid, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        // UNION (not UNION ALL) so a pre-existing cycle still terminates.
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT id, parent_id FROM folders WHERE id = $1 AND user_id = $2 \
                UNION \
                SELECT f.id, f.parent_id FROM folders f \
                INNER JOIN ancestors a ON f.id = a.parent_id \
                WHERE f.user_id = $2 \
             ) SELECT id FROM ancestors",
        )
        .bind(folder_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder> {
        let folder = data.clone().into_folder();
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, parent_id, user_id, name, items, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(folder.id)
        .bind(folder.parent_id)
        .bind(folder.user_id)
        .bind(&folder.name)
        .bind(&folder.items)
        .bind(folder.created_at)
        .bind(folder.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create folder"))
    }

    async fn update_name(&self, id: Uuid, user_id: Uuid, name: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to rename folder"))
    }

    async fn update_parent(
        &self,
        id: Uuid,
        user_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET parent_id = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to move folder"))
    }

    async fn update_items(
        &self,
        id: Uuid,
        user_id: Uuid,
        items: &serde_json::Value,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET items = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(items)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update items", e))
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

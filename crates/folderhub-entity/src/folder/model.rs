//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named node in a user's folder forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// The owning user. Never changes after creation.
    pub user_id: Uuid,
    /// Display name, unique among siblings of the same owner.
    pub name: String,
    /// Opaque payload (e.g. chat references), stored verbatim.
    pub items: serde_json::Value,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check whether the folder belongs to the given user.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The folder owner.
    pub user_id: Uuid,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
}

impl CreateFolder {
    /// A root-level folder for `user_id`.
    pub fn root(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            user_id,
            parent_id: None,
            name: name.into(),
        }
    }

    /// Materialize the record with a fresh id, empty items and current timestamps.
    pub fn into_folder(self) -> Folder {
        let now = Utc::now();
        Folder {
            id: Uuid::new_v4(),
            parent_id: self.parent_id,
            user_id: self.user_id,
            name: self.name,
            items: empty_items(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The items payload a freshly created folder carries.
pub fn empty_items() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

//! Claims carried by a FolderHub bearer token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folderhub_entity::user::UserRole;

/// Token payload. `sub` is the owner id every folder query is scoped by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: UserRole,
    /// Seconds since epoch.
    pub iat: i64,
    /// Seconds since epoch.
    pub exp: i64,
}

impl Claims {
    /// Claims for `user_id` issued now and valid for `ttl`.
    pub fn issue(user_id: Uuid, role: UserRole, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}

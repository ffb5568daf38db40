//! JWT token creation.

use chrono::Duration;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use folderhub_core::config::AuthConfig;
use folderhub_core::error::{AppError, ErrorKind};
use folderhub_entity::user::UserRole;

use super::claims::Claims;

/// Signs access tokens with the shared HMAC secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issues a token for `user_id` valid for `ttl`.
    pub fn encode(&self, user_id: Uuid, role: UserRole, ttl: Duration) -> Result<String, AppError> {
        self.encode_claims(&Claims::issue(user_id, role, ttl))
    }

    /// Signs arbitrary claims.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to sign token: {e}"), e)
        })
    }
}

//! `AuthUser` extractor. Verifies the bearer token and yields the caller context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use folderhub_core::error::AppError;
use folderhub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted verified-user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Not authenticated"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode(token)?;

        // Signed-up but unapproved accounts may not touch user content.
        if !claims.role.is_verified() {
            return Err(AppError::authorization(
                "You do not have permission to access this resource",
            ));
        }

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .unwrap_or("unknown")
            .to_string();

        Ok(AuthUser(RequestContext::new(claims.user_id(), ip_address)))
    }
}

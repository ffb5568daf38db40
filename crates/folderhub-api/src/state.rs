//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use folderhub_auth::jwt::JwtDecoder;
use folderhub_core::config::AppConfig;
use folderhub_service::folder::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
}

impl AppState {
    /// Assemble the state from its parts.
    pub fn new(
        config: Arc<AppConfig>,
        jwt_decoder: Arc<JwtDecoder>,
        folder_service: Arc<FolderService>,
    ) -> Self {
        Self {
            config,
            jwt_decoder,
            folder_service,
        }
    }
}

//! Route definitions for the FolderHub HTTP API.
//!
//! Folder routes are mounted under `/api/v1`; the health probe lives at
//! `/api/health`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(folder_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes())
        .with_state(state)
}

/// Folder CRUD. The collection answers with and without a trailing slash.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/folders/",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/folders/{id}",
            get(handlers::folder::get_folder).delete(handlers::folder::delete_folder),
        )
        .route(
            "/folders/{id}/update",
            post(handlers::folder::rename_folder),
        )
        .route(
            "/folders/{id}/update/parent",
            post(handlers::folder::move_folder),
        )
        .route(
            "/folders/{id}/update/items",
            post(handlers::folder::update_items),
        )
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/api/health", get(handlers::health::health))
}

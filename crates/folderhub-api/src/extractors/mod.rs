//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthUser;
pub use json::ValidJson;
pub use path::FolderId;

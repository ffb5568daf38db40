//! # folderhub-service
//!
//! Business logic for FolderHub. Services receive their persistence
//! handles at construction time as `Arc` references and take the caller's
//! [`RequestContext`] explicitly on every operation.

pub mod context;
pub mod folder;

pub use context::RequestContext;
pub use folder::FolderService;

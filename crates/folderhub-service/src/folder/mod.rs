//! Folder directory service.

pub mod service;

pub use service::{FolderService, NOT_FOUND_MESSAGE};

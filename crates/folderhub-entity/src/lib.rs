//! # folderhub-entity
//!
//! Domain entity models for FolderHub.

pub mod folder;
pub mod user;

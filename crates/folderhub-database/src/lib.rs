//! # folderhub-database
//!
//! PostgreSQL connection management, the [`FolderStore`] persistence
//! trait, and its PostgreSQL and in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::FolderStore;

//! Folder store implementations.

pub mod folder;
pub mod memory;

pub use folder::FolderRepository;
pub use memory::MemoryFolderStore;

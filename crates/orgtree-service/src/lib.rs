//! # orgtree-service
//!
//! The hierarchy store and the services built on it: the synchronous
//! [`FolderStore`](folder::FolderStore), its lock-guarded async facade
//! [`FolderService`](folder::FolderService), and sample data generation.

pub mod error;
pub mod folder;
pub mod seed;

pub use error::FolderError;
pub use folder::{FolderService, FolderStore};

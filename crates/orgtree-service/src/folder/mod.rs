//! Folder hierarchy store and service.

pub mod service;
pub mod store;

pub use service::FolderService;
pub use store::{FolderStore, MovePlan};

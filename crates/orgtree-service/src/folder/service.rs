//! Folder queries and moves behind a single store lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use orgtree_core::error::AppError;
use orgtree_core::types::OrgId;
use orgtree_entity::folder::{Folder, FolderTree};

use super::store::FolderStore;

/// Shares one [`FolderStore`] between concurrent callers.
///
/// Reads hold the read lock; a move holds the write lock across both
/// validation and rewrite, so readers never observe a half-moved subtree.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// The guarded store.
    store: Arc<RwLock<FolderStore>>,
}

impl FolderService {
    /// Creates a new folder service over `store`.
    pub fn new(store: FolderStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a service holding `folders`.
    pub fn from_folders(folders: Vec<Folder>) -> Self {
        Self::new(FolderStore::new(folders))
    }

    /// Lists every folder.
    pub async fn list_all(&self) -> Vec<Folder> {
        let store = self.store.read().await;
        debug!(count = store.len(), "Listing all folders");
        store.list_all().to_vec()
    }

    /// Lists the folders of an organization.
    pub async fn list_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        let folders = self.store.read().await.list_by_org(org_id);
        debug!(org_id = %org_id, count = folders.len(), "Listing organization folders");
        folders
    }

    /// Checks whether an organization owns any folder.
    pub async fn org_exists(&self, org_id: OrgId) -> bool {
        self.store.read().await.org_exists(org_id)
    }

    /// Lists the descendants of `name` within `org_id`.
    pub async fn descendants(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, AppError> {
        let folders = self.store.read().await.descendants(org_id, name)?;
        debug!(org_id = %org_id, name, count = folders.len(), "Resolved descendants");
        Ok(folders)
    }

    /// Builds the display tree of an organization.
    pub async fn tree_for_org(&self, org_id: OrgId) -> Result<FolderTree, AppError> {
        let store = self.store.read().await;
        if !store.org_exists(org_id) {
            return Err(AppError::not_found(format!(
                "Organization {org_id} has no folders"
            )));
        }
        Ok(FolderTree::from_folders(&store.list_by_org(org_id)))
    }

    /// Moves `name` and its subtree under `destination`.
    ///
    /// Returns a snapshot of the whole collection after the move.
    pub async fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>, AppError> {
        let mut store = self.store.write().await;

        let plan = match store.plan_move(name, destination) {
            Ok(plan) => plan,
            Err(e) => {
                warn!(source = name, destination, error = %e, "Folder move rejected");
                return Err(e.into());
            }
        };

        let rewritten = store.apply_move(&plan);

        info!(
            org_id = %plan.org_id,
            source = name,
            destination,
            old_path = %plan.old_prefix,
            new_path = %plan.new_prefix,
            rewritten,
            "Folder moved"
        );

        Ok(store.list_all().to_vec())
    }

    /// Takes a snapshot of the underlying store.
    pub async fn snapshot(&self) -> FolderStore {
        self.store.read().await.clone()
    }
}

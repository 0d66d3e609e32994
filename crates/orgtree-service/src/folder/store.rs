//! In-memory hierarchy store over a flat list of folders.
//!
//! Folders are kept in insertion order in a single `Vec`. There are no parent
//! links: every ancestry question is answered by comparing materialized paths
//! with the helpers in [`orgtree_entity::folder::path`].
//!
//! Name resolution is deliberately asymmetric. [`FolderStore::descendants`]
//! resolves its root among the queried organization's folders, while
//! [`FolderStore::move_folder`] resolves both names by first match across
//! every organization.

use orgtree_core::types::OrgId;
use orgtree_entity::folder::{Folder, path};

use crate::error::FolderError;

/// Owns the folder collection for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    folders: Vec<Folder>,
}

/// A validated move, ready to be applied.
///
/// Produced by [`FolderStore::plan_move`]; holds the prefixes computed from
/// the store state at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// Organization owning both folders.
    pub org_id: OrgId,
    /// Path of the source folder before the move.
    pub old_prefix: String,
    /// Path the source folder will have after the move.
    pub new_prefix: String,
}

impl FolderStore {
    /// Creates a store holding `folders` in the given order.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Every folder, unfiltered, in store order.
    pub fn list_all(&self) -> &[Folder] {
        &self.folders
    }

    /// Folders owned by `org_id`, in store order. Empty for unknown orgs.
    pub fn list_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.org_folders(org_id).cloned().collect()
    }

    /// Whether `org_id` owns at least one folder.
    pub fn org_exists(&self, org_id: OrgId) -> bool {
        self.folders.iter().any(|f| f.org_id == org_id)
    }

    /// First folder named `name` in any organization.
    pub fn find_by_name(&self, name: &str) -> Option<&Folder> {
        self.position_by_name(name).map(|i| &self.folders[i])
    }

    /// All folders below the folder named `name` in `org_id`.
    ///
    /// The root itself is excluded; an empty result means the folder has no
    /// descendants.
    pub fn descendants(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, FolderError> {
        if !self.org_exists(org_id) {
            return Err(FolderError::UnknownTenant { org_id });
        }

        if self.position_by_name(name).is_none() {
            return Err(FolderError::FolderNotFound {
                name: name.to_string(),
            });
        }

        let root = self
            .org_folders(org_id)
            .find(|f| path::last_segment(&f.path) == name)
            .ok_or_else(|| FolderError::FolderNotInTenant {
                org_id,
                name: name.to_string(),
            })?;

        Ok(self
            .org_folders(org_id)
            .filter(|f| path::is_descendant(&f.path, &root.path))
            .cloned()
            .collect())
    }

    /// Validates moving `name` under `destination` without touching the store.
    pub fn plan_move(&self, name: &str, destination: &str) -> Result<MovePlan, FolderError> {
        let source_idx = self
            .position_by_name(name)
            .ok_or_else(|| FolderError::SourceNotFound {
                name: name.to_string(),
            })?;
        let dest_idx = self
            .position_by_name(destination)
            .ok_or_else(|| FolderError::DestinationNotFound {
                name: destination.to_string(),
            })?;

        let source = &self.folders[source_idx];
        let dest = &self.folders[dest_idx];

        if source.org_id != dest.org_id {
            return Err(FolderError::CrossTenantMove {
                source_org: source.org_id,
                destination_org: dest.org_id,
            });
        }

        if path::is_descendant(&dest.path, &source.path) {
            return Err(FolderError::DestinationIsDescendantOfSource {
                source_path: source.path.clone(),
                destination_path: dest.path.clone(),
            });
        }

        if source_idx == dest_idx {
            return Err(FolderError::IdenticalSourceAndDestination {
                name: source.name.clone(),
            });
        }

        Ok(MovePlan {
            org_id: source.org_id,
            old_prefix: source.path.clone(),
            new_prefix: path::join(&dest.path, &source.name),
        })
    }

    /// Rewrites every path within `plan.old_prefix`. Returns the number of
    /// folders rewritten.
    ///
    /// The scan covers all organizations; only the source's own subtree can
    /// hold `old_prefix` as a segment prefix once the plan has validated.
    pub fn apply_move(&mut self, plan: &MovePlan) -> usize {
        let mut rewritten = 0;
        for folder in &mut self.folders {
            if let Some(new_path) =
                path::rebase(&folder.path, &plan.old_prefix, &plan.new_prefix)
            {
                folder.path = new_path;
                rewritten += 1;
            }
        }
        rewritten
    }

    /// Moves the folder named `name`, with its subtree, under `destination`.
    ///
    /// Returns the full collection after the move. On error nothing changes.
    pub fn move_folder(&mut self, name: &str, destination: &str) -> Result<&[Folder], FolderError> {
        let plan = self.plan_move(name, destination)?;
        self.apply_move(&plan);
        Ok(&self.folders)
    }

    /// Number of folders held.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Consumes the store, returning its folders.
    pub fn into_folders(self) -> Vec<Folder> {
        self.folders
    }

    fn org_folders(&self, org_id: OrgId) -> impl Iterator<Item = &Folder> {
        self.folders.iter().filter(move |f| f.org_id == org_id)
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.folders.iter().position(|f| f.name == name)
    }
}

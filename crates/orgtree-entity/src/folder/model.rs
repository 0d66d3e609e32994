//! Folder entity model.

use orgtree_core::types::OrgId;
use serde::{Deserialize, Serialize};

use super::path;

/// A folder in an organization's hierarchy.
///
/// The hierarchy is carried entirely by `path`: there is no parent id, and
/// ancestry is recovered by comparing path segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name; always equal to the last segment of `path`.
    pub name: String,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    #[serde(rename = "paths", alias = "path")]
    pub path: String,
    /// The owning organization.
    pub org_id: OrgId,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }

    /// Create a root folder whose path is just its name.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            org_id,
        }
    }

    /// Create a child of `parent` in the parent's organization.
    pub fn child_of(parent: &Folder, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: path::join(&parent.path, &name),
            name,
            org_id: parent.org_id,
        }
    }

    /// Check if this is a root folder (single-segment path).
    pub fn is_root(&self) -> bool {
        path::parent_path(&self.path).is_none()
    }

    /// Depth in the tree (0 for roots).
    pub fn depth(&self) -> usize {
        path::depth(&self.path)
    }

    /// The last segment of the path.
    pub fn leaf(&self) -> &str {
        path::last_segment(&self.path)
    }
}

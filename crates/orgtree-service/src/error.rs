//! Hierarchy store error type.
//!
//! Each variant corresponds to exactly one precondition check. The checks run
//! in a fixed order and always before any path is rewritten, so a returned
//! error guarantees the store is unchanged.

use orgtree_core::error::AppError;
use orgtree_core::types::OrgId;
use thiserror::Error;

/// Errors raised by [`FolderStore`](crate::folder::FolderStore) queries and moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolderError {
    // --- Descendant query errors ---
    /// The organization owns no folders.
    #[error("error: orgID does not contain any folders")]
    UnknownTenant {
        /// The organization that was queried.
        org_id: OrgId,
    },

    /// No folder with this name exists in any organization.
    #[error("error: Folder does not exist")]
    FolderNotFound {
        /// The name that was searched for.
        name: String,
    },

    /// The name exists, but not as a folder of the queried organization.
    #[error("error: Folder does not exist in the specified organization")]
    FolderNotInTenant {
        /// The organization that was queried.
        org_id: OrgId,
        /// The name that was searched for.
        name: String,
    },

    // --- Move errors ---
    /// The folder to move does not exist.
    #[error("error: source folder does not exist")]
    SourceNotFound {
        /// The source name.
        name: String,
    },

    /// The target parent does not exist.
    #[error("error: destination folder does not exist")]
    DestinationNotFound {
        /// The destination name.
        name: String,
    },

    /// Source and destination are owned by different organizations.
    #[error("error: source and destination belongs in different organisations")]
    CrossTenantMove {
        /// Organization of the source folder.
        source_org: OrgId,
        /// Organization of the destination folder.
        destination_org: OrgId,
    },

    /// The destination lies inside the subtree being moved.
    #[error("error: destination is a child of source")]
    DestinationIsDescendantOfSource {
        /// Path of the source folder.
        source_path: String,
        /// Path of the destination folder.
        destination_path: String,
    },

    /// Source and destination resolve to the same folder.
    #[error("error: source and destination are identical folders")]
    IdenticalSourceAndDestination {
        /// The shared name.
        name: String,
    },
}

impl From<FolderError> for AppError {
    fn from(err: FolderError) -> Self {
        match &err {
            FolderError::UnknownTenant { .. }
            | FolderError::FolderNotFound { .. }
            | FolderError::FolderNotInTenant { .. }
            | FolderError::SourceNotFound { .. }
            | FolderError::DestinationNotFound { .. } => AppError::not_found(err.to_string()),
            FolderError::CrossTenantMove { .. }
            | FolderError::DestinationIsDescendantOfSource { .. }
            | FolderError::IdenticalSourceAndDestination { .. } => {
                AppError::validation(err.to_string())
            }
        }
    }
}

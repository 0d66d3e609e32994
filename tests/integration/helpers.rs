//! Shared fixtures for integration tests.

use uuid::Uuid;

use orgtree_core::types::OrgId;
use orgtree_entity::folder::Folder;
use orgtree_service::FolderService;

/// Organization with a stable, readable id (`0000...000n`).
pub fn org(n: u128) -> OrgId {
    OrgId::from_uuid(Uuid::from_u128(n))
}

/// Two organizations: org 1 holds the `alpha` tree, org 2 holds `golf`.
pub fn scenario_folders() -> Vec<Folder> {
    vec![
        Folder::new("alpha", "alpha", org(1)),
        Folder::new("bravo", "alpha.bravo", org(1)),
        Folder::new("charlie", "alpha.bravo.charlie", org(1)),
        Folder::new("delta", "alpha.delta", org(1)),
        Folder::new("golf", "golf", org(2)),
    ]
}

/// A service over [`scenario_folders`].
pub fn scenario_service() -> FolderService {
    FolderService::from_folders(scenario_folders())
}

/// Paths of `folders`, in order.
pub fn paths(folders: &[Folder]) -> Vec<&str> {
    folders.iter().map(|f| f.path.as_str()).collect()
}

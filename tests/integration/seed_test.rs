//! Generated sample data flowing through the service.

use orgtree_core::config::seed::SeedConfig;
use orgtree_entity::folder::path;
use orgtree_service::{FolderService, seed};

#[tokio::test]
async fn test_generated_data_supports_every_operation() {
    let config = SeedConfig::default();
    let service = FolderService::from_folders(seed::generate(&config));
    let org_id = config.default_org_id;

    assert!(service.org_exists(org_id).await);

    let org_folders = service.list_by_org(org_id).await;
    let root = org_folders
        .iter()
        .find(|f| f.is_root())
        .cloned()
        .expect("default org has roots");

    let children = service
        .descendants(org_id, &root.name)
        .await
        .expect("root resolves");
    assert!(children.iter().all(|f| path::is_descendant(&f.path, &root.path)));

    let target = org_folders
        .iter()
        .find(|f| f.is_root() && f.name != root.name)
        .cloned()
        .expect("default org has several roots");

    let moved = service
        .move_folder(&root.name, &target.name)
        .await
        .expect("root moves under a sibling root");
    let new_root_path = path::join(&target.path, &root.name);
    assert!(moved.iter().any(|f| f.path == new_root_path));
    for child in &children {
        let expected = path::rebase(&child.path, &root.path, &new_root_path).expect("within root");
        assert!(moved.iter().any(|f| f.name == child.name && f.path == expected));
    }
}

#[tokio::test]
async fn test_data_file_feeds_service() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("folders.json");
    let folders = seed::generate(&SeedConfig::default());

    seed::write_to_file(&file, &folders).await.expect("write");
    let service = FolderService::from_folders(seed::load_from_file(&file).await.expect("load"));

    assert_eq!(service.list_all().await, folders);
}

//! End-to-end folder queries and moves through the service layer.

use orgtree_core::error::ErrorKind;
use orgtree_entity::folder::path;
use orgtree_service::{FolderError, FolderStore};

use crate::helpers::{org, paths, scenario_folders, scenario_service};

#[tokio::test]
async fn test_move_bravo_under_delta() {
    let service = scenario_service();

    let moved = service.move_folder("bravo", "delta").await.expect("move succeeds");

    assert_eq!(
        paths(&moved),
        vec![
            "alpha",
            "alpha.delta.bravo",
            "alpha.delta.bravo.charlie",
            "alpha.delta",
            "golf"
        ]
    );
}

#[tokio::test]
async fn test_delta_has_no_descendants_before_move() {
    let service = scenario_service();
    let found = service.descendants(org(1), "delta").await.expect("delta exists");
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_delta_gains_descendants_after_move() {
    let service = scenario_service();
    service.move_folder("bravo", "delta").await.expect("move succeeds");

    let found = service.descendants(org(1), "delta").await.expect("delta exists");
    assert_eq!(
        paths(&found),
        vec!["alpha.delta.bravo", "alpha.delta.bravo.charlie"]
    );
}

#[tokio::test]
async fn test_alpha_not_in_second_org() {
    let service = scenario_service();
    let err = service
        .descendants(org(2), "alpha")
        .await
        .expect_err("alpha belongs to org 1");
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(
        err.message,
        "error: Folder does not exist in the specified organization"
    );
}

#[tokio::test]
async fn test_cycle_is_rejected_without_mutation() {
    let service = scenario_service();
    let before = service.list_all().await;

    let err = service
        .move_folder("alpha", "charlie")
        .await
        .expect_err("charlie is under alpha");
    assert_eq!(err.message, "error: destination is a child of source");
    assert_eq!(service.list_all().await, before);
}

#[test]
fn test_move_only_rewrites_the_moved_subtree() {
    let original = scenario_folders();
    let mut store = FolderStore::new(original.clone());
    let plan = store.plan_move("bravo", "delta").expect("valid move");
    store.apply_move(&plan);

    for (before, after) in original.iter().zip(store.list_all()) {
        assert_eq!(before.name, after.name);
        assert_eq!(before.org_id, after.org_id);
        if path::is_within(&before.path, &plan.old_prefix) {
            let rest = &before.path[plan.old_prefix.len()..];
            assert_eq!(after.path, format!("{}{}", plan.new_prefix, rest));
        } else {
            assert_eq!(after.path, before.path);
        }
    }
}

#[test]
fn test_descendants_match_path_extension_for_every_folder() {
    let store = FolderStore::new(scenario_folders());
    for root in store.list_all() {
        let found = store
            .descendants(root.org_id, &root.name)
            .expect("every folder resolves in its own org");
        let expected: Vec<_> = store
            .list_all()
            .iter()
            .filter(|f| f.org_id == root.org_id)
            .filter(|f| f.path.starts_with(&format!("{}.", root.path)))
            .cloned()
            .collect();
        assert_eq!(found, expected, "descendants of {}", root.path);
        assert!(!found.contains(root));
    }
}

#[test]
fn test_moving_to_itself_is_rejected() {
    for folder in scenario_folders() {
        let mut store = FolderStore::new(scenario_folders());
        let err = store
            .move_folder(&folder.name, &folder.name)
            .expect_err("self move");
        assert!(matches!(
            err,
            FolderError::IdenticalSourceAndDestination { .. }
        ));
    }
}

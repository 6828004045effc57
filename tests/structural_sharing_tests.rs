//! Identity-sharing tests for BinaryTreeMap.
//!
//! These tests assert that subtrees off the modified path are the very same
//! allocation before and after an update, not merely equal in content.

use persistent_bst::persistent::BinaryTreeMap;
use rstest::{fixture, rstest};

/// Follows a path of `L`/`R` steps from the root.
fn subtree<'a>(tree: &'a BinaryTreeMap<i32, i32>, path: &str) -> &'a BinaryTreeMap<i32, i32> {
    let mut current = tree;
    for step in path.chars() {
        let node = current
            .root()
            .unwrap_or_else(|| panic!("path {path} leaves the tree"));
        current = if step == 'L' { node.left() } else { node.right() };
    }
    current
}

/// ```text
///              8
///          /       \
///        4          12
///      /   \      /    \
///     2     6   10      14
///    / \   / \  / \    /  \
///   1  3  5  7 9  11  13  15
/// ```
#[fixture]
fn complete_tree() -> BinaryTreeMap<i32, i32> {
    [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15]
        .into_iter()
        .map(|key| (key, key * 100))
        .collect()
}

// =============================================================================
// Insert Sharing
// =============================================================================

#[rstest]
fn test_cons_new_key_shares_off_path_subtrees(complete_tree: BinaryTreeMap<i32, i32>) {
    // Path to the new key 16: 8 -> 12 -> 14 -> 15
    let updated = complete_tree.cons(16, 1600);

    assert!(subtree(&updated, "L").ptr_eq(subtree(&complete_tree, "L")));
    assert!(subtree(&updated, "RL").ptr_eq(subtree(&complete_tree, "RL")));
    assert!(subtree(&updated, "RRL").ptr_eq(subtree(&complete_tree, "RRL")));

    // Nodes on the path are fresh allocations
    assert!(!updated.ptr_eq(&complete_tree));
    assert!(!subtree(&updated, "R").ptr_eq(subtree(&complete_tree, "R")));
    assert!(!subtree(&updated, "RRR").ptr_eq(subtree(&complete_tree, "RRR")));
    assert_eq!(subtree(&updated, "RRRR").root().map(|node| *node.key()), Some(16));
}

#[rstest]
fn test_cons_existing_key_shares_children(complete_tree: BinaryTreeMap<i32, i32>) {
    let updated = complete_tree.cons(4, -4);

    assert!(subtree(&updated, "LL").ptr_eq(subtree(&complete_tree, "LL")));
    assert!(subtree(&updated, "LR").ptr_eq(subtree(&complete_tree, "LR")));
    assert!(subtree(&updated, "R").ptr_eq(subtree(&complete_tree, "R")));
    assert_eq!(updated.get(&4), Some(&-4));
    assert_eq!(complete_tree.get(&4), Some(&400));
}

#[rstest]
fn test_old_version_survives_dropping_new_version(complete_tree: BinaryTreeMap<i32, i32>) {
    let snapshot = complete_tree.to_list();
    {
        let updated = complete_tree.cons(0, 0).remove(&8).cons(12, 0);
        assert_eq!(updated.len(), 15);
    }
    assert_eq!(complete_tree.to_list(), snapshot);
}

// =============================================================================
// Remove Sharing
// =============================================================================

#[rstest]
fn test_remove_leaf_shares_off_path_subtrees(complete_tree: BinaryTreeMap<i32, i32>) {
    let removed = complete_tree.remove(&5);

    assert!(subtree(&removed, "R").ptr_eq(subtree(&complete_tree, "R")));
    assert!(subtree(&removed, "LL").ptr_eq(subtree(&complete_tree, "LL")));
    assert!(subtree(&removed, "LRR").ptr_eq(subtree(&complete_tree, "LRR")));
    assert!(subtree(&removed, "LRL").is_empty());
}

#[rstest]
fn test_remove_inner_node_shares_right_subtree(complete_tree: BinaryTreeMap<i32, i32>) {
    // 12 is replaced by its predecessor 11
    let removed = complete_tree.remove(&12);

    assert_eq!(subtree(&removed, "R").root().map(|node| *node.key()), Some(11));
    assert!(subtree(&removed, "L").ptr_eq(subtree(&complete_tree, "L")));
    assert!(subtree(&removed, "RR").ptr_eq(subtree(&complete_tree, "RR")));
    assert!(subtree(&removed, "RLL").ptr_eq(subtree(&complete_tree, "RLL")));
    assert!(subtree(&removed, "RLR").is_empty());
}

#[rstest]
fn test_remove_node_without_left_child_aliases_right_child() {
    let tree: BinaryTreeMap<i32, i32> = [1, 3, 2, 4].into_iter().map(|key| (key, key)).collect();
    let removed = tree.remove(&1);
    assert!(removed.ptr_eq(subtree(&tree, "R")));
}

#[rstest]
fn test_remove_missing_key_shares_root(complete_tree: BinaryTreeMap<i32, i32>) {
    assert!(complete_tree.remove(&100).ptr_eq(&complete_tree));
}

// =============================================================================
// Version Independence
// =============================================================================

#[rstest]
fn test_versions_are_independent(complete_tree: BinaryTreeMap<i32, i32>) {
    let versions: Vec<BinaryTreeMap<i32, i32>> = (1..=15)
        .scan(complete_tree.clone(), |current, key| {
            *current = current.remove(&key);
            Some(current.clone())
        })
        .collect();

    for (index, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), 14 - index);
        assert_eq!(version.validate(), Ok(()));
    }
    assert_eq!(complete_tree.len(), 15);
}

//! Linear-depth tests for BinaryTreeMap.
//!
//! Sorted input and the key-ordered rebuilds of `filter_set`, `map_set` and
//! `intersection` produce chains as deep as the tree is long. These tests
//! drive every structural operation, and dropping, over such chains.

use persistent_bst::persistent::BinaryTreeMap;
use rstest::{fixture, rstest};

const SIZE: u64 = 100_000;

/// A shallow tree: keys are inserted in a scrambled order.
#[fixture]
fn shallow_tree() -> BinaryTreeMap<u64, u64> {
    (0..SIZE)
        .map(|index| ((index * 7919) % SIZE, index))
        .collect()
}

/// A right-leaning chain built from ascending keys.
#[fixture]
fn ascending_chain() -> BinaryTreeMap<u64, u64> {
    (0..SIZE).map(|key| (key, key)).collect()
}

// =============================================================================
// Combinators Producing Chains
// =============================================================================

#[rstest]
fn test_filter_set_over_shallow_tree(shallow_tree: BinaryTreeMap<u64, u64>) {
    assert!(shallow_tree.depth() < 1_000);

    let filtered = shallow_tree.filter_set(|_, _| true);
    assert_eq!(filtered.len(), 100_000);
    assert_eq!(filtered.depth(), 100_000);
    assert_eq!(filtered, shallow_tree);
    drop(filtered);

    let evens = shallow_tree.filter_set(|key, _| key % 2 == 0);
    assert_eq!(evens.len(), 50_000);
    assert!(evens.member(&99_998));
    assert!(!evens.member(&99_999));
}

#[rstest]
fn test_map_set_and_intersection_over_shallow_tree(shallow_tree: BinaryTreeMap<u64, u64>) {
    let shifted = shallow_tree.map_set(|key, value| (key + 1, *value));
    assert_eq!(shifted.depth(), 100_000);
    assert_eq!(shifted.min().map(|(key, _)| *key), Some(1));

    // Each chain key is looked up in the shallow tree
    let common = shifted.intersection(&shallow_tree);
    assert_eq!(common.len(), 99_999);
    assert!(!common.member(&SIZE));
    assert_eq!(common.validate(), Ok(()));
}

// =============================================================================
// Structural Operations on Chains
// =============================================================================

#[rstest]
fn test_sorted_from_list_then_drop(ascending_chain: BinaryTreeMap<u64, u64>) {
    assert_eq!(ascending_chain.depth(), 100_000);
    assert_eq!(ascending_chain.len(), 100_000);
    assert_eq!(ascending_chain.get(&99_999), Some(&99_999));
    drop(ascending_chain);
}

#[rstest]
fn test_cons_and_remove_at_the_bottom_of_a_chain(ascending_chain: BinaryTreeMap<u64, u64>) {
    let extended = ascending_chain.cons(SIZE, SIZE);
    assert_eq!(extended.depth(), 100_001);
    assert!(!ascending_chain.member(&SIZE));

    let shortened = extended.remove(&(SIZE - 1));
    assert_eq!(shortened.len(), 100_000);
    assert!(shortened.member(&SIZE));
    assert_eq!(shortened.validate(), Ok(()));

    // The original chain outlives both derived versions
    drop(extended);
    drop(shortened);
    assert_eq!(ascending_chain.max(), Some((&99_999, &99_999)));
}

#[rstest]
fn test_remove_root_of_left_chain_promotes_every_predecessor() {
    let descending: BinaryTreeMap<u64, ()> = (0..SIZE).rev().map(|key| (key, ())).collect();
    assert_eq!(descending.depth(), 100_000);

    let removed = descending.remove(&(SIZE - 1));
    assert_eq!(removed.depth(), 99_999);
    assert_eq!(removed.root().map(|node| *node.key()), Some(SIZE - 2));
    assert_eq!(removed.min(), Some((&0, &())));
    assert_eq!(removed.validate(), Ok(()));
    assert_eq!(descending.len(), 100_000);
}

#[rstest]
fn test_versions_sharing_a_chain_drop_independently(ascending_chain: BinaryTreeMap<u64, u64>) {
    // Removing the root of a right chain aliases the rest of it
    let tail = ascending_chain.remove(&0);
    assert!(ascending_chain.root().is_some_and(|node| node.right().ptr_eq(&tail)));

    drop(ascending_chain);
    assert_eq!(tail.len(), 99_999);
    assert_eq!(tail.min(), Some((&1, &1)));
}

#![cfg(feature = "arc")]
//! Thread-safety tests for BinaryTreeMap with the `arc` feature.
//!
//! Published versions are immutable, so they can be read from several
//! threads without locking and extended independently in each thread.

use persistent_bst::persistent::BinaryTreeMap;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_tree_shared_across_threads() {
    let tree = Arc::new(BinaryTreeMap::from_list([(2, "two"), (1, "one"), (3, "three")]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree_clone = Arc::clone(&tree);
            thread::spawn(move || {
                assert!(tree_clone.member(&1));
                assert_eq!(tree_clone.get(&2), Some(&"two"));
                assert_eq!(tree_clone.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
}

#[rstest]
fn test_tree_moved_between_threads() {
    let base = BinaryTreeMap::from_list([(0, 0)]);

    let results: Vec<BinaryTreeMap<i32, i32>> = (1..=4)
        .map(|index| {
            let version = base.clone();
            thread::spawn(move || version.cons(index, index * 10).remove(&0))
        })
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, tree) in (1..=4).zip(&results) {
        assert_eq!(tree.to_list(), vec![(index, index * 10)]);
    }
    // Original version is unchanged
    assert_eq!(base.to_list(), vec![(0, 0)]);
}

//! Free-function form of the [`BinaryTreeMap`] API.
//!
//! These mirror the methods one-to-one, in the argument order of a
//! functional list library: `cons` takes the pair first and the tree last,
//! `remove` takes the tree first and the key last.
//!
//! # Examples
//!
//! ```rust
//! use persistent_bst::persistent::functions::{cons, empty, length, member, remove, to_list};
//!
//! let tree = cons((1, "a"), &cons((2, "b"), &empty()));
//! assert_eq!(length(&tree), 2);
//!
//! let removed = remove(&tree, &1);
//! assert!(!member(&1, &removed));
//! assert_eq!(to_list(&removed), vec![(2, "b")]);
//! ```

use super::binary_tree::BinaryTreeMap;
use std::borrow::Borrow;

/// Returns the empty tree.
#[inline]
#[must_use]
pub const fn empty<K, V>() -> BinaryTreeMap<K, V> {
    BinaryTreeMap::new()
}

/// Returns `true` if `tree` is the empty tree.
#[inline]
#[must_use]
pub const fn is_empty<K, V>(tree: &BinaryTreeMap<K, V>) -> bool {
    tree.is_empty()
}

/// Inserts `pair` into `tree`, replacing the value of an existing key.
#[must_use]
pub fn cons<K: Clone + Ord, V: Clone>(
    pair: (K, V),
    tree: &BinaryTreeMap<K, V>,
) -> BinaryTreeMap<K, V> {
    let (key, value) = pair;
    tree.cons(key, value)
}

/// Returns `true` if `key` is present in `tree`.
#[must_use]
pub fn member<K, V, Q>(key: &Q, tree: &BinaryTreeMap<K, V>) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.member(key)
}

/// Removes `key` from `tree`. A missing key yields `tree` itself.
#[must_use]
pub fn remove<K, V, Q>(tree: &BinaryTreeMap<K, V>, key: &Q) -> BinaryTreeMap<K, V>
where
    K: Clone + Ord + Borrow<Q>,
    V: Clone,
    Q: Ord + ?Sized,
{
    tree.remove(key)
}

/// Counts the entries of `tree` in O(N).
#[must_use]
pub fn length<K, V>(tree: &BinaryTreeMap<K, V>) -> usize {
    tree.len()
}

/// Folds `cons` over `pairs`; later duplicates overwrite earlier ones.
#[must_use]
pub fn from_list<K, V, I>(pairs: I) -> BinaryTreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    BinaryTreeMap::from_list(pairs)
}

/// Returns the entries of `tree` in ascending key order.
#[must_use]
pub fn to_list<K: Clone + Ord, V: Clone>(tree: &BinaryTreeMap<K, V>) -> Vec<(K, V)> {
    tree.to_list()
}

/// Inserts every entry of `second` into `first`; `second` wins on collisions.
#[must_use]
pub fn concat<K: Clone + Ord, V: Clone>(
    first: &BinaryTreeMap<K, V>,
    second: &BinaryTreeMap<K, V>,
) -> BinaryTreeMap<K, V> {
    first.concat(second)
}

/// Entries of `first` whose key is a member of `second`, with values from `first`.
#[must_use]
pub fn intersection<K: Clone + Ord, V: Clone, W>(
    first: &BinaryTreeMap<K, V>,
    second: &BinaryTreeMap<K, W>,
) -> BinaryTreeMap<K, V> {
    first.intersection(second)
}

/// Maps every entry and re-inserts the results into a fresh tree.
#[must_use]
pub fn map_set<K, V, K2, V2, F>(tree: &BinaryTreeMap<K, V>, transform: F) -> BinaryTreeMap<K2, V2>
where
    K: Clone + Ord,
    V: Clone,
    K2: Clone + Ord,
    V2: Clone,
    F: FnMut(&K, &V) -> (K2, V2),
{
    tree.map_set(transform)
}

/// Keeps the entries satisfying `predicate`.
#[must_use]
pub fn filter_set<K, V, F>(tree: &BinaryTreeMap<K, V>, predicate: F) -> BinaryTreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    tree.filter_set(predicate)
}

/// Left fold in key order; `function` takes the accumulator first.
pub fn reduce_set<K, V, A, F>(tree: &BinaryTreeMap<K, V>, function: F, initial: A) -> A
where
    K: Clone + Ord,
    V: Clone,
    F: FnMut(A, (&K, &V)) -> A,
{
    tree.reduce_set(function, initial)
}

//! Persistent (immutable) binary search tree.
//!
//! This module provides [`BinaryTreeMap`], an immutable ordered map whose
//! updates share every untouched subtree with the previous version:
//!
//! - [`BinaryTreeMap`]: The tree itself, a sum type of `Empty` and `Node`
//! - [`Node`]: The payload of a non-empty tree (key, value and two subtrees)
//! - [`Iter`], [`Keys`], [`Values`], [`IntoIter`]: Lazy in-order iterators
//! - [`InvariantViolation`]: Reported by [`BinaryTreeMap::validate`]
//! - [`functions`]: Free-function form of the whole API
//!
//! # Structural Sharing
//!
//! Inserting or removing a key rebuilds only the nodes on the search path.
//! All sibling subtrees are aliased by the new version.
//!
//! ```rust
//! use persistent_bst::persistent::BinaryTreeMap;
//!
//! let tree = BinaryTreeMap::from_list([(2, "two"), (1, "one"), (3, "three")]);
//! let updated = tree.cons(3, "THREE");
//!
//! // The left subtree was not on the path to key 3
//! let before = tree.root().map(|node| node.left());
//! let after = updated.root().map(|node| node.left());
//! assert!(before.zip(after).is_some_and(|(left, right)| left.ptr_eq(right)));
//!
//! assert_eq!(tree.get(&3), Some(&"three"));   // Original unchanged
//! assert_eq!(updated.get(&3), Some(&"THREE")); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod binary_tree;
mod combinators;
pub mod functions;
mod invariant;
mod iterator;

pub use binary_tree::BinaryTreeMap;
pub use binary_tree::Node;
pub use invariant::InvariantViolation;
pub use iterator::IntoIter;
pub use iterator::Iter;
pub use iterator::Keys;
pub use iterator::Values;

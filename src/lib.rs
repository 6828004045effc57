//! # persistent-bst
//!
//! A persistent (immutable, value-semantic) ordered map backed by an
//! unbalanced binary search tree.
//!
//! ## Overview
//!
//! Every operation that looks like a mutation returns a new version of the
//! map and leaves the previous version intact. Subtrees that are not on the
//! path of a modification are shared between versions instead of copied.
//!
//! - **Structural operations**: `cons`, `member`, `remove`, ordered iteration, length
//! - **Combinators**: `from_list`, `to_list`, `concat`, `intersection`,
//!   `map_set`, `filter_set`, `reduce_set`
//! - **Contract checking**: `validate` for detecting ordering violations
//!
//! The tree is never rebalanced. Inserting keys in sorted order yields a
//! tree whose depth equals its length.
//!
//! ## Feature Flags
//!
//! - `arc`: Share nodes through `Arc` instead of `Rc`, making versions `Send + Sync`
//! - `tracing`: Emit `tracing` events for notable structural outcomes
//!
//! ## Example
//!
//! ```rust
//! use persistent_bst::prelude::*;
//!
//! let tree = BinaryTreeMap::from_list([(1, "a"), (2, "b"), (3, "c")]);
//! let removed = tree.remove(&2);
//!
//! assert_eq!(removed.to_list(), vec![(1, "a"), (3, "c")]);
//! assert!(tree.member(&2)); // Original unchanged
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (warn, $($argument:tt)*) => {
        ::tracing::warn!($($argument)*)
    };
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use persistent_bst::prelude::*;
///
/// let tree: BinaryTreeMap<i32, &str> = BinaryTreeMap::new();
/// assert!(tree.is_empty());
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;

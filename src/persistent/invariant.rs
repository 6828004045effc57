//! Detection of broken ordering contracts.
//!
//! A tree built only through the public API is always a valid binary search
//! tree as long as the key type's `Ord` is a total order that never changes.
//! Key types that violate this (inconsistent `Ord`, interior mutability that
//! alters the ordering after insertion) can leave a tree whose in-order
//! sequence is not strictly ascending. Such trees give wrong lookup results;
//! [`BinaryTreeMap::validate`] reports them.

use super::binary_tree::BinaryTreeMap;
use std::cmp::Ordering;
use std::fmt;

/// A violation of the binary search tree ordering contract.
///
/// `position` is the zero-based index, in the in-order sequence, of the
/// entry that does not order strictly after its predecessor.
///
/// # Examples
///
/// ```rust
/// use persistent_bst::persistent::InvariantViolation;
///
/// let violation = InvariantViolation::OutOfOrder { position: 3 };
/// assert_eq!(
///     format!("{violation}"),
///     "binary search tree invariant violated: entry 3 orders before its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The entry orders before the entry preceding it.
    OutOfOrder {
        /// Index of the offending entry in the in-order sequence.
        position: usize,
    },
    /// The entry compares equal to the entry preceding it.
    DuplicateKey {
        /// Index of the offending entry in the in-order sequence.
        position: usize,
    },
}

impl InvariantViolation {
    /// Returns the index of the offending entry in the in-order sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::OutOfOrder { position } | Self::DuplicateKey { position } => *position,
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { position } => write!(
                formatter,
                "binary search tree invariant violated: entry {position} orders before its predecessor"
            ),
            Self::DuplicateKey { position } => write!(
                formatter,
                "binary search tree invariant violated: entry {position} duplicates its predecessor's key"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<K: Ord, V> BinaryTreeMap<K, V> {
    /// Checks that every key orders strictly after the key visited before it.
    ///
    /// For a binary tree this is equivalent to the search tree invariant:
    /// every left-subtree key is smaller and every right-subtree key is
    /// greater than its ancestor's key.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found in key order.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut previous: Option<&K> = None;
        for (position, key) in self.keys().enumerate() {
            if let Some(previous_key) = previous {
                let violation = match previous_key.cmp(key) {
                    Ordering::Less => None,
                    Ordering::Equal => Some(InvariantViolation::DuplicateKey { position }),
                    Ordering::Greater => Some(InvariantViolation::OutOfOrder { position }),
                };
                if let Some(violation) = violation {
                    trace_event!(warn, position, "tree failed validation");
                    return Err(violation);
                }
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// Validates the tree and aborts on a broken contract.
    ///
    /// # Panics
    ///
    /// Panics with the violation's message if [`validate`](Self::validate) fails.
    /// A failure means the key type's ordering is not a consistent total order,
    /// which is a programming error rather than a recoverable condition.
    pub fn assert_valid(&self) {
        if let Err(violation) = self.validate() {
            panic!("{violation}");
        }
    }
}

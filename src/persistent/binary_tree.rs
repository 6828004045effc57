//! Persistent (immutable) unbalanced binary search tree.
//!
//! This module provides [`BinaryTreeMap`], an immutable ordered map
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `BinaryTreeMap` is a plain binary search tree. It is never rebalanced,
//! so its depth depends on the insertion order:
//!
//! - O(depth) `get` / `member`
//! - O(depth) `cons`
//! - O(depth) `remove`
//! - O(depth) `min` / `max`
//! - O(N) `len` (no size is cached)
//! - O(1) `is_empty` and `clone`
//!
//! Depth is O(log N) for random insertion orders and O(N) for sorted ones.
//!
//! # Examples
//!
//! ```rust
//! use persistent_bst::persistent::BinaryTreeMap;
//!
//! let tree = BinaryTreeMap::new()
//!     .cons(3, "three")
//!     .cons(1, "one")
//!     .cons(2, "two");
//!
//! // Entries are always visited in sorted order
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//! ```
//!
//! # Internal Structure
//!
//! Every `Node` satisfies:
//! 1. All keys in its left subtree order strictly before its key
//! 2. All keys in its right subtree order strictly after its key
//!
//! Nodes are never mutated after construction. An update allocates new
//! nodes bottom-up along the search path and aliases every other subtree.

use super::ReferenceCounter;
use super::iterator::{IntoIter, Iter, Keys, Values};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

// =============================================================================
// Node Definition
// =============================================================================

/// The payload of a non-empty [`BinaryTreeMap`].
///
/// A node owns its key and value and holds two subtrees. The subtrees may be
/// shared with other versions of the tree.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: BinaryTreeMap<K, V>,
    right: BinaryTreeMap<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: BinaryTreeMap::Empty,
            right: BinaryTreeMap::Empty,
        }
    }

    /// Creates a copy of this node with new children.
    fn with_children(&self, left: BinaryTreeMap<K, V>, right: BinaryTreeMap<K, V>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            left,
            right,
        }
    }

    /// Returns the key stored in this node.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this node.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns the subtree holding the keys smaller than this node's key.
    #[inline]
    pub const fn left(&self) -> &BinaryTreeMap<K, V> {
        &self.left
    }

    /// Returns the subtree holding the keys greater than this node's key.
    #[inline]
    pub const fn right(&self) -> &BinaryTreeMap<K, V> {
        &self.right
    }
}

/// Dropping a node releases its uniquely owned descendants one at a time,
/// so a linear-depth chain never recurses through nested drops.
impl<K, V> Drop for Node<K, V> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        for child in [&mut self.left, &mut self.right] {
            if let BinaryTreeMap::Node(node) = std::mem::take(child) {
                pending.push(node);
            }
        }
        while let Some(node) = pending.pop() {
            // Nodes still referenced by another version are only released here.
            if let Ok(mut owned) = ReferenceCounter::try_unwrap(node) {
                for child in [&mut owned.left, &mut owned.right] {
                    if let BinaryTreeMap::Node(node) = std::mem::take(child) {
                        pending.push(node);
                    }
                }
            }
        }
    }
}

/// Which child of a node a search descended into.
#[derive(Clone, Copy)]
enum Branch {
    Left,
    Right,
}

// =============================================================================
// BinaryTreeMap Definition
// =============================================================================

/// A persistent (immutable) ordered map backed by an unbalanced binary search tree.
///
/// The tree is either `Empty` or a `Node` carrying a key, a value and two
/// subtrees. All structural operations pattern-match on these two variants.
///
/// Keys must implement `Ord`; the ordering is the comparator used for every
/// search. Keys that compare `Equal` are treated as the same key, so inserting
/// one replaces the stored value.
///
/// # Time Complexity
///
/// | Operation      | Complexity  |
/// |----------------|-------------|
/// | `new`          | O(1)        |
/// | `cons`         | O(depth)    |
/// | `member`       | O(depth)    |
/// | `get`          | O(depth)    |
/// | `remove`       | O(depth)    |
/// | `min`/`max`    | O(depth)    |
/// | `len`          | O(N)        |
/// | `is_empty`     | O(1)        |
/// | `clone`        | O(1)        |
///
/// # Examples
///
/// ```rust
/// use persistent_bst::persistent::BinaryTreeMap;
///
/// let tree = BinaryTreeMap::singleton(42, "answer");
/// assert_eq!(tree.get(&42), Some(&"answer"));
///
/// let extended = tree.cons(7, "seven");
/// assert_eq!(tree.len(), 1);     // Original unchanged
/// assert_eq!(extended.len(), 2); // New version
/// ```
pub enum BinaryTreeMap<K, V> {
    /// The empty tree. Carries no key, value or children.
    Empty,
    /// A non-empty tree rooted at a shared node.
    Node(ReferenceCounter<Node<K, V>>),
}

impl<K, V> BinaryTreeMap<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree: BinaryTreeMap<i32, String> = BinaryTreeMap::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Wraps a freshly built node into a tree.
    fn from_node(node: Node<K, V>) -> Self {
        Self::Node(ReferenceCounter::new(node))
    }

    /// Returns `true` if the tree contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let empty: BinaryTreeMap<i32, &str> = BinaryTreeMap::new();
    /// assert!(empty.is_empty());
    /// assert!(!empty.cons(1, "one").is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the root node, or `None` for the empty tree.
    #[must_use]
    pub fn root(&self) -> Option<&Node<K, V>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&**node),
        }
    }

    /// Returns `true` if both trees are the same allocation.
    ///
    /// Two empty trees are always identical. This is an identity check, not
    /// a content comparison: use `==` for the latter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "one")]);
    /// let rebuilt = BinaryTreeMap::from_list([(1, "one")]);
    ///
    /// assert!(tree.ptr_eq(&tree.clone()));
    /// assert!(!tree.ptr_eq(&rebuilt));
    /// assert_eq!(tree, rebuilt);
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(left), Self::Node(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(N): the tree carries no cached size, so every entry is visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "one"), (2, "two"), (1, "uno")]);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// The empty tree has depth 0. Since the tree is never rebalanced,
    /// inserting keys in sorted order yields `depth() == len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let sorted: BinaryTreeMap<i32, ()> = (0..8).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.depth(), 8);
    ///
    /// let shuffled = BinaryTreeMap::from_list([(4, ()), (2, ()), (6, ()), (1, ()), (3, ())]);
    /// assert_eq!(shuffled.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];
        while let Some((tree, above)) = pending.pop() {
            if let Self::Node(node) = tree {
                let level = above + 1;
                deepest = deepest.max(level);
                pending.push((&node.left, level));
                pending.push((&node.right, level));
            }
        }
        deepest
    }

    /// Returns a lazy iterator over entries in ascending key order.
    ///
    /// The iterator visits left subtree, node, right subtree. It holds only
    /// the current path, so consumers that stop early never visit the rest
    /// of the tree. Calling `iter` again restarts the traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(3, "c"), (1, "a"), (2, "b")]);
    ///
    /// let entries: Vec<(&i32, &&str)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Returns a lazy iterator over keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns a lazy iterator over values in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, 10), (2, 20), (3, 30)]);
    /// let sum: i32 = tree.values().sum();
    /// assert_eq!(sum, 60);
    /// ```
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::singleton("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| &node.value)
    }

    /// Returns `true` if a node with the given key exists anywhere in the tree.
    ///
    /// A missing key is not an error: the search simply ends at an empty
    /// subtree and reports `false`.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "a"), (2, "b")]);
    /// assert!(tree.member(&1));
    /// assert!(!tree.member(&3));
    /// ```
    #[must_use]
    pub fn member<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Alias of [`member`](Self::member).
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.member(key)
    }

    /// Descends by comparison until the key is found or an empty subtree is reached.
    fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        while let Self::Node(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&**node),
            }
        }
        None
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(3, "three"), (1, "one"), (2, "two")]);
    /// assert_eq!(tree.min(), Some((&1, &"one")));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(left) = node.left.root() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the maximum key.
    ///
    /// For a node's left subtree this is the node's in-order predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(3, "three"), (1, "one"), (2, "two")]);
    /// assert_eq!(tree.max(), Some((&3, &"three")));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(right) = node.right.root() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Builds the right-leaning chain that folding `cons` over strictly
    /// ascending entries produces, in O(N).
    pub(super) fn ascending_spine(entries: Vec<(K, V)>) -> Self {
        entries
            .into_iter()
            .rev()
            .fold(Self::Empty, |right, (key, value)| {
                Self::from_node(Node {
                    key,
                    value,
                    left: Self::Empty,
                    right,
                })
            })
    }

    /// Builds the left-leaning chain that folding `cons` over strictly
    /// descending entries produces, in O(N).
    pub(super) fn descending_spine(entries: Vec<(K, V)>) -> Self {
        entries
            .into_iter()
            .rev()
            .fold(Self::Empty, |left, (key, value)| {
                Self::from_node(Node {
                    key,
                    value,
                    left,
                    right: Self::Empty,
                })
            })
    }
}

impl<K: Clone + Ord, V: Clone> BinaryTreeMap<K, V> {
    /// Creates a tree containing a single key-value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::singleton(42, "answer");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&42), Some(&"answer"));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self::from_node(Node::leaf(key, value))
    }

    /// Inserts a key-value pair, replacing the value if the key already exists.
    ///
    /// Only the nodes on the root-to-key path are rebuilt. Every sibling
    /// subtree is shared with `self`. No rebalancing takes place.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree1 = BinaryTreeMap::new().cons(1, "one");
    /// let tree2 = tree1.cons(1, "ONE");
    ///
    /// assert_eq!(tree1.get(&1), Some(&"one")); // Original unchanged
    /// assert_eq!(tree2.get(&1), Some(&"ONE")); // New version
    /// assert_eq!(tree2.len(), 1);
    /// ```
    #[must_use]
    pub fn cons(&self, key: K, value: V) -> Self {
        let mut path = Vec::new();
        let mut current = self;
        let replacement = loop {
            match current {
                Self::Empty => break Self::singleton(key, value),
                Self::Node(node) => match key.cmp(&node.key) {
                    Ordering::Less => {
                        path.push((&**node, Branch::Left));
                        current = &node.left;
                    }
                    Ordering::Greater => {
                        path.push((&**node, Branch::Right));
                        current = &node.right;
                    }
                    Ordering::Equal => {
                        break Self::from_node(Node {
                            key,
                            value,
                            left: node.left.clone(),
                            right: node.right.clone(),
                        });
                    }
                },
            }
        };
        Self::rebuild_path(path, replacement)
    }

    /// Removes a key from the tree.
    ///
    /// If the key is absent, the result is `self` unchanged: the returned
    /// version shares the very same root.
    ///
    /// When the removed node has a non-empty left subtree, its place is taken
    /// by its predecessor (the maximum entry of that left subtree), which is
    /// in turn removed from the left subtree by the same rule. Otherwise the
    /// node is replaced by its right subtree.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "a"), (2, "b"), (3, "c")]);
    /// let removed = tree.remove(&2);
    ///
    /// assert_eq!(removed.to_list(), vec![(1, "a"), (3, "c")]);
    /// assert!(!removed.member(&2));
    /// assert_eq!(tree.len(), 3); // Original unchanged
    ///
    /// // Removing a missing key returns the same version
    /// assert!(removed.remove(&2).ptr_eq(&removed));
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Node(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    path.push((&**node, Branch::Left));
                    current = &node.left;
                }
                Ordering::Greater => {
                    path.push((&**node, Branch::Right));
                    current = &node.right;
                }
                Ordering::Equal => return Self::rebuild_path(path, Self::without_root(node)),
            }
        }
        trace_event!("remove: key absent, returning the same version");
        self.clone()
    }

    /// Builds the subtree that replaces `node` once its entry is removed.
    ///
    /// Each removed node with a left subtree is replaced by its predecessor,
    /// whose own slot is then emptied by the same rule. The chain of
    /// replacements is collected top-down and assembled bottom-up.
    fn without_root(node: &Node<K, V>) -> Self {
        if !node.left.is_empty() {
            trace_event!("remove: promoting predecessor into removed position");
        }
        let mut replacements = Vec::new();
        let mut removed = node;
        while let Self::Node(left) = &removed.left {
            let mut spine = Vec::new();
            let mut predecessor: &Node<K, V> = left;
            while let Self::Node(right) = &predecessor.right {
                spine.push((predecessor, Branch::Right));
                predecessor = &**right;
            }
            replacements.push((removed, spine, predecessor));
            removed = predecessor;
        }
        replacements.into_iter().rev().fold(
            removed.right.clone(),
            |emptied, (replaced, spine, predecessor)| {
                Self::from_node(Node {
                    key: predecessor.key.clone(),
                    value: predecessor.value.clone(),
                    left: Self::rebuild_path(spine, emptied),
                    right: replaced.right.clone(),
                })
            },
        )
    }

    /// Copies the nodes of `path` bottom-up, hanging `subtree` below the last one.
    /// Every sibling subtree off the path is shared.
    fn rebuild_path(path: Vec<(&Node<K, V>, Branch)>, subtree: Self) -> Self {
        path.into_iter()
            .rev()
            .fold(subtree, |child, (parent, branch)| {
                Self::from_node(match branch {
                    Branch::Left => parent.with_children(child, parent.right.clone()),
                    Branch::Right => parent.with_children(parent.left.clone(), child),
                })
            })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for BinaryTreeMap<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<K, V> Default for BinaryTreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Ord, V: Clone> FromIterator<(K, V)> for BinaryTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<K: Clone, V: Clone> IntoIterator for BinaryTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two trees are equal when their in-order entry sequences are equal.
///
/// The comparison walks both trees simultaneously and stops at the first
/// mismatching pair or as soon as one side runs out. Entries are always
/// compared, even for two handles on the same root, so a value that is not
/// equal to itself (such as `f64::NAN`) makes a tree unequal to itself.
/// Use [`ptr_eq`](BinaryTreeMap::ptr_eq) for an O(1) identity check.
impl<K: PartialEq, V: PartialEq> PartialEq for BinaryTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BinaryTreeMap<K, V> {}

/// Hashes each (key, value) pair in key order followed by the entry count.
///
/// Equal trees hash equally regardless of their shape or insertion order.
impl<K: Hash, V: Hash> Hash for BinaryTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count: usize = 0;
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinaryTreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BinaryTreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(BinaryTreeMap<i32, String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(BinaryTreeMap<i32, String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

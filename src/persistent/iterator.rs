//! Lazy in-order iterators over a [`BinaryTreeMap`].
//!
//! Each iterator keeps an explicit stack holding the left spine of the
//! subtree still to be visited. Nothing is materialized up front, so a
//! consumer that stops after `k` entries only touches O(depth + k) nodes.

use super::ReferenceCounter;
use super::binary_tree::{BinaryTreeMap, Node};
use std::iter::FusedIterator;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over key-value pairs of a [`BinaryTreeMap`] in ascending key order.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a BinaryTreeMap<K, V>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.descend_left(tree);
        iterator
    }

    /// Pushes `tree` and all of its left descendants.
    fn descend_left(&mut self, mut tree: &'a BinaryTreeMap<K, V>) {
        while let Some(node) = tree.root() {
            self.stack.push(node);
            tree = node.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right());
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every stacked node is still to be yielded; their right subtrees are unknown.
        (self.stack.len(), None)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// An iterator over the keys of a [`BinaryTreeMap`] in ascending order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`BinaryTreeMap`] in ascending key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over key-value pairs of a [`BinaryTreeMap`].
///
/// Nodes may be shared with other versions, so entries are cloned out of
/// them rather than moved.
pub struct IntoIter<K, V> {
    stack: Vec<ReferenceCounter<Node<K, V>>>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(tree: BinaryTreeMap<K, V>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.descend_left(tree);
        iterator
    }

    fn descend_left(&mut self, mut tree: BinaryTreeMap<K, V>) {
        while let BinaryTreeMap::Node(node) = tree {
            tree = node.left().clone();
            self.stack.push(node);
        }
    }
}

impl<K: Clone, V: Clone> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right().clone());
        Some((node.key().clone(), node.value().clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K: Clone, V: Clone> FusedIterator for IntoIter<K, V> {}

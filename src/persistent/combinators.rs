//! Derived combinators over [`BinaryTreeMap`].
//!
//! Everything here is built from `cons` and in-order iteration only. Each
//! combinator that produces a tree folds `cons` over an in-order sequence,
//! so a later pair in that sequence overwrites an earlier pair with an
//! equal key. `filter_set` and `intersection` feed an ascending sequence,
//! so their results are right-leaning chains as deep as they are long.

use super::binary_tree::BinaryTreeMap;

impl<K: Clone + Ord, V: Clone> BinaryTreeMap<K, V> {
    /// Builds a tree by folding `cons` over `pairs` in order.
    ///
    /// When a key occurs more than once, the value from its last occurrence wins.
    ///
    /// # Complexity
    ///
    /// O(N * depth) in general. Strictly ascending or strictly descending input
    /// (such as the in-order sequence of another tree) folds into a single
    /// chain of nodes, which is built directly in O(N) with the same shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "first"), (2, "b"), (1, "last")]);
    /// assert_eq!(tree.to_list(), vec![(1, "last"), (2, "b")]);
    /// ```
    #[must_use]
    pub fn from_list<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = pairs.into_iter().collect();
        let tree = if entries.windows(2).all(|pair| pair[0].0 < pair[1].0) {
            Self::ascending_spine(entries)
        } else if entries.windows(2).all(|pair| pair[0].0 > pair[1].0) {
            Self::descending_spine(entries)
        } else {
            entries
                .into_iter()
                .fold(Self::new(), |tree, (key, value)| tree.cons(key, value))
        };
        trace_event!(empty = tree.is_empty(), "from_list: folded input sequence");
        tree
    }

    /// Materializes the in-order sequence of entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::new().cons(2, 'b').cons(1, 'a');
    /// assert_eq!(tree.to_list(), vec![(1, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    pub fn to_list(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Inserts every entry of `other`, in its key order, into `self`.
    ///
    /// On key collisions the value from `other` wins. The operation is
    /// therefore not commutative when the key sets overlap.
    ///
    /// # Complexity
    ///
    /// O(m * depth) where m is the size of `other`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let first = BinaryTreeMap::from_list([(1, "one"), (2, "two")]);
    /// let second = BinaryTreeMap::from_list([(2, "TWO"), (3, "three")]);
    ///
    /// let concatenated = first.concat(&second);
    /// assert_eq!(concatenated.to_list(), vec![(1, "one"), (2, "TWO"), (3, "three")]);
    /// assert_eq!(second.concat(&first).get(&2), Some(&"two"));
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        other.iter().fold(self.clone(), |tree, (key, value)| {
            tree.cons(key.clone(), value.clone())
        })
    }

    /// Keeps the entries of `self` whose key is also a member of `other`.
    ///
    /// Values are taken from `self` and the result follows `self`'s key order.
    /// `other` may carry a different value type; only its keys are consulted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let first = BinaryTreeMap::from_list([(1, "a"), (2, "b")]);
    /// let second = BinaryTreeMap::from_list([(2, "B"), (3, "c")]);
    ///
    /// assert_eq!(first.intersection(&second).to_list(), vec![(2, "b")]);
    /// ```
    #[must_use]
    pub fn intersection<W>(&self, other: &BinaryTreeMap<K, W>) -> Self {
        self.filter_set(|key, _| other.member(key))
    }

    /// Applies `transform` to every entry in key order and re-inserts the
    /// results into a fresh tree.
    ///
    /// The result is ordered by the new keys. If two entries map to the same
    /// new key, the one that comes later in `self`'s key order wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, "a"), (2, "b"), (3, "c")]);
    ///
    /// let negated = tree.map_set(|key, value| (-key, value.to_uppercase()));
    /// assert_eq!(
    ///     negated.to_list(),
    ///     vec![(-3, "C".to_string()), (-2, "B".to_string()), (-1, "A".to_string())]
    /// );
    ///
    /// // Keys 2 and 3 collide on parity; 3 comes later and wins
    /// let by_parity = tree.map_set(|key, value| (key % 2, *value));
    /// assert_eq!(by_parity.to_list(), vec![(0, "b"), (1, "c")]);
    /// ```
    #[must_use]
    pub fn map_set<K2, V2, F>(&self, mut transform: F) -> BinaryTreeMap<K2, V2>
    where
        K2: Clone + Ord,
        V2: Clone,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        BinaryTreeMap::from_list(self.iter().map(|(key, value)| transform(key, value)))
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    ///
    /// Survivors are inserted into a fresh tree in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, None), (2, Some(1))]);
    /// let present = tree.filter_set(|_, value| value.is_some());
    /// assert_eq!(present.to_list(), vec![(2, Some(1))]);
    /// ```
    #[must_use]
    pub fn filter_set<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        Self::from_list(
            self.iter()
                .filter(|&(key, value)| predicate(key, value))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    /// Left fold over the entries in key order.
    ///
    /// `function` receives the accumulator first and the current entry second,
    /// and returns the next accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_bst::persistent::BinaryTreeMap;
    ///
    /// let tree = BinaryTreeMap::from_list([(1, 10), (2, 20), (3, 30)]);
    /// let total = tree.reduce_set(|accumulator, (_, value)| accumulator + value, 0);
    /// assert_eq!(total, 60);
    ///
    /// // Accumulation follows key order
    /// let keys = tree.reduce_set(
    ///     |accumulator, (key, _)| format!("{accumulator}{key}"),
    ///     String::new(),
    /// );
    /// assert_eq!(keys, "123");
    /// ```
    pub fn reduce_set<A, F>(&self, function: F, initial: A) -> A
    where
        F: FnMut(A, (&K, &V)) -> A,
    {
        self.iter().fold(initial, function)
    }
}

//! Union-find (disjoint set union) over the vertices `0..n`.
//!
//! Trees are kept shallow with union by rank, and `find` flattens every path
//! it walks. Together these give the inverse-Ackermann amortised bound that
//! Kruskal relies on for its cycle checks.

use std::cmp::Ordering;

/// A partition of `0..len()` into disjoint sets.
///
/// # Examples
/// ```
/// use kruskal_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert!(sets.connected(0, 1));
/// assert!(!sets.connected(1, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `size` singleton sets, each vertex its own root with rank 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// Number of elements in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.sets }

    /// Current parent pointer of `node`, or `None` when out of range.
    ///
    /// A node is a root exactly when it is its own parent.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent.get(node).copied()
    }

    /// Current rank of `node`, or `None` when out of range.
    ///
    /// Only meaningful while `node` is a root.
    #[must_use]
    pub fn rank(&self, node: usize) -> Option<u8> {
        self.rank.get(node).copied()
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node on the walked path is re-pointed directly at the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing any set when both are already in the
    /// same set. Otherwise the lower-ranked root is attached below the
    /// higher-ranked one; on a tie `right`'s root goes below `left`'s root,
    /// whose rank grows by one.
    ///
    /// # Panics
    /// Panics when either argument is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        match left_rank.cmp(&self.rank[right_root]) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` when `left` and `right` are in the same set.
    ///
    /// # Panics
    /// Panics when either argument is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

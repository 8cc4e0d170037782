//! Disjoint-set union over dense vertex ids, backing the Kruskal engine.
//!
//! Components merge by rank and `find` compresses paths iteratively: one pass
//! locates the root, a second re-points every visited id at it.

/// Disjoint-set forest over the ids `0..len`.
///
/// # Examples
/// ```
/// use tsunagi_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert!(sets.connected(0, 1));
/// assert_eq!(sets.components(), 3);
///
/// sets.reset();
/// assert_eq!(sets.find(1), 1);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of ids tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no ids are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both were already in the same set.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a set.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Restores every id to a rank-zero singleton without reallocating.
    pub fn reset(&mut self) {
        for (id, parent) in self.parent.iter_mut().enumerate() {
            *parent = id;
        }
        self.rank.fill(0);
        self.components = self.parent.len();
    }
}

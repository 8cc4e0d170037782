//! Weighted edge value type.

use std::cmp::Ordering;
use std::fmt;

/// A directed view of one weighted graph edge.
///
/// Undirected graphs store each edge twice, once per direction, so
/// `(u, v, w)` and `(v, u, w)` describe the same undirected edge. Edges order
/// by weight, then by start id, then by end id.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    weight: u32,
    start: usize,
    end: usize,
}

impl Edge {
    /// Creates an edge from `start` to `end` with the given `weight`.
    ///
    /// # Examples
    /// ```
    /// use tsunagi_core::Edge;
    ///
    /// let edge = Edge::new(3, 0, 2);
    /// assert_eq!((edge.weight(), edge.start(), edge.end()), (3, 0, 2));
    /// ```
    #[must_use]
    pub const fn new(weight: u32, start: usize, end: usize) -> Self {
        Self { weight, start, end }
    }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the start vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the end vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> usize { self.end }

    /// Returns the same edge travelling in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.weight, self.end, self.start)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} weight = {}", self.start, self.end, self.weight)
    }
}

/// Sums edge weights without overflow.
#[must_use]
pub fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|edge| u64::from(edge.weight)).sum()
}

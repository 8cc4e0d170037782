//! Minimum spanning tree (MST) construction.
//!
//! Two engines compute the same tree weight by different routes:
//!
//! - [`Kruskal`] scans a weight-sorted edge sequence and keeps every edge that
//!   joins two [`UnionFind`] components.
//! - [`Prim`] grows a tree from vertex 0, pulling the cheapest frontier
//!   vertex out of an [`IndexedMinHeap`].
//!
//! Both engines are reusable. Each run leaves working state behind, and a
//! caller that runs the same engine again must reset it first
//! ([`Kruskal::reset`], [`Prim::reset_vertices`]); skipping the reset is
//! reported as [`crate::MstError::StaleState`].

mod heap;
mod kruskal;
mod prim;
mod union_find;

pub use self::{
    heap::{INFINITE_PRIORITY, IndexedMinHeap},
    kruskal::{Kruskal, kruskal_mst},
    prim::{Prim, PrimState, PrimTree, VertexState, prim_mst},
    union_find::UnionFind,
};

use crate::edge::{Edge, total_weight};

/// An MST (or, for disconnected Kruskal input, a spanning forest) as an edge
/// list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl SpanningTree {
    pub(crate) const fn new(edges: Vec<Edge>, vertex_count: usize) -> Self {
        Self {
            edges,
            vertex_count,
        }
    }

    /// Returns the accepted edges, in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the vertex count of the graph the tree was built for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Sums the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        total_weight(&self.edges)
    }

    /// Returns `true` when the tree has exactly `vertex_count - 1` edges.
    ///
    /// Engines never accept a cycle, so the edge count alone decides whether
    /// the tree spans the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }
}

#[cfg(test)]
mod property;

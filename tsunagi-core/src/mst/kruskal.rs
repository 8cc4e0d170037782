//! Kruskal's algorithm over a pre-sorted edge sequence.

use tracing::{Span, debug, instrument};

use crate::{Edge, error::MstError};

use super::{SpanningTree, union_find::UnionFind};

/// A reusable Kruskal engine sized to one vertex count.
///
/// The engine owns its [`UnionFind`]; comparisons that run several sorted
/// inputs through the same engine call [`Kruskal::reset`] between runs
/// instead of reallocating. Running on a union-find that already merged
/// components fails with [`MstError::StaleState`].
///
/// # Examples
/// ```
/// use tsunagi_core::{Edge, Kruskal};
///
/// let sorted = [Edge::new(1, 1, 2), Edge::new(2, 0, 1), Edge::new(3, 0, 2)];
/// let mut engine = Kruskal::new(3)?;
/// let tree = engine.run(&sorted)?;
/// assert_eq!(tree.total_weight(), 3);
///
/// engine.reset();
/// assert_eq!(engine.run(&sorted)?, tree);
/// # Ok::<(), tsunagi_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Kruskal {
    union_find: UnionFind,
}

impl Kruskal {
    /// Creates an engine for graphs with `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, MstError> {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }
        Ok(Self {
            union_find: UnionFind::new(vertex_count),
        })
    }

    /// Returns the vertex count the engine was sized for.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.union_find.len()
    }

    /// Returns the union-find left behind by the last run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn union_find(&self) -> &UnionFind { &self.union_find }

    /// Restores the union-find to singletons so the engine can run again.
    pub fn reset(&mut self) {
        self.union_find.reset();
    }

    /// Accepts edges from `sorted` in order whenever they join two
    /// components, stopping once `vertex_count - 1` edges are accepted.
    ///
    /// A disconnected input yields a shorter tree rather than an error.
    ///
    /// # Errors
    /// Returns [`MstError::StaleState`] when the engine was not reset after a
    /// previous run, [`MstError::InvalidVertexId`] for an endpoint outside
    /// the graph and [`MstError::UnsortedEdges`] when a weight is smaller
    /// than its predecessor's.
    #[instrument(
        name = "kruskal.run",
        err,
        skip(self, sorted),
        fields(vertex_count = self.vertex_count(), edges = sorted.len(), accepted),
    )]
    pub fn run(&mut self, sorted: &[Edge]) -> Result<SpanningTree, MstError> {
        let vertex_count = self.vertex_count();
        if self.union_find.components() != vertex_count {
            return Err(MstError::StaleState);
        }
        validate_input(sorted, vertex_count)?;

        let target = vertex_count - 1;
        let mut accepted = Vec::with_capacity(target);
        for edge in sorted {
            if accepted.len() == target {
                break;
            }
            if self.union_find.union(edge.start(), edge.end()) {
                accepted.push(*edge);
            }
        }

        Span::current().record("accepted", accepted.len());
        if accepted.len() < target {
            debug!(
                components = self.union_find.components(),
                "edge sequence exhausted before the tree spanned every vertex"
            );
        }
        Ok(SpanningTree::new(accepted, vertex_count))
    }
}

fn validate_input(sorted: &[Edge], vertex_count: usize) -> Result<(), MstError> {
    for (index, edge) in sorted.iter().enumerate() {
        for vertex in [edge.start(), edge.end()] {
            if vertex >= vertex_count {
                return Err(MstError::InvalidVertexId {
                    vertex,
                    vertex_count,
                });
            }
        }
        if index > 0 && sorted[index - 1].weight() > edge.weight() {
            return Err(MstError::UnsortedEdges { index });
        }
    }
    Ok(())
}

/// Runs Kruskal's algorithm once on a fresh engine.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a zero vertex count, otherwise the
/// errors of [`Kruskal::run`].
pub fn kruskal_mst(sorted: &[Edge], vertex_count: usize) -> Result<SpanningTree, MstError> {
    Kruskal::new(vertex_count)?.run(sorted)
}

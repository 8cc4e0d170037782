//! Matrix and list views over a [`Graph`].
//!
//! Both views answer the same questions, but with the costs of the storage
//! they read: the matrix finds a connecting edge in O(1), the list scans the
//! start vertex's row.

use std::fmt;

use crate::Edge;

use super::{Graph, Vertex};

/// Identifies which storage a [`Representation`] reads from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RepresentationKind {
    /// Dense `n × n` adjacency matrix.
    Matrix,
    /// Per-vertex adjacency rows.
    List,
}

impl RepresentationKind {
    /// Both representations, matrix first.
    pub const ALL: [Self; 2] = [Self::Matrix, Self::List];

    /// Returns the lowercase identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a graph, as consumed by the MST engines.
pub trait Representation {
    /// Returns which storage backs this view.
    fn kind(&self) -> RepresentationKind;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the ids adjacent to `vertex`, or an empty slice for an
    /// unknown id.
    fn neighbours(&self, vertex: usize) -> &[usize];

    /// Returns the weight of the edge connecting `from` and `to`, if any.
    fn weight_between(&self, from: usize, to: usize) -> Option<u32>;

    /// Returns every undirected edge exactly once, ready for sorting.
    fn undirected_edges(&self) -> Vec<Edge>;
}

/// Adjacency-matrix view of a [`Graph`].
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyMatrix<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyMatrix<'a> {
    pub(super) const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Returns the cell at `(row, column)`, if an edge is stored there.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Edge> {
        self.graph.edge_between(row, column)
    }
}

impl Representation for AdjacencyMatrix<'_> {
    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Matrix
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn neighbours(&self, vertex: usize) -> &[usize] {
        self.graph
            .vertex(vertex)
            .map(Vertex::adjacents)
            .unwrap_or_default()
    }

    fn weight_between(&self, from: usize, to: usize) -> Option<u32> {
        self.cell(from, to).map(|edge| edge.weight())
    }

    /// Walks the upper triangle row by row, so every edge appears once with
    /// `start < end`.
    fn undirected_edges(&self) -> Vec<Edge> {
        let vertex_count = self.vertex_count();
        let mut edges = Vec::with_capacity(self.graph.edge_count());
        for row in 0..vertex_count {
            for column in (row + 1)..vertex_count {
                if let Some(edge) = self.cell(row, column) {
                    edges.push(edge);
                }
            }
        }
        edges
    }
}

/// Adjacency-list view of a [`Graph`].
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyList<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyList<'a> {
    pub(super) const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Returns the outgoing edges stored for `vertex`, in insertion order.
    #[must_use]
    pub fn row(&self, vertex: usize) -> &'a [Edge] {
        self.graph
            .rows
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Representation for AdjacencyList<'_> {
    fn kind(&self) -> RepresentationKind {
        RepresentationKind::List
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn neighbours(&self, vertex: usize) -> &[usize] {
        self.graph
            .vertex(vertex)
            .map(Vertex::adjacents)
            .unwrap_or_default()
    }

    fn weight_between(&self, from: usize, to: usize) -> Option<u32> {
        self.row(from)
            .iter()
            .find(|edge| edge.end() == to)
            .map(Edge::weight)
    }

    /// Keeps the first direction of every stored pair; [`Graph::add_edge`]
    /// always appends the pair back to back.
    fn undirected_edges(&self) -> Vec<Edge> {
        self.graph.edges().iter().step_by(2).copied().collect()
    }
}

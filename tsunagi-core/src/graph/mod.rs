//! Undirected weighted graph with matrix and list representations.
//!
//! A [`Graph`] stores every undirected edge `{u, v}` as the directed pair
//! `(u → v, v → u)`. The pair is kept in four places that must stay
//! consistent: the symmetric edge list, both cells of the adjacency matrix,
//! both per-vertex list rows, and both vertices' adjacency sets. The two
//! read-only views, [`AdjacencyMatrix`] and [`AdjacencyList`], expose the same
//! graph through the [`Representation`] trait consumed by the MST engines.

mod generator;
mod representation;
mod traversal;

pub use self::{
    generator::{DEFAULT_MAX_ATTEMPTS, GeneratedGraph, GraphConfig, generate},
    representation::{AdjacencyList, AdjacencyMatrix, Representation, RepresentationKind},
    traversal::{Traversal, depth_first},
};

use crate::{Edge, error::GraphError, mst::INFINITE_PRIORITY};

/// The largest accepted edge weight. `u32::MAX` marks unreached vertices in
/// Prim's heap.
pub const MAX_EDGE_WEIGHT: u32 = INFINITE_PRIORITY - 1;

/// A graph vertex: an immutable id plus the ids adjacent to it.
///
/// Working state for Prim's algorithm lives in [`crate::PrimState`], so a
/// vertex never changes once its edges have been added.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vertex {
    id: usize,
    adjacents: Vec<usize>,
}

impl Vertex {
    const fn new(id: usize) -> Self {
        Self {
            id,
            adjacents: Vec::new(),
        }
    }

    /// Returns the vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> usize { self.id }

    /// Returns the ids of vertices one edge away, in insertion order.
    #[must_use]
    pub fn adjacents(&self) -> &[usize] {
        &self.adjacents
    }

    fn add_adjacent(&mut self, other: usize) {
        if !self.adjacents.contains(&other) {
            self.adjacents.push(other);
        }
    }
}

/// An undirected, positively weighted graph over the dense ids
/// `0..vertex_count`.
///
/// The adjacency matrix is allocated eagerly with `vertex_count²` cells.
///
/// # Examples
/// ```
/// use tsunagi_core::{Graph, Representation};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(2, 0, 1)?;
/// graph.add_edge(1, 1, 2)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.matrix().weight_between(2, 1), Some(1));
/// # Ok::<(), tsunagi_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    matrix: Vec<Option<Edge>>,
    rows: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates an edgeless graph with `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::TooFewVertices`] when `vertex_count` is zero and
    /// [`GraphError::TooManyVertices`] when `vertex_count²` overflows `usize`.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::TooFewVertices { got: 0, min: 1 });
        }
        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::TooManyVertices { vertex_count })?;
        Ok(Self {
            vertices: (0..vertex_count).map(Vertex::new).collect(),
            edges: Vec::new(),
            matrix: vec![None; cells],
            rows: vec![Vec::new(); vertex_count],
        })
    }

    /// Adds the undirected edge `{start, end}` with the given weight.
    ///
    /// # Errors
    /// Rejects ids outside the graph, self loops, weights outside
    /// `[1, MAX_EDGE_WEIGHT]` and edges that already exist in either
    /// direction.
    pub fn add_edge(&mut self, weight: u32, start: usize, end: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [start, end] {
            if vertex >= vertex_count {
                return Err(GraphError::InvalidVertexId {
                    vertex,
                    vertex_count,
                });
            }
        }
        if start == end {
            return Err(GraphError::SelfLoop { vertex: start });
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight { start, end });
        }
        if weight > MAX_EDGE_WEIGHT {
            return Err(GraphError::WeightTooLarge {
                start,
                end,
                weight,
                max: MAX_EDGE_WEIGHT,
            });
        }
        if self.edge_between(start, end).is_some() {
            return Err(GraphError::DuplicateEdge { start, end });
        }

        let forward = Edge::new(weight, start, end);
        let backward = forward.reversed();

        self.edges.push(forward);
        self.edges.push(backward);
        self.matrix[start * vertex_count + end] = Some(forward);
        self.matrix[end * vertex_count + start] = Some(backward);
        self.rows[start].push(forward);
        self.rows[end].push(backward);
        self.vertices[start].add_adjacent(end);
        self.vertices[end].add_adjacent(start);
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Returns every vertex, indexed by id.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex with the given id, if present.
    #[must_use]
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Returns the symmetric edge list: both directions of every edge, in
    /// insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the directed edge `start → end`, if present.
    #[must_use]
    pub fn edge_between(&self, start: usize, end: usize) -> Option<Edge> {
        let vertex_count = self.vertex_count();
        if start >= vertex_count || end >= vertex_count {
            return None;
        }
        self.matrix[start * vertex_count + end]
    }

    /// Views the graph as an adjacency matrix.
    #[must_use]
    pub const fn matrix(&self) -> AdjacencyMatrix<'_> {
        AdjacencyMatrix::new(self)
    }

    /// Views the graph as an adjacency list.
    #[must_use]
    pub const fn list(&self) -> AdjacencyList<'_> {
        AdjacencyList::new(self)
    }
}

#[cfg(test)]
mod tests;

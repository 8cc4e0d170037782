//! Benchmark parameter types.

use std::fmt;

use tsunagi_core::{RepresentationKind, SortAlgorithm};

/// Vertex counts shared by every benchmark group.
pub const VERTEX_COUNTS: &[usize] = &[16, 64, 256];

/// Parameters for one generated benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any vertex pair is connected.
    pub edge_probability: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.edge_probability)
    }
}

/// Parameters for an edge sort benchmark.
#[derive(Clone, Copy, Debug)]
pub struct SortBenchParams {
    /// Strategy under test.
    pub algorithm: SortAlgorithm,
    /// Graph the edges come from.
    pub graph: GraphBenchParams,
}

impl fmt::Display for SortBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.algorithm, self.graph)
    }
}

/// Parameters for an MST engine benchmark.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Representation the engine reads.
    pub representation: RepresentationKind,
    /// Graph under test.
    pub graph: GraphBenchParams,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.representation, self.graph)
    }
}

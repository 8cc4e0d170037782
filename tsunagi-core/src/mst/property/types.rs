//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::Graph;

/// How edge weights and density are chosen for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights uniform in `[1, n]` with moderate density.
    #[weight(3)]
    Uniform,
    /// Weights drawn from `{1, 2}`, so most edges tie.
    #[weight(3)]
    ManyIdentical,
    /// A spanning tree plus roughly `n / 2` extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    #[weight(2)]
    Dense,
}

/// A connected graph plus the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// The generated graph; always connected.
    pub graph: Graph,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}

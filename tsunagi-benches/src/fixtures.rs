//! Seeded benchmark inputs.

use tsunagi_core::{
    Edge, Graph, GraphConfig, Representation, RepresentationKind, SortAlgorithm, generate,
    sort::sorted,
};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Seed used for every generated benchmark graph.
pub const SEED: u64 = 42;

/// A connected graph plus its undirected edges in generation order.
#[derive(Clone, Debug)]
pub struct GraphFixture {
    graph: Graph,
    edges: Vec<Edge>,
}

impl GraphFixture {
    /// Generates the graph described by `params` with [`SEED`].
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Graph`] when the parameters are invalid or
    /// no connected graph appears within the default attempt budget.
    pub fn generate(params: GraphBenchParams) -> Result<Self, BenchSetupError> {
        let config = GraphConfig::new(params.vertex_count, SEED, params.edge_probability);
        let graph = generate(&config)?.into_graph();
        let edges = graph.matrix().undirected_edges();
        Ok(Self { graph, edges })
    }

    /// Returns the graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the unsorted undirected edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the radix that admits every generated weight.
    #[must_use]
    pub fn radix(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the undirected edges of `representation`, quicksorted for
    /// Kruskal.
    ///
    /// # Errors
    /// Propagates [`BenchSetupError::Sort`]; quicksort never rejects input, so
    /// this only fails if the sort contract changes.
    pub fn sorted_edges(
        &self,
        representation: RepresentationKind,
    ) -> Result<Vec<Edge>, BenchSetupError> {
        let edges = match representation {
            RepresentationKind::Matrix => self.graph.matrix().undirected_edges(),
            RepresentationKind::List => self.graph.list().undirected_edges(),
        };
        Ok(sorted(edges, SortAlgorithm::Quick, self.radix())?)
    }
}

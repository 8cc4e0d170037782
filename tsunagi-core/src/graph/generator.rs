//! Seeded random graph generation.
//!
//! Every vertex pair `x < y` receives an edge with probability `p` and a
//! weight drawn uniformly from `[1, n]`. Attempts repeat until a depth-first
//! search from vertex 0 reaches every vertex, so the MST engines always see a
//! connected graph.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument, warn};

use crate::error::GraphError;

use super::{Graph, MAX_EDGE_WEIGHT, Traversal, depth_first};

/// Attempt budget used when [`GraphConfig::with_max_attempts`] is not called.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

const MIN_VERTICES: usize = 2;

/// Parameters for [`generate`].
///
/// # Examples
/// ```
/// use tsunagi_core::GraphConfig;
///
/// let config = GraphConfig::new(6, 42, 0.5).with_max_attempts(10);
/// assert_eq!(config.max_attempts(), 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    vertex_count: usize,
    seed: u64,
    edge_probability: f64,
    max_attempts: usize,
}

impl GraphConfig {
    /// Creates a configuration with the default attempt budget.
    #[must_use]
    pub const fn new(vertex_count: usize, seed: u64, edge_probability: f64) -> Self {
        Self {
            vertex_count,
            seed,
            edge_probability,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides how many graphs may be drawn before giving up on
    /// connectivity.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the number of vertices to generate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the random seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Returns the probability that any vertex pair is connected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_probability(&self) -> f64 { self.edge_probability }

    /// Returns the attempt budget.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_attempts(&self) -> usize { self.max_attempts }

    /// Checks the configuration without generating anything.
    ///
    /// # Errors
    /// Returns [`GraphError::TooFewVertices`] for fewer than two vertices,
    /// [`GraphError::InvalidProbability`] for a probability outside `[0, 1]`
    /// (including NaN) and [`GraphError::InvalidMaxAttempts`] for a zero
    /// budget.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.vertex_count < MIN_VERTICES {
            return Err(GraphError::TooFewVertices {
                got: self.vertex_count,
                min: MIN_VERTICES,
            });
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidProbability {
                got: self.edge_probability,
            });
        }
        if self.max_attempts == 0 {
            return Err(GraphError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

/// A connected graph together with how it was produced.
#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    graph: Graph,
    traversal: Traversal,
    attempts: usize,
    elapsed: Duration,
}

impl GeneratedGraph {
    /// Returns the generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the depth-first search that certified connectivity.
    #[must_use]
    #[rustfmt::skip]
    pub const fn traversal(&self) -> &Traversal { &self.traversal }

    /// Returns how many graphs were drawn, including the accepted one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attempts(&self) -> usize { self.attempts }

    /// Returns the wall-clock time spent generating.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Consumes the wrapper and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Generates a connected random graph.
///
/// Edge placement and weights draw from two independent generators seeded
/// with `seed` and `2 * seed`, so the same configuration always yields the
/// same graph.
///
/// # Errors
/// Returns the [`GraphConfig::validate`] errors, or
/// [`GraphError::ConnectivityNotReached`] when no connected graph appears
/// within the attempt budget.
///
/// # Examples
/// ```
/// use tsunagi_core::{GraphConfig, generate};
///
/// let generated = generate(&GraphConfig::new(5, 7, 1.0))?;
/// assert_eq!(generated.graph().edge_count(), 10);
/// assert!(generated.traversal().is_spanning());
/// # Ok::<(), tsunagi_core::GraphError>(())
/// ```
#[instrument(
    name = "graph.generate",
    err,
    skip(config),
    fields(
        vertex_count = config.vertex_count,
        seed = config.seed,
        edge_probability = config.edge_probability,
    ),
)]
pub fn generate(config: &GraphConfig) -> Result<GeneratedGraph, GraphError> {
    config.validate()?;
    let started = Instant::now();

    let mut edge_rng = SmallRng::seed_from_u64(config.seed);
    let mut weight_rng = SmallRng::seed_from_u64(config.seed.wrapping_mul(2));
    let max_weight = u32::try_from(config.vertex_count)
        .unwrap_or(MAX_EDGE_WEIGHT)
        .min(MAX_EDGE_WEIGHT);

    for attempt in 1..=config.max_attempts {
        let graph = draw_graph(config, max_weight, &mut edge_rng, &mut weight_rng)?;
        let traversal = depth_first(&graph, 0);
        if traversal.is_spanning() {
            debug!(
                attempt,
                edges = graph.edge_count(),
                "generated connected graph"
            );
            return Ok(GeneratedGraph {
                graph,
                traversal,
                attempts: attempt,
                elapsed: started.elapsed(),
            });
        }
        debug!(
            attempt,
            reached = traversal.reached_count(),
            "discarding disconnected graph"
        );
    }

    warn!(
        attempts = config.max_attempts,
        "attempt budget exhausted before a connected graph appeared"
    );
    Err(GraphError::ConnectivityNotReached {
        attempts: config.max_attempts,
    })
}

fn draw_graph(
    config: &GraphConfig,
    max_weight: u32,
    edge_rng: &mut SmallRng,
    weight_rng: &mut SmallRng,
) -> Result<Graph, GraphError> {
    let vertex_count = config.vertex_count;
    let mut graph = Graph::new(vertex_count)?;
    for x in 0..vertex_count {
        for y in (x + 1)..vertex_count {
            if edge_rng.gen_bool(config.edge_probability) {
                let weight = weight_rng.gen_range(1..=max_weight);
                graph.add_edge(weight, x, y)?;
            }
        }
    }
    Ok(graph)
}

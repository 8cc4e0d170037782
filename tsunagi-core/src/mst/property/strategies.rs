//! Strategy builders for MST property-based tests.
//!
//! Every generator first links the vertices into a random spanning tree, so
//! fixtures are always connected, then adds extra edges according to the
//! distribution. Weights stay within `[1, n]` so counting sort can use the
//! vertex count as its radix.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Uniform => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            probabilistic_graph(rng, vertex_count, (0.1, 0.4), |r, n| r.gen_range(1..=n))
        }
        WeightDistribution::ManyIdentical => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            probabilistic_graph(rng, vertex_count, (0.2, 0.5), |r, n| {
                r.gen_range(1..=n.min(2))
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            probabilistic_graph(rng, vertex_count, (0.7, 0.95), |r, n| r.gen_range(1..=n))
        }
    };
    MstFixture {
        graph,
        distribution,
    }
}

fn probabilistic_graph(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng, u32) -> u32,
) -> Graph {
    let max_weight = weight_bound(vertex_count);
    let mut graph = spanning_tree(rng, vertex_count, &mut weight);
    let probability = rng.gen_range(probability_range.0..=probability_range.1);
    for x in 0..vertex_count {
        for y in (x + 1)..vertex_count {
            if graph.edge_between(x, y).is_none() && rng.gen_bool(probability) {
                let w = weight(rng, max_weight);
                add(&mut graph, w, x, y);
            }
        }
    }
    graph
}

fn sparse_graph(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let max_weight = weight_bound(vertex_count);
    let mut weight = |r: &mut SmallRng, n: u32| r.gen_range(1..=n);
    let mut graph = spanning_tree(rng, vertex_count, &mut weight);
    for _ in 0..vertex_count / 2 {
        let x = rng.gen_range(0..vertex_count);
        let y = rng.gen_range(0..vertex_count);
        if x != y && graph.edge_between(x, y).is_none() {
            let w = weight(rng, max_weight);
            add(&mut graph, w, x, y);
        }
    }
    graph
}

/// Links a random permutation of the vertices into a tree.
fn spanning_tree(
    rng: &mut SmallRng,
    vertex_count: usize,
    weight: &mut impl FnMut(&mut SmallRng, u32) -> u32,
) -> Graph {
    let max_weight = weight_bound(vertex_count);
    let mut graph = Graph::new(vertex_count).expect("vertex count is positive");
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for index in 1..vertex_count {
        let parent = order[rng.gen_range(0..index)];
        let w = weight(rng, max_weight);
        add(&mut graph, w, parent, order[index]);
    }
    graph
}

fn add(graph: &mut Graph, weight: u32, start: usize, end: usize) {
    graph
        .add_edge(weight, start, end)
        .expect("generated edge must be valid");
}

fn weight_bound(vertex_count: usize) -> u32 {
    u32::try_from(vertex_count).expect("generated vertex counts are small")
}

fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

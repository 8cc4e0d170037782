//! Sequential Kruskal oracle for MST property verification.
//!
//! Deliberately independent of the engines under test: it sorts with the
//! standard library and tracks components in a plain parent array.

use crate::Graph;

use super::helpers::find_root;

/// Result of the oracle run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total MST weight.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
}

/// Computes the MST weight of `graph` from its symmetric edge list.
pub(super) fn sequential_kruskal(graph: &Graph) -> OracleResult {
    let vertex_count = graph.vertex_count();
    let mut edges: Vec<_> = graph
        .edges()
        .iter()
        .filter(|edge| edge.start() < edge.end())
        .copied()
        .collect();
    edges.sort_unstable_by_key(|edge| edge.weight());

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total_weight = 0_u64;
    let mut edge_count = 0;
    for edge in &edges {
        let left = find_root(&mut parent, edge.start());
        let right = find_root(&mut parent, edge.end());
        if left != right {
            parent[left] = right;
            total_weight += u64::from(edge.weight());
            edge_count += 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
    }
}

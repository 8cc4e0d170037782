//! Property 2: structural invariant verification.
//!
//! For every tree produced by either engine, verifies:
//!
//! - **Edge count**: exactly `V - 1` edges for a connected input.
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Fidelity**: every tree edge exists in the graph with the same weight.
//! - **Kruskal order**: accepted edges never decrease in weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Edge, Graph, RepresentationKind, SortAlgorithm, kruskal_mst, prim_mst, sort::is_sorted_by_weight,
};

use super::helpers::{canonical, find_root, sorted_input};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;

    for kind in RepresentationKind::ALL {
        for algorithm in SortAlgorithm::ALL {
            let edges = sorted_input(fixture, kind, algorithm)?;
            let tree = kruskal_mst(&edges, graph.vertex_count())
                .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
            let label = format!("kruskal ({kind}, {algorithm})");
            validate_tree(&label, graph, tree.edges(), fixture)?;
            if !is_sorted_by_weight(tree.edges()) {
                return Err(TestCaseError::fail(format!(
                    "{label}: accepted edges out of weight order ({})",
                    fixture.describe()
                )));
            }
        }
    }

    let matrix = prim_mst(&graph.matrix())
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err}")))?;
    validate_tree("prim (matrix)", graph, &matrix.edges(), fixture)?;
    if matrix.parent(0).is_some() || matrix.weight(0) != Some(0) {
        return Err(TestCaseError::fail(format!(
            "prim root slot must be (none, 0) ({})",
            fixture.describe()
        )));
    }

    Ok(())
}

fn validate_tree(label: &str, graph: &Graph, edges: &[Edge], fixture: &MstFixture) -> TestCaseResult {
    let vertex_count = graph.vertex_count();
    if edges.len() + 1 != vertex_count {
        return Err(TestCaseError::fail(format!(
            "{label}: {} edges for {vertex_count} vertices ({})",
            edges.len(),
            fixture.describe()
        )));
    }

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let (low, high) = canonical(edge);
        if graph.edge_between(low, high).map(|stored| stored.weight()) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "{label}: edge {index} ({edge}) is not in the graph ({})",
                fixture.describe()
            )));
        }
        let left = find_root(&mut parent, low);
        let right = find_root(&mut parent, high);
        if left == right {
            return Err(TestCaseError::fail(format!(
                "{label}: edge {index} ({edge}) closes a cycle ({})",
                fixture.describe()
            )));
        }
        parent[left] = right;
    }
    Ok(())
}

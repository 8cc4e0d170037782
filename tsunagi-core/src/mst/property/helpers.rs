//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Representation, RepresentationKind, SortAlgorithm, sort::sorted};

use super::types::MstFixture;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns the edge's endpoints with the smaller id first.
pub(super) fn canonical(edge: &Edge) -> (usize, usize) {
    (edge.start().min(edge.end()), edge.start().max(edge.end()))
}

/// Returns the de-duplicated edges of the chosen representation, sorted.
pub(super) fn sorted_input(
    fixture: &MstFixture,
    kind: RepresentationKind,
    algorithm: SortAlgorithm,
) -> Result<Vec<Edge>, TestCaseError> {
    let graph = &fixture.graph;
    let edges = match kind {
        RepresentationKind::Matrix => graph.matrix().undirected_edges(),
        RepresentationKind::List => graph.list().undirected_edges(),
    };
    sorted(edges, algorithm, graph.vertex_count()).map_err(|err| {
        TestCaseError::fail(format!(
            "{algorithm} over {kind} failed: {err} ({})",
            fixture.describe()
        ))
    })
}

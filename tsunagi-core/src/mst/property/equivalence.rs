//! Property 1: every engine run matches the oracle's total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{RepresentationKind, SortAlgorithm, kruskal_mst, prim_mst};

use super::helpers::sorted_input;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let expected = sequential_kruskal(graph);

    for kind in RepresentationKind::ALL {
        for algorithm in SortAlgorithm::ALL {
            let edges = sorted_input(fixture, kind, algorithm)?;
            let tree = kruskal_mst(&edges, graph.vertex_count()).map_err(|err| {
                TestCaseError::fail(format!(
                    "kruskal ({kind}, {algorithm}) failed: {err} ({})",
                    fixture.describe()
                ))
            })?;
            check_weight("kruskal", kind, tree.total_weight(), expected.total_weight, fixture)?;
        }
    }

    for (kind, result) in [
        (RepresentationKind::Matrix, prim_mst(&graph.matrix())),
        (RepresentationKind::List, prim_mst(&graph.list())),
    ] {
        let tree = result.map_err(|err| {
            TestCaseError::fail(format!("prim ({kind}) failed: {err} ({})", fixture.describe()))
        })?;
        check_weight("prim", kind, tree.total_weight(), expected.total_weight, fixture)?;
    }

    Ok(())
}

fn check_weight(
    engine: &str,
    kind: RepresentationKind,
    actual: u64,
    expected: u64,
    fixture: &MstFixture,
) -> TestCaseResult {
    if actual == expected {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{engine} ({kind}) weight {actual} != oracle {expected} ({})",
            fixture.describe()
        )))
    }
}

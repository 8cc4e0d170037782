//! Property 3: reused engines reproduce their output after a reset.
//!
//! Mirrors how the comparison runner drives one engine of each kind through
//! many runs on the same graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Kruskal, Prim, RepresentationKind, SortAlgorithm};

use super::helpers::sorted_input;
use super::types::MstFixture;

/// Runs the reset idempotence property for the given fixture.
pub(super) fn run_reset_idempotence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let fail = |what: &str, err: &dyn std::fmt::Display| {
        TestCaseError::fail(format!("{what} failed: {err} ({})", fixture.describe()))
    };

    let mut kruskal = Kruskal::new(graph.vertex_count()).map_err(|err| fail("kruskal", &err))?;
    for kind in RepresentationKind::ALL {
        for algorithm in SortAlgorithm::ALL {
            let edges = sorted_input(fixture, kind, algorithm)?;
            let first = kruskal.run(&edges).map_err(|err| fail("kruskal", &err))?;
            kruskal.reset();
            let second = kruskal.run(&edges).map_err(|err| fail("kruskal rerun", &err))?;
            kruskal.reset();
            if first != second {
                return Err(TestCaseError::fail(format!(
                    "kruskal ({kind}, {algorithm}) changed after reset ({})",
                    fixture.describe()
                )));
            }
        }
    }

    let mut prim = Prim::new(graph.vertex_count()).map_err(|err| fail("prim", &err))?;
    let matrix = prim.run(&graph.matrix()).map_err(|err| fail("prim", &err))?;
    prim.reset_vertices();
    let list = prim.run(&graph.list()).map_err(|err| fail("prim", &err))?;
    prim.reset_vertices();
    let again = prim.run(&graph.matrix()).map_err(|err| fail("prim rerun", &err))?;

    if matrix != list || matrix != again {
        return Err(TestCaseError::fail(format!(
            "prim assignments differ across reset runs ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

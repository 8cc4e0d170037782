//! Shared test utilities for `tsunagi-core`.

use proptest::test_runner::Config as ProptestConfig;
use tsunagi_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::Graph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROPTEST_CASES` and
/// `TSUNAGI_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The four-vertex graph whose MST is `{1-2, 0-1, 1-3}` with weight 7.
///
/// Edge 2-3 weighs 5, above the vertex count, so counting sort over this
/// graph needs a radix of at least 5.
#[must_use]
pub(crate) fn worked_example() -> Graph {
    let mut graph = Graph::new(4).expect("four vertices are valid");
    for (weight, start, end) in [(2, 0, 1), (3, 0, 2), (1, 1, 2), (4, 1, 3), (5, 2, 3)] {
        graph
            .add_edge(weight, start, end)
            .expect("worked example edges are valid");
    }
    graph
}

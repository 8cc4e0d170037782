//! Edge sort benchmarks.
//!
//! Times each sorting strategy over the undirected edge list of a generated
//! graph. Every iteration sorts a fresh copy so no run sees presorted input.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use tsunagi_benches::{
    error::BenchSetupError,
    fixtures::GraphFixture,
    params::{GraphBenchParams, SortBenchParams, VERTEX_COUNTS},
};
use tsunagi_core::{SortAlgorithm, sort_edges};

const EDGE_PROBABILITY: f64 = 0.25;

fn edge_sort_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("edge_sort");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let graph = GraphBenchParams {
            vertex_count,
            edge_probability: EDGE_PROBABILITY,
        };
        let fixture = GraphFixture::generate(graph)?;

        for algorithm in SortAlgorithm::ALL {
            let params = SortBenchParams { algorithm, graph };
            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &fixture,
                |b, fixture| {
                    b.iter_batched_ref(
                        || fixture.edges().to_vec(),
                        |edges| sort_edges(edges, algorithm, fixture.radix()),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn edge_sort(c: &mut Criterion) {
    if let Err(err) = edge_sort_impl(c) {
        panic!("edge_sort benchmark setup failed: {err}");
    }
}

criterion_group!(benches, edge_sort);
criterion_main!(benches);

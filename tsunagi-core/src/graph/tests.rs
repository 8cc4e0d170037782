//! Unit tests for graph construction, representations, traversal and
//! generation.

use rstest::rstest;

use crate::{Edge, error::GraphError};

use super::{
    Graph, GraphConfig, Representation, RepresentationKind, depth_first, generate,
};

fn square_with_diagonal() -> Graph {
    let mut graph = Graph::new(4).expect("four vertices are valid");
    for (weight, start, end) in [(1, 0, 1), (2, 1, 2), (3, 2, 3), (4, 3, 0), (2, 0, 2)] {
        graph.add_edge(weight, start, end).expect("edge must be accepted");
    }
    graph
}

#[test]
fn rejects_empty_graph() {
    assert_eq!(
        Graph::new(0).expect_err("zero vertices must fail"),
        GraphError::TooFewVertices { got: 0, min: 1 }
    );
}

#[test]
fn rejects_vertex_counts_whose_matrix_overflows() {
    let vertex_count = usize::MAX / 2;
    assert_eq!(
        Graph::new(vertex_count).expect_err("matrix size must overflow"),
        GraphError::TooManyVertices { vertex_count }
    );
}

#[rstest]
#[case::start_out_of_range(1, 4, 0, GraphError::InvalidVertexId { vertex: 4, vertex_count: 4 })]
#[case::end_out_of_range(1, 0, 9, GraphError::InvalidVertexId { vertex: 9, vertex_count: 4 })]
#[case::self_loop(1, 2, 2, GraphError::SelfLoop { vertex: 2 })]
#[case::zero_weight(0, 0, 3, GraphError::ZeroWeight { start: 0, end: 3 })]
#[case::duplicate(5, 1, 0, GraphError::DuplicateEdge { start: 1, end: 0 })]
#[case::reserved_weight(
    u32::MAX,
    2,
    3,
    GraphError::WeightTooLarge { start: 2, end: 3, weight: u32::MAX, max: u32::MAX - 1 },
)]
fn add_edge_rejects_invalid_edges(
    #[case] weight: u32,
    #[case] start: usize,
    #[case] end: usize,
    #[case] expected: GraphError,
) {
    let mut graph = Graph::new(4).expect("four vertices are valid");
    graph.add_edge(1, 0, 1).expect("seed edge must be accepted");
    let err = graph
        .add_edge(weight, start, end)
        .expect_err("edge must be rejected");
    assert_eq!(err, expected);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn stores_edges_symmetrically() {
    let graph = square_with_diagonal();

    assert_eq!(graph.edges().len(), 10);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.edge_between(3, 0), Some(Edge::new(4, 3, 0)));
    assert_eq!(graph.edge_between(0, 3), Some(Edge::new(4, 0, 3)));
    for vertex in graph.vertices() {
        for &adjacent in vertex.adjacents() {
            let back = graph.vertex(adjacent).expect("adjacent vertex exists");
            assert!(back.adjacents().contains(&vertex.id()));
        }
    }
    assert_eq!(graph.vertices()[0].adjacents(), &[1, 3, 2]);
}

#[rstest]
#[case::matrix(RepresentationKind::Matrix)]
#[case::list(RepresentationKind::List)]
fn representations_agree_on_weights(#[case] kind: RepresentationKind) {
    let graph = square_with_diagonal();
    let check = |repr: &dyn Representation| {
        assert_eq!(repr.kind(), kind);
        assert_eq!(repr.vertex_count(), 4);
        assert_eq!(repr.weight_between(0, 2), Some(2));
        assert_eq!(repr.weight_between(2, 0), Some(2));
        assert_eq!(repr.weight_between(1, 3), None);
        assert_eq!(repr.neighbours(1), &[0, 2]);
        assert!(repr.neighbours(17).is_empty());
    };
    match kind {
        RepresentationKind::Matrix => check(&graph.matrix()),
        RepresentationKind::List => check(&graph.list()),
    }
}

#[test]
fn matrix_lists_upper_triangle_in_row_order() {
    let graph = square_with_diagonal();
    assert_eq!(
        graph.matrix().undirected_edges(),
        vec![
            Edge::new(1, 0, 1),
            Edge::new(2, 0, 2),
            Edge::new(4, 0, 3),
            Edge::new(2, 1, 2),
            Edge::new(3, 2, 3),
        ]
    );
}

#[test]
fn list_keeps_one_direction_in_insertion_order() {
    let graph = square_with_diagonal();
    assert_eq!(
        graph.list().undirected_edges(),
        vec![
            Edge::new(1, 0, 1),
            Edge::new(2, 1, 2),
            Edge::new(3, 2, 3),
            Edge::new(4, 3, 0),
            Edge::new(2, 0, 2),
        ]
    );
    assert_eq!(graph.list().row(2).len(), 3);
}

#[test]
fn depth_first_records_visit_order_and_predecessors() {
    let graph = square_with_diagonal();
    let traversal = depth_first(&graph, 0);

    assert_eq!(traversal.order(), &[0, 1, 2, 3]);
    assert_eq!(traversal.predecessors(), &[None, Some(0), Some(1), Some(2)]);
    assert!(traversal.is_spanning());
}

#[test]
fn depth_first_stops_at_component_boundary() {
    let mut graph = Graph::new(5).expect("five vertices are valid");
    graph.add_edge(1, 0, 1).expect("edge must be accepted");
    graph.add_edge(1, 3, 4).expect("edge must be accepted");

    let traversal = depth_first(&graph, 0);
    assert_eq!(traversal.reached_count(), 2);
    assert!(!traversal.is_spanning());
    assert_eq!(traversal.predecessors()[3], None);
    assert_eq!(depth_first(&graph, 99).reached_count(), 0);
}

#[rstest]
#[case::one_vertex(GraphConfig::new(1, 0, 0.5), GraphError::TooFewVertices { got: 1, min: 2 })]
#[case::negative_probability(GraphConfig::new(4, 0, -0.1), GraphError::InvalidProbability { got: -0.1 })]
#[case::probability_above_one(GraphConfig::new(4, 0, 1.5), GraphError::InvalidProbability { got: 1.5 })]
#[case::zero_attempts(GraphConfig::new(4, 0, 0.5).with_max_attempts(0), GraphError::InvalidMaxAttempts)]
fn config_validation_rejects_bad_parameters(
    #[case] config: GraphConfig,
    #[case] expected: GraphError,
) {
    assert_eq!(config.validate().expect_err("config must be rejected"), expected);
    assert_eq!(generate(&config).expect_err("generation must fail"), expected);
}

#[test]
fn config_validation_rejects_nan_probability() {
    let err = GraphConfig::new(4, 0, f64::NAN)
        .validate()
        .expect_err("NaN must be rejected");
    assert!(matches!(err, GraphError::InvalidProbability { got } if got.is_nan()));
}

#[rstest]
#[case(2, 1, 1.0)]
#[case(8, 42, 0.5)]
#[case(30, 7, 0.2)]
fn generated_graphs_are_connected_and_bounded(
    #[case] vertex_count: usize,
    #[case] seed: u64,
    #[case] edge_probability: f64,
) {
    let generated = generate(&GraphConfig::new(vertex_count, seed, edge_probability))
        .expect("generation must succeed");
    let graph = generated.graph();

    assert_eq!(graph.vertex_count(), vertex_count);
    assert!(generated.traversal().is_spanning());
    assert!(generated.attempts() >= 1);
    let max = u32::try_from(vertex_count).expect("small vertex count");
    assert!(
        graph
            .edges()
            .iter()
            .all(|edge| (1..=max).contains(&edge.weight()))
    );
}

#[test]
fn generation_is_deterministic_per_seed() {
    let config = GraphConfig::new(12, 2024, 0.4);
    let first = generate(&config).expect("generation must succeed");
    let second = generate(&config).expect("generation must succeed");
    assert_eq!(first.graph().edges(), second.graph().edges());
    assert_eq!(first.attempts(), second.attempts());
}

#[test]
fn generation_gives_up_when_graph_cannot_connect() {
    let config = GraphConfig::new(3, 1, 0.0).with_max_attempts(4);
    assert_eq!(
        generate(&config).expect_err("edgeless graphs are never connected"),
        GraphError::ConnectivityNotReached { attempts: 4 }
    );
}

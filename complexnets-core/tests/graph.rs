//! Integration tests for the graph store as seen by edge-list readers.

use complexnets_core::{
    BreadthFirst, Graph, GraphError, GraphErrorCode, VertexId, retain_largest_component,
};
use rstest::{fixture, rstest};

fn id(raw: u64) -> VertexId {
    VertexId::new(raw).expect("test ids are positive")
}

#[fixture]
fn triangle_with_tail() -> Graph {
    Graph::from_edges([(id(1), id(2)), (id(2), id(3)), (id(3), id(1)), (id(3), id(4))])
        .expect("edge list is valid")
}

#[rstest]
fn reader_contract_builds_vertices_on_demand(triangle_with_tail: Graph) {
    assert_eq!(triangle_with_tail.vertices_count(), 4);
    assert_eq!(triangle_with_tail.edge_count(), 4);
    assert_eq!(triangle_with_tail.neighbours(id(3)), [id(1), id(2), id(4)]);
}

#[rstest]
#[case::duplicate(vec![(1, 2), (2, 1)], GraphErrorCode::DuplicateEdge)]
#[case::self_loop(vec![(1, 2), (3, 3)], GraphErrorCode::SelfLoop)]
fn reader_contract_rejects_malformed_lists(
    #[case] pairs: Vec<(u64, u64)>,
    #[case] expected: GraphErrorCode,
) {
    let err = Graph::from_edges(pairs.into_iter().map(|(l, r)| (id(l), id(r))))
        .expect_err("edge list must be rejected");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn duplicate_edge_names_both_endpoints(mut triangle_with_tail: Graph) {
    let err = triangle_with_tail
        .add_edge(id(4), id(3))
        .expect_err("edge already exists");
    assert_eq!(
        err,
        GraphError::DuplicateEdge {
            left: id(4),
            right: id(3),
        }
    );
    assert_eq!(err.code().as_str(), "GRAPH_DUPLICATE_EDGE");
}

#[rstest]
fn traversal_reports_layers(triangle_with_tail: Graph) {
    let layers: Vec<(u64, usize)> = BreadthFirst::new(&triangle_with_tail, id(4))
        .map(|visit| (visit.vertex.get(), visit.hops))
        .collect();
    assert_eq!(layers, [(4, 0), (3, 1), (1, 2), (2, 2)]);
}

#[rstest]
fn pruning_detached_vertices_keeps_the_core(mut triangle_with_tail: Graph) {
    triangle_with_tail.add_vertex(id(10)).expect("fresh vertex");
    let summary = retain_largest_component(&mut triangle_with_tail).expect("pruning succeeds");
    assert_eq!(summary.components, 2);
    assert_eq!(summary.removed, 1);
    assert!(!triangle_with_tail.contains(id(10)));
}

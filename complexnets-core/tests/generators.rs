//! Integration tests for the public generator surface and its tracing.

use complexnets_core::{
    BarabasiAlbertParams, DegreeSequence, ErdosRenyiParams, GeneratorError, GeneratorErrorCode,
    GraphGenerator, HotExtendedParams, connected_components, hops,
};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use complexnets_test_support::tracing::RecordingLayer;

#[rstest]
#[case::negative(-0.1)]
#[case::above_one(1.5)]
#[case::nan(f64::NAN)]
fn erdos_renyi_rejects_out_of_range_probability(#[case] probability: f64) {
    let err = ErdosRenyiParams::new(10, probability).expect_err("probability must be rejected");
    assert_eq!(err.code(), GeneratorErrorCode::InvalidParameters);
}

#[rstest]
#[case::no_links(3, 0, 5)]
#[case::more_links_than_seed(2, 3, 5)]
#[case::fewer_vertices_than_seed(4, 2, 3)]
fn barabasi_albert_rejects_unsatisfiable_parameters(
    #[case] seed_vertices: usize,
    #[case] edges_per_vertex: usize,
    #[case] vertices: usize,
) {
    let err = BarabasiAlbertParams::new(seed_vertices, edges_per_vertex, vertices)
        .expect_err("parameters must be rejected");
    assert!(matches!(err, GeneratorError::InvalidParameters { .. }));
    assert_eq!(err.code().as_str(), "GENERATOR_INVALID_PARAMETERS");
}

#[rstest]
fn erdos_renyi_span_records_parameters() {
    let params = ErdosRenyiParams::new(12, 0.25).expect("valid parameters");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::seeded(21).erdos_renyi(&params)
    })
    .expect("generation succeeds");

    let span = layer
        .span_named("generator.erdos_renyi")
        .expect("generator.erdos_renyi span must exist");
    assert_eq!(span.fields.get("vertices"), Some(&"12".to_owned()));
    assert_eq!(span.fields.get("probability"), Some(&"0.25".to_owned()));
    let pruning = layer
        .span_named("conexity.retain_largest")
        .expect("pruning span must exist");
    assert_eq!(pruning.fields.get("vertices"), Some(&"12".to_owned()));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::INFO
            && event.fields.get("vertices") == Some(&graph.vertices_count().to_string())
            && event.fields.get("edges") == Some(&graph.edge_count().to_string())
    }));
}

#[rstest]
fn degree_sequence_warns_about_unrealised_degree() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::seeded(3).degree_sequence(&DegreeSequence::new(vec![4, 1, 1]))
    })
    .expect("generation succeeds");
    assert_eq!(graph.edge_count(), 2);

    let warnings = layer.events_at(Level::WARN);
    assert_eq!(warnings.len(), 1, "shortfall must be reported once");
    assert_eq!(warnings[0].fields.get("leftover"), Some(&"2".to_owned()));
}

#[rstest]
fn hot_extended_builds_a_single_component() {
    let params = HotExtendedParams::new(2, 60, 0.8, 1, 3.0).expect("valid parameters");
    let graph = GraphGenerator::seeded(13)
        .hot_extended(&params)
        .expect("generation succeeds");

    assert_eq!(graph.vertices_count(), 60);
    assert_eq!(connected_components(&graph).len(), 1);
    let first = graph.vertex_ids().next().expect("graph is not empty");
    for vertex in graph.vertex_ids() {
        assert!(hops(&graph, first, vertex).is_some());
    }
}

#[rstest]
fn hot_extended_redraws_the_root_from_link_endpoints() {
    let params = HotExtendedParams::new(1, 40, 0.5, 0, 0.0).expect("valid parameters");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::seeded(17).hot_extended(&params)
    })
    .expect("generation succeeds");

    let steps: Vec<(u64, u64)> = layer
        .events_at(Level::TRACE)
        .iter()
        .filter_map(|event| {
            let step = event.fields.get("step")?.parse().ok()?;
            let root = event.fields.get("root")?.parse().ok()?;
            Some((step, root))
        })
        .collect();
    assert_eq!(steps.len(), 39, "one record per newcomer");
    for &(step, root) in &steps {
        assert!(
            (1..=step).contains(&root),
            "root {root} must already be linked at step {step}"
        );
    }
    assert!(
        steps.iter().any(|&(_, root)| root != 1),
        "root never moved away from vertex 1"
    );
}

#[rstest]
fn barabasi_albert_favours_early_vertices() {
    let params = BarabasiAlbertParams::new(3, 2, 400).expect("valid parameters");
    let graph = GraphGenerator::seeded(31)
        .barabasi_albert(&params)
        .expect("generation succeeds");

    let degrees: Vec<usize> = graph.vertices().map(|vertex| vertex.degree()).collect();
    let head: usize = degrees[..10].iter().sum();
    let tail: usize = degrees[degrees.len() - 10..].iter().sum();
    assert!(head > tail, "expected early vertices to accumulate degree: {head} <= {tail}");
}

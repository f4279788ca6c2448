//! Generator benchmarks.
//!
//! HOT-Extended dominates: every step runs a breadth-first search per
//! reinforcement candidate, so it is measured at smaller sizes than the
//! sampling-based models.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "Edge probability is derived from the target mean degree"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use complexnets_benches::{
    error::BenchSetupError,
    params::{GraphBenchParams, GrowthBenchParams, HotExtendedBenchParams},
    workload::uniform_degrees,
};
use complexnets_core::{
    BarabasiAlbertParams, ErdosRenyiParams, GraphGenerator, HotExtendedParams,
};

/// Seed used for every generator run in this benchmark.
const SEED: u64 = 42;

/// Vertex counts for the sampling-based generators.
const VERTEX_COUNTS: &[usize] = &[250, 1_000, 4_000];

/// Vertex counts for HOT-Extended.
const HOT_VERTEX_COUNTS: &[usize] = &[50, 100, 200];

fn erdos_renyi_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("erdos_renyi");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        // Mean degree of roughly eight keeps the giant component dominant.
        let probability = 8.0 / f64::from(u32::try_from(vertex_count).unwrap_or(u32::MAX));
        let params = ErdosRenyiParams::new(vertex_count, probability)?;
        group.bench_with_input(
            BenchmarkId::from_parameter(GraphBenchParams { vertex_count }),
            &params,
            |b, params| {
                b.iter(|| GraphGenerator::seeded(SEED).erdos_renyi(params));
            },
        );
    }

    group.finish();
    Ok(())
}

fn barabasi_albert_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("barabasi_albert");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        for edges_per_vertex in [2, 4] {
            let params =
                BarabasiAlbertParams::new(edges_per_vertex + 1, edges_per_vertex, vertex_count)?;
            let label = GrowthBenchParams {
                vertex_count,
                edges_per_vertex,
            };
            group.bench_with_input(BenchmarkId::from_parameter(label), &params, |b, params| {
                b.iter(|| GraphGenerator::seeded(SEED).barabasi_albert(params));
            });
        }
    }

    group.finish();
    Ok(())
}

fn hot_extended_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("hot_extended");
    group.sample_size(10);

    for &vertex_count in HOT_VERTEX_COUNTS {
        for reinforcement_edges in [0, 2] {
            let params = HotExtendedParams::new(2, vertex_count, 0.5, reinforcement_edges, 2.0)?;
            let label = HotExtendedBenchParams {
                vertex_count,
                reinforcement_edges,
            };
            group.bench_with_input(BenchmarkId::from_parameter(label), &params, |b, params| {
                b.iter(|| GraphGenerator::seeded(SEED).hot_extended(params));
            });
        }
    }

    group.finish();
    Ok(())
}

fn degree_sequence_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("degree_sequence");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let sequence = uniform_degrees(vertex_count, 6, SEED)?;
        group.bench_with_input(
            BenchmarkId::from_parameter(GraphBenchParams { vertex_count }),
            &sequence,
            |b, sequence| {
                b.iter(|| GraphGenerator::seeded(SEED).degree_sequence(sequence));
            },
        );
    }

    group.finish();
    Ok(())
}

fn generators(c: &mut Criterion) {
    let runs: [(&str, fn(&mut Criterion) -> Result<(), BenchSetupError>); 4] = [
        ("erdos_renyi", erdos_renyi_impl),
        ("barabasi_albert", barabasi_albert_impl),
        ("hot_extended", hot_extended_impl),
        ("degree_sequence", degree_sequence_impl),
    ];
    for (name, run) in runs {
        if let Err(err) = run(c) {
            panic!("{name} benchmark setup failed: {err}");
        }
    }
}

criterion_group!(benches, generators);
criterion_main!(benches);

//! Seeded workloads shared by the benchmarks.

use std::num::NonZeroUsize;

use complexnets_core::{
    BarabasiAlbertParams, ComponentSummary, DegreeSequence, Graph, GraphGenerator,
    retain_largest_component,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Builds a connected scale-free graph to run traversals over.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `edges_per_vertex` is zero and
/// [`BenchSetupError::Generator`] when the generator rejects the sizes.
///
/// # Examples
/// ```
/// use complexnets_benches::workload::scale_free_graph;
///
/// let graph = scale_free_graph(50, 2, 7)?;
/// assert_eq!(graph.vertices_count(), 50);
/// # Ok::<(), complexnets_benches::error::BenchSetupError>(())
/// ```
pub fn scale_free_graph(
    vertex_count: usize,
    edges_per_vertex: usize,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    let edges_per_vertex =
        NonZeroUsize::new(edges_per_vertex).ok_or(BenchSetupError::ZeroValue {
            context: "edges_per_vertex",
        })?;
    let seed_vertices = edges_per_vertex.get().saturating_add(1);
    let params = BarabasiAlbertParams::new(
        seed_vertices,
        edges_per_vertex.get(),
        vertex_count.max(seed_vertices),
    )?;
    Ok(GraphGenerator::seeded(seed).barabasi_albert(&params)?)
}

/// Prunes a copy of `graph` to its largest component, leaving `graph` intact.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when pruning breaks a graph invariant.
pub fn largest_component(graph: &Graph) -> Result<(Graph, ComponentSummary), BenchSetupError> {
    let mut pruned = graph.clone();
    let summary = retain_largest_component(&mut pruned)?;
    Ok((pruned, summary))
}

/// Draws `vertex_count` target degrees uniformly from `1..=max_degree`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `max_degree` is zero.
pub fn uniform_degrees(
    vertex_count: usize,
    max_degree: usize,
    seed: u64,
) -> Result<DegreeSequence, BenchSetupError> {
    let max_degree = NonZeroUsize::new(max_degree).ok_or(BenchSetupError::ZeroValue {
        context: "max_degree",
    })?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let degrees = (0..vertex_count)
        .map(|_| rng.gen_range(1..=max_degree.get()))
        .collect();
    Ok(DegreeSequence::new(degrees))
}

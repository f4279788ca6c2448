//! Erdős–Rényi `G(n, p)` generation followed by largest-component pruning.

use rand::{Rng, distributions::Standard};
use tracing::{info, instrument};

use crate::{
    connectivity::retain_largest_component,
    error::Result,
    graph::{Graph, VertexId},
};

use super::params::ErdosRenyiParams;

/// Generates a `G(n, p)` graph and keeps only its largest connected
/// component.
///
/// Vertices `1..=n` are created, then one uniform draw in `[0, 1)` is taken
/// per unordered pair `(i, j)`, `i < j`, in lexicographic order; the edge is
/// added when the draw is at most `p`. The result is simple, undirected and
/// connected, with at most `n` vertices.
///
/// # Errors
/// Returns [`crate::GeneratorError::Graph`] only if a graph invariant is
/// broken, which indicates a bug.
///
/// # Examples
/// ```
/// use complexnets_core::{ErdosRenyiParams, generate_erdos_renyi};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let params = ErdosRenyiParams::new(5, 1.0)?;
/// let graph = generate_erdos_renyi(&params, &mut rng)?;
/// assert_eq!(graph.vertices_count(), 5);
/// assert_eq!(graph.edge_count(), 10);
/// # Ok::<(), complexnets_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.erdos_renyi",
    err,
    skip(params, rng),
    fields(vertices = params.vertices(), probability = params.probability()),
)]
pub fn generate_erdos_renyi<R: Rng + ?Sized>(
    params: &ErdosRenyiParams,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = Graph::with_vertices(VertexId::sequence(params.vertices()))?;
    let ids: Vec<VertexId> = graph.vertex_ids().collect();

    for (offset, &source) in ids.iter().enumerate() {
        for &target in ids.iter().skip(offset + 1) {
            let draw: f64 = rng.sample(Standard);
            if draw <= params.probability() {
                graph.add_edge(source, target)?;
            }
        }
    }

    let summary = retain_largest_component(&mut graph)?;
    info!(
        vertices = graph.vertices_count(),
        edges = graph.edge_count(),
        components = summary.components,
        pruned = summary.removed,
        "erdos-renyi graph generated"
    );
    Ok(graph)
}

//! Barabási–Albert preferential attachment.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::{
    error::{GeneratorError, Result},
    graph::{Graph, VertexId},
};

use super::{params::BarabasiAlbertParams, pool::AttachmentPool};

/// Grows a scale-free graph by preferential attachment.
///
/// A complete graph on vertices `1..=m0` seeds a pool holding `m0` copies of
/// each seed id. Each newcomer `i = m0+1..=n` then draws ids uniformly from
/// the pool, discarding itself and existing neighbours, until it has linked
/// to `m` distinct vertices; every link appends both endpoints to the pool.
/// The result is connected and has exactly `n` vertices.
///
/// # Errors
/// Returns [`GeneratorError::RetryBudgetExhausted`] once a newcomer has seen
/// [`BarabasiAlbertParams::retry_budget`] consecutive rejected draws.
///
/// # Examples
/// ```
/// use complexnets_core::{BarabasiAlbertParams, generate_barabasi_albert};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let params = BarabasiAlbertParams::new(3, 1, 5)?;
/// let graph = generate_barabasi_albert(&params, &mut rng)?;
/// assert_eq!(graph.vertices_count(), 5);
/// assert_eq!(graph.edge_count(), 5);
/// # Ok::<(), complexnets_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.barabasi_albert",
    err,
    skip(params, rng),
    fields(
        seed_vertices = params.seed_vertices(),
        edges_per_vertex = params.edges_per_vertex(),
        vertices = params.vertices(),
    ),
)]
pub fn generate_barabasi_albert<R: Rng + ?Sized>(
    params: &BarabasiAlbertParams,
    rng: &mut R,
) -> Result<Graph> {
    let seed_vertices = params.seed_vertices();
    let mut graph = complete_seed(seed_vertices)?;

    let growth = params.vertices() - seed_vertices;
    let mut pool = AttachmentPool::with_capacity(
        seed_vertices * seed_vertices + 2 * growth * params.edges_per_vertex(),
    );
    for seed in VertexId::sequence(seed_vertices) {
        pool.push_copies(seed, seed_vertices);
    }
    debug!(pool = pool.len(), "seed graph complete");

    for newcomer in VertexId::sequence(params.vertices()).skip(seed_vertices) {
        graph.add_vertex(newcomer)?;
        attach(&mut graph, &mut pool, newcomer, params, rng)?;
    }

    info!(
        vertices = graph.vertices_count(),
        edges = graph.edge_count(),
        "barabasi-albert graph generated"
    );
    Ok(graph)
}

fn complete_seed(seed_vertices: usize) -> Result<Graph> {
    let mut graph = Graph::with_vertices(VertexId::sequence(seed_vertices))?;
    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    for (offset, &source) in ids.iter().enumerate() {
        for &target in ids.iter().skip(offset + 1) {
            graph.add_edge(source, target)?;
        }
    }
    Ok(graph)
}

fn attach<R: Rng + ?Sized>(
    graph: &mut Graph,
    pool: &mut AttachmentPool,
    newcomer: VertexId,
    params: &BarabasiAlbertParams,
    rng: &mut R,
) -> Result<()> {
    let mut linked = 0;
    let mut draws = 0;
    let mut rejected = 0;
    while linked < params.edges_per_vertex() {
        if rejected >= params.retry_budget() {
            return Err(GeneratorError::RetryBudgetExhausted {
                vertex: newcomer,
                attempts: draws,
            });
        }
        let Some(candidate) = pool.sample(rng) else {
            return Err(GeneratorError::RetryBudgetExhausted {
                vertex: newcomer,
                attempts: draws,
            });
        };
        draws += 1;
        if candidate == newcomer || graph.has_edge(candidate, newcomer) {
            rejected += 1;
            continue;
        }
        graph.add_edge(candidate, newcomer)?;
        pool.record_link(candidate, newcomer);
        linked += 1;
        rejected = 0;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn seed_is_a_complete_graph() {
        let graph = complete_seed(4).expect("seed builds");
        assert_eq!(graph.vertices_count(), 4);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn exhausted_budget_reports_the_newcomer() {
        let mut graph = complete_seed(2).expect("seed builds");
        let newcomer = VertexId::new(3).expect("positive");
        graph.add_vertex(newcomer).expect("fresh vertex");
        let mut pool = AttachmentPool::default();
        pool.push_copies(VertexId::new(1).expect("positive"), 4);
        let params = BarabasiAlbertParams::new(2, 2, 3)
            .expect("valid parameters")
            .with_retry_budget(16);
        let mut rng = SmallRng::seed_from_u64(5);

        let err = attach(&mut graph, &mut pool, newcomer, &params, &mut rng)
            .expect_err("vertex 2 is never drawn, so the second link must fail");
        assert_eq!(
            err,
            GeneratorError::RetryBudgetExhausted {
                vertex: newcomer,
                attempts: 17,
            }
        );
        assert_eq!(graph.degree(newcomer), Some(1));
    }
}

//! Degree-sequence realisation in the Molloy–Reed style.

use std::{cmp::Reverse, collections::BTreeMap};

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::Result,
    graph::{Graph, VertexId},
};

use super::params::DegreeSequence;

/// Book-keeping for one realisation: remaining free degree per vertex and the
/// inserted vertices still accepting links.
#[derive(Debug)]
struct Realisation {
    free: BTreeMap<VertexId, usize>,
    eligible: Vec<VertexId>,
}

impl Realisation {
    fn new(sequence: &DegreeSequence) -> Self {
        Self {
            free: VertexId::sequence(sequence.len())
                .zip(sequence.degrees().iter().copied())
                .collect(),
            eligible: Vec::new(),
        }
    }

    fn free_degree(&self, vertex: VertexId) -> usize {
        self.free.get(&vertex).copied().unwrap_or(0)
    }

    fn link(&mut self, graph: &mut Graph, left: VertexId, right: VertexId) -> Result<()> {
        graph.add_edge(left, right)?;
        for endpoint in [left, right] {
            if let Some(free) = self.free.get_mut(&endpoint) {
                *free = free.saturating_sub(1);
            }
        }
        Ok(())
    }

    fn leftover(&self) -> usize {
        self.free.values().sum()
    }
}

/// Builds a simple graph whose degrees approach `sequence`.
///
/// Vertex ids are `1..=len`, with vertex `k` targeting `degrees()[k - 1]`.
///
/// Phase 1 inserts vertices by descending target degree (ties shuffled). Each
/// vertex with a positive target links to one uniformly drawn inserted vertex
/// that still has free degree; when none exists it is added unlinked.
/// Phase 2 walks the vertices left with free degree and pairs each with
/// uniformly drawn non-adjacent partners until it is saturated or no partner
/// remains. No vertex ever exceeds its target; shortfalls are logged.
///
/// # Errors
/// Returns [`crate::GeneratorError::Graph`] only if a graph invariant is
/// broken, which indicates a bug.
///
/// # Examples
/// ```
/// use complexnets_core::{DegreeSequence, generate_degree_sequence};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(9);
/// let graph = generate_degree_sequence(&DegreeSequence::new(vec![2, 2, 2]), &mut rng)?;
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), complexnets_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.degree_sequence",
    err,
    skip(sequence, rng),
    fields(vertices = sequence.len(), total_degree = sequence.total()),
)]
pub fn generate_degree_sequence<R: Rng + ?Sized>(
    sequence: &DegreeSequence,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = Graph::undirected();
    let mut state = Realisation::new(sequence);

    grow(&mut graph, &mut state, rng)?;
    debug!(
        edges = graph.edge_count(),
        pending = state.eligible.len(),
        "growth phase done"
    );
    saturate(&mut graph, &mut state, rng)?;

    let leftover = state.leftover();
    if leftover > 0 {
        warn!(leftover, "degree sequence only partially realised");
    }
    info!(
        vertices = graph.vertices_count(),
        edges = graph.edge_count(),
        "degree-sequence graph generated"
    );
    Ok(graph)
}

fn grow<R: Rng + ?Sized>(graph: &mut Graph, state: &mut Realisation, rng: &mut R) -> Result<()> {
    let mut order: Vec<VertexId> = state.free.keys().copied().collect();
    order.shuffle(rng);
    order.sort_by_key(|&vertex| Reverse(state.free_degree(vertex)));

    for vertex in order {
        graph.add_vertex(vertex)?;
        if state.free_degree(vertex) == 0 {
            continue;
        }
        if !state.eligible.is_empty() {
            let slot = rng.gen_range(0..state.eligible.len());
            if let Some(&partner) = state.eligible.get(slot) {
                state.link(graph, vertex, partner)?;
                if state.free_degree(partner) == 0 {
                    state.eligible.swap_remove(slot);
                }
            }
        }
        if state.free_degree(vertex) > 0 {
            state.eligible.push(vertex);
        }
    }
    Ok(())
}

fn saturate<R: Rng + ?Sized>(
    graph: &mut Graph,
    state: &mut Realisation,
    rng: &mut R,
) -> Result<()> {
    let pending = std::mem::take(&mut state.eligible);
    for &vertex in &pending {
        while state.free_degree(vertex) > 0 {
            let partners: Vec<VertexId> = pending
                .iter()
                .copied()
                .filter(|&other| {
                    other != vertex
                        && state.free_degree(other) > 0
                        && !graph.has_edge(vertex, other)
                })
                .collect();
            let Some(&partner) = partners.choose(rng) else {
                break;
            };
            state.link(graph, vertex, partner)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::test_utils::assert_simple_graph;

    fn realise(degrees: Vec<usize>, seed: u64) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_degree_sequence(&DegreeSequence::new(degrees), &mut rng)
            .expect("realisation succeeds")
    }

    fn id(raw: u64) -> VertexId {
        VertexId::new(raw).expect("test ids are positive")
    }

    #[rstest]
    #[case::empty(vec![], 0, 0)]
    #[case::isolated(vec![0, 0], 2, 0)]
    #[case::pair(vec![1, 1], 2, 1)]
    #[case::triangle(vec![2, 2, 2], 3, 3)]
    #[case::star(vec![3, 1, 1, 1], 4, 3)]
    fn realises_graphical_sequences(
        #[case] degrees: Vec<usize>,
        #[case] vertices: usize,
        #[case] edges: usize,
    ) {
        for seed in 0..8 {
            let graph = realise(degrees.clone(), seed);
            assert_simple_graph(&graph);
            assert_eq!(graph.vertices_count(), vertices);
            assert_eq!(graph.edge_count(), edges);
        }
    }

    #[test]
    fn ids_follow_input_order() {
        let graph = realise(vec![1, 3, 1, 1], 4);
        assert_eq!(graph.degree(id(2)), Some(3));
        for leaf in [1, 3, 4] {
            assert_eq!(graph.neighbours(id(leaf)), vec![id(2)]);
        }
    }

    #[test]
    fn unrealisable_targets_fall_short() {
        let graph = realise(vec![3, 1], 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(id(1)), Some(1));
        assert_eq!(graph.degree(id(2)), Some(1));
    }

    #[test]
    fn linking_consumes_free_degree_on_both_ends() {
        let mut state = Realisation::new(&DegreeSequence::new(vec![2, 1, 1]));
        let mut graph = Graph::with_vertices(VertexId::sequence(3)).expect("ids are unique");

        state.link(&mut graph, id(1), id(2)).expect("fresh edge");

        assert_eq!(state.free_degree(id(1)), 1);
        assert_eq!(state.free_degree(id(2)), 0);
        assert_eq!(state.free_degree(id(3)), 1);
        assert_eq!(state.free_degree(id(9)), 0);
        assert_eq!(state.leftover(), 2);
        assert!(graph.has_edge(id(2), id(1)));
    }

    #[test]
    fn duplicate_links_leave_free_degree_untouched() {
        let mut state = Realisation::new(&DegreeSequence::new(vec![2, 2]));
        let mut graph = Graph::with_vertices(VertexId::sequence(2)).expect("ids are unique");
        state.link(&mut graph, id(1), id(2)).expect("fresh edge");

        assert!(state.link(&mut graph, id(2), id(1)).is_err());
        assert_eq!(state.leftover(), 2);
    }

    #[test]
    fn zero_degree_vertices_stay_isolated() {
        let graph = realise(vec![2, 0, 1, 1], 6);
        assert_eq!(graph.degree(id(2)), Some(0));
        assert_eq!(graph.degree(id(1)), Some(2));
    }
}

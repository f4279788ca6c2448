//! HOT-Extended: geometric attachment steered by hop distance to an evolving
//! root, followed by root reinforcement.

use std::collections::BTreeMap;

use rand::{Rng, distributions::Standard};
use tracing::{debug, info, instrument, trace};

use crate::{
    error::Result,
    graph::{Graph, VertexId},
    traversal::{hop_distances, hops},
};

use super::{params::HotExtendedParams, pool::AttachmentPool};

/// Point in the unit square, held alongside the graph for one run.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Position {
    x: f64,
    y: f64,
}

impl Position {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.sample(Standard),
            y: rng.sample(Standard),
        }
    }

    fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Positions indexed by insertion order; vertex `k` sits at index `k - 1`.
#[derive(Debug, Default)]
struct Layout {
    positions: Vec<Position>,
}

impl Layout {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
        }
    }

    fn place(&mut self, position: Position) {
        self.positions.push(position);
    }

    fn distance(&self, left: VertexId, right: VertexId) -> f64 {
        match (self.get(left), self.get(right)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => f64::INFINITY,
        }
    }

    fn get(&self, id: VertexId) -> Option<Position> {
        let index = usize::try_from(id.get() - 1).ok()?;
        self.positions.get(index).copied()
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    vertex: VertexId,
    weight: f64,
}

fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|left, right| {
        left.weight
            .total_cmp(&right.weight)
            .then_with(|| left.vertex.cmp(&right.vertex))
    });
}

/// Grows a hierarchically organised graph.
///
/// Vertex 1 is placed uniformly in the unit square and becomes the root.
/// Each newcomer `i = 2..=n` is placed, then:
///
/// 1. links to the `m` existing vertices minimising
///    `dist(j, i) + ξ·hops(j, root)` (unreachable vertices weigh `+∞`);
/// 2. the root links to the `q` vertices minimising
///    `dist(j, root) + (r / i)·(with − without)`, where `with` probes the hop
///    distance after temporarily adding `(j, root)`. The root itself and its
///    existing neighbours still take one of the `q` slots but gain no edge;
/// 3. the root is redrawn from the endpoints of every link made so far.
///
/// Ties in either ranking fall back to ascending id.
///
/// # Errors
/// Returns [`crate::GeneratorError::Graph`] only if a graph invariant is
/// broken, which indicates a bug.
///
/// # Examples
/// ```
/// use complexnets_core::{HotExtendedParams, generate_hot_extended};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(5);
/// let params = HotExtendedParams::new(1, 20, 0.5, 0, 1.0)?;
/// let graph = generate_hot_extended(&params, &mut rng)?;
/// assert_eq!(graph.vertices_count(), 20);
/// assert_eq!(graph.edge_count(), 19);
/// # Ok::<(), complexnets_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.hot_extended",
    err,
    skip(params, rng),
    fields(
        edges_per_vertex = params.edges_per_vertex(),
        vertices = params.vertices(),
        xi = params.xi(),
        reinforcement_edges = params.reinforcement_edges(),
        r = params.r(),
    ),
)]
pub fn generate_hot_extended<R: Rng + ?Sized>(
    params: &HotExtendedParams,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = Graph::undirected();
    let mut layout = Layout::with_capacity(params.vertices());
    let mut pool = AttachmentPool::default();
    let mut ids = VertexId::sequence(params.vertices());

    let Some(mut root) = ids.next() else {
        return Ok(graph);
    };
    graph.add_vertex(root)?;
    layout.place(Position::sample(rng));

    for (step, newcomer) in (2_usize..).zip(ids) {
        graph.add_vertex(newcomer)?;
        layout.place(Position::sample(rng));

        attach(&mut graph, &layout, &mut pool, newcomer, root, params)?;
        reinforce(&mut graph, &layout, &mut pool, root, step, params)?;

        if let Some(next) = pool.sample(rng) {
            root = next;
        }
        trace!(step, root = %root, edges = graph.edge_count(), "step complete");
    }

    info!(
        vertices = graph.vertices_count(),
        edges = graph.edge_count(),
        root = %root,
        "hot-extended graph generated"
    );
    Ok(graph)
}

fn attach(
    graph: &mut Graph,
    layout: &Layout,
    pool: &mut AttachmentPool,
    newcomer: VertexId,
    root: VertexId,
    params: &HotExtendedParams,
) -> Result<()> {
    let distances = hop_distances(graph, root);
    let mut candidates: Vec<Candidate> = graph
        .vertex_ids()
        .filter(|&vertex| vertex != newcomer)
        .map(|vertex| Candidate {
            vertex,
            weight: layout.distance(vertex, newcomer)
                + hop_penalty(params.xi(), distances.get(&vertex)),
        })
        .collect();
    rank(&mut candidates);

    let mut linked = 0;
    for candidate in candidates.iter().take(params.edges_per_vertex()) {
        if graph.has_edge(candidate.vertex, newcomer) {
            continue;
        }
        graph.add_edge(candidate.vertex, newcomer)?;
        pool.record_link(candidate.vertex, newcomer);
        linked += 1;
    }
    debug!(newcomer = %newcomer, linked, "attachment phase done");
    Ok(())
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "hop counts are far below 2^52 and enter a floating-point weight"
)]
fn hop_penalty(xi: f64, hops: Option<&usize>) -> f64 {
    if xi == 0.0 {
        return 0.0;
    }
    match hops {
        Some(&hops) => xi * hops as f64,
        None => f64::INFINITY,
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the step index scales the hop gain as a float"
)]
fn reinforce(
    graph: &mut Graph,
    layout: &Layout,
    pool: &mut AttachmentPool,
    root: VertexId,
    step: usize,
    params: &HotExtendedParams,
) -> Result<()> {
    if params.reinforcement_edges() == 0 {
        return Ok(());
    }
    let scale = params.r() / step as f64;
    let without = hop_distances(graph, root);
    let ids: Vec<VertexId> = graph.vertex_ids().collect();

    let mut candidates = Vec::with_capacity(ids.len());
    for vertex in ids {
        let gain = hop_gain(graph, root, vertex, &without, params.r())?;
        candidates.push(Candidate {
            vertex,
            weight: layout.distance(vertex, root) + scale_gain(scale, gain),
        });
    }
    rank(&mut candidates);

    let mut linked = 0;
    for candidate in candidates.iter().take(params.reinforcement_edges()) {
        if candidate.vertex == root || graph.has_edge(candidate.vertex, root) {
            continue;
        }
        graph.add_edge(root, candidate.vertex)?;
        pool.record_link(root, candidate.vertex);
        linked += 1;
    }
    debug!(root = %root, linked, "reinforcement phase done");
    Ok(())
}

/// Change in hop distance to `root` that a direct `(vertex, root)` edge would
/// bring. Vertices that already reach the root in one hop (or are the root)
/// are not probed.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "hop counts are far below 2^52; the gain may be negative"
)]
fn hop_gain(
    graph: &mut Graph,
    root: VertexId,
    vertex: VertexId,
    without: &BTreeMap<VertexId, usize>,
    r: f64,
) -> Result<f64> {
    if vertex == root || graph.has_edge(vertex, root) {
        return Ok(0.0);
    }
    graph.add_edge(vertex, root)?;
    let with = hops(graph, vertex, root);
    graph.remove_edge(vertex, root)?;

    Ok(match (with, without.get(&vertex)) {
        (Some(with), Some(&without)) => with as f64 - without as f64,
        (Some(_), None) if r == 0.0 => 0.0,
        (Some(_), None) => f64::NEG_INFINITY,
        (None, _) => 0.0,
    })
}

fn scale_gain(scale: f64, gain: f64) -> f64 {
    if gain == 0.0 { 0.0 } else { scale * gain }
}

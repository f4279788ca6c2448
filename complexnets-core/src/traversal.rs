//! Breadth-first traversal and hop-distance queries.
//!
//! Every query walks the graph as it is at call time, so callers that add or
//! remove edges between queries always observe the current hop distances.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::{Graph, VertexId, VertexSlot};

/// A vertex reached by a breadth-first walk and its hop distance from the
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    /// Vertex that was reached.
    pub vertex: VertexId,
    /// Number of edges on a shortest path from the source.
    pub hops: usize,
}

/// Breadth-first walk over a [`Graph`] from a single source.
///
/// Vertices are yielded in FIFO discovery order; the neighbours of each
/// dequeued vertex are discovered in ascending id order. Every reachable
/// vertex is yielded exactly once. A source that is not in the graph yields
/// nothing.
///
/// # Examples
/// ```
/// use complexnets_core::{BreadthFirst, Graph, VertexId};
///
/// let id = |raw| VertexId::new(raw).expect("positive");
/// let graph = Graph::from_edges([(id(1), id(3)), (id(1), id(2)), (id(3), id(4))])?;
/// let order: Vec<(u64, usize)> = BreadthFirst::new(&graph, id(1))
///     .map(|visit| (visit.vertex.get(), visit.hops))
///     .collect();
/// assert_eq!(order, [(1, 0), (2, 1), (3, 1), (4, 2)]);
/// # Ok::<(), complexnets_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    queue: VecDeque<(VertexSlot, usize)>,
}

impl<'g> BreadthFirst<'g> {
    /// Starts a walk at `source`.
    #[must_use]
    pub fn new(graph: &'g Graph, source: VertexId) -> Self {
        let visited = vec![false; graph.slot_capacity()];
        match graph.slot(source) {
            Some(slot) => Self::resume(graph, slot, visited),
            None => Self {
                graph,
                visited,
                queue: VecDeque::new(),
            },
        }
    }

    /// Starts a walk at `source` reusing a visited map from an earlier walk,
    /// so vertices already claimed by that walk are not yielded again.
    pub(crate) fn resume(graph: &'g Graph, source: VertexSlot, visited: Vec<bool>) -> Self {
        let mut walk = Self {
            graph,
            visited,
            queue: VecDeque::new(),
        };
        walk.visit(source, 0);
        walk
    }

    pub(crate) fn into_visited(self) -> Vec<bool> {
        self.visited
    }

    fn visit(&mut self, slot: VertexSlot, hops: usize) {
        if let Some(seen) = self.visited.get_mut(slot) {
            if !*seen {
                *seen = true;
                self.queue.push_back((slot, hops));
            }
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, hops) = self.queue.pop_front()?;
        let vertex = self.graph.slot_vertex(slot)?;
        for neighbour in self.graph.sorted_neighbour_slots(vertex) {
            self.visit(neighbour, hops + 1);
        }
        Some(Visit {
            vertex: vertex.id(),
            hops,
        })
    }
}

/// Returns the hop distance from `source` to `target`, or `None` when no path
/// exists (including when either vertex is absent).
///
/// # Examples
/// ```
/// use complexnets_core::{Graph, VertexId, hops};
///
/// let id = |raw| VertexId::new(raw).expect("positive");
/// let mut graph = Graph::from_edges([(id(1), id(2)), (id(2), id(3))])?;
/// graph.add_vertex(id(4))?;
/// assert_eq!(hops(&graph, id(1), id(3)), Some(2));
/// assert_eq!(hops(&graph, id(3), id(3)), Some(0));
/// assert_eq!(hops(&graph, id(1), id(4)), None);
/// # Ok::<(), complexnets_core::GraphError>(())
/// ```
#[must_use]
pub fn hops(graph: &Graph, source: VertexId, target: VertexId) -> Option<usize> {
    if !graph.contains(target) {
        return None;
    }
    BreadthFirst::new(graph, source)
        .find(|visit| visit.vertex == target)
        .map(|visit| visit.hops)
}

/// Returns the hop distance from `source` to every vertex it can reach.
///
/// Equivalent to calling [`hops`] once per reachable vertex, in a single walk.
#[must_use]
pub fn hop_distances(graph: &Graph, source: VertexId) -> BTreeMap<VertexId, usize> {
    BreadthFirst::new(graph, source)
        .map(|visit| (visit.vertex, visit.hops))
        .collect()
}

/// Returns every vertex reachable from `source`, in breadth-first order.
#[must_use]
pub fn connected_component(graph: &Graph, source: VertexId) -> Vec<VertexId> {
    BreadthFirst::new(graph, source)
        .map(|visit| visit.vertex)
        .collect()
}

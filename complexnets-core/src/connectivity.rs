//! Connected-component discovery and largest-component pruning.
//!
//! Components are discovered with [`crate::BreadthFirst`] walks seeded by the
//! smallest unclassified vertex id, so discovery order is deterministic.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{
    error::GraphError,
    graph::{Graph, VertexId},
    traversal::BreadthFirst,
};

/// A maximal set of mutually reachable vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    members: Vec<VertexId>,
}

impl Component {
    /// Returns the members in breadth-first order from the smallest id.
    #[must_use]
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Reports whether the component has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Outcome of [`retain_largest_component`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Number of components found before pruning.
    pub components: usize,
    /// Size of the component that was kept.
    pub kept: usize,
    /// Number of vertices deleted.
    pub removed: usize,
}

/// Partitions `graph` into connected components in discovery order.
///
/// # Examples
/// ```
/// use complexnets_core::{Graph, VertexId, connected_components};
///
/// let id = |raw| VertexId::new(raw).expect("positive");
/// let mut graph = Graph::from_edges([(id(1), id(2)), (id(3), id(4)), (id(4), id(5))])?;
/// graph.add_vertex(id(6))?;
/// let sizes: Vec<usize> = connected_components(&graph).iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, [2, 3, 1]);
/// # Ok::<(), complexnets_core::GraphError>(())
/// ```
#[must_use]
pub fn connected_components(graph: &Graph) -> Vec<Component> {
    let mut visited = vec![false; graph.slot_capacity()];
    let mut components = Vec::new();
    for vertex in graph.vertices() {
        if visited.get(vertex.slot()).copied().unwrap_or(true) {
            continue;
        }
        let mut walk = BreadthFirst::resume(graph, vertex.slot(), visited);
        let members: Vec<VertexId> = walk.by_ref().map(|visit| visit.vertex).collect();
        visited = walk.into_visited();
        components.push(Component { members });
    }
    components
}

/// Reduces `graph` in place to its largest connected component.
///
/// The first component found wins ties. Deleting a vertex also deletes its
/// incident edges. An empty graph is left untouched. Running this twice is
/// the same as running it once.
///
/// # Errors
/// Returns a [`GraphError`] only if the graph's index and arena disagree,
/// which indicates a bug in the graph store.
///
/// # Examples
/// ```
/// use complexnets_core::{Graph, VertexId, retain_largest_component};
///
/// let id = |raw| VertexId::new(raw).expect("positive");
/// let mut graph = Graph::from_edges([(id(1), id(2)), (id(3), id(4)), (id(4), id(5))])?;
/// let summary = retain_largest_component(&mut graph)?;
/// assert_eq!(summary.components, 2);
/// assert_eq!(summary.removed, 2);
/// assert_eq!(graph.vertex_ids().map(VertexId::get).collect::<Vec<_>>(), [3, 4, 5]);
/// # Ok::<(), complexnets_core::GraphError>(())
/// ```
#[instrument(
    name = "conexity.retain_largest",
    err,
    skip(graph),
    fields(vertices = graph.vertices_count(), edges = graph.edge_count()),
)]
pub fn retain_largest_component(graph: &mut Graph) -> Result<ComponentSummary, GraphError> {
    let components = connected_components(graph);
    let mut largest: Option<&Component> = None;
    for component in &components {
        if largest.is_none_or(|best| component.len() > best.len()) {
            largest = Some(component);
        }
    }
    let Some(largest) = largest else {
        return Ok(ComponentSummary::default());
    };

    let keep: HashSet<VertexId> = largest.members().iter().copied().collect();
    let doomed: Vec<VertexId> = graph.vertex_ids().filter(|id| !keep.contains(id)).collect();
    for id in &doomed {
        graph.remove_vertex(*id)?;
    }

    let summary = ComponentSummary {
        components: components.len(),
        kept: largest.len(),
        removed: doomed.len(),
    };
    debug!(
        components = summary.components,
        kept = summary.kept,
        removed = summary.removed,
        "pruned graph to its largest component"
    );
    Ok(summary)
}

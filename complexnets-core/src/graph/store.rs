//! Arena-backed adjacency storage.

use std::collections::BTreeMap;

use crate::error::GraphError;

use super::vertex::{Vertex, VertexId, VertexSlot};

/// Undirected adjacency-list graph keyed by caller-assigned vertex ids.
///
/// Vertices live in an arena and are addressed internally by slot; an ordered
/// index maps ids to slots so iteration is always ascending by id regardless
/// of insertion order. Edges are stored as symmetric back-references and
/// duplicate edges are rejected whatever the `is_digraph` and `is_multigraph`
/// flags say.
///
/// # Examples
/// ```
/// use complexnets_core::{Graph, VertexId};
///
/// let one = VertexId::new(1).expect("positive");
/// let two = VertexId::new(2).expect("positive");
/// let mut graph = Graph::undirected();
/// graph.add_vertex(two)?;
/// graph.add_vertex(one)?;
/// graph.add_edge(one, two)?;
///
/// assert_eq!(graph.vertices_count(), 2);
/// assert!(graph.has_edge(two, one));
/// assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), [one, two]);
/// # Ok::<(), complexnets_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    is_digraph: bool,
    is_multigraph: bool,
    slots: Vec<Option<Vertex>>,
    index: BTreeMap<VertexId, VertexSlot>,
    edge_count: usize,
    slots_in_id_order: bool,
}

impl Graph {
    /// Creates an empty graph carrying the given flags.
    #[must_use]
    pub fn new(is_digraph: bool, is_multigraph: bool) -> Self {
        Self {
            is_digraph,
            is_multigraph,
            slots: Vec::new(),
            index: BTreeMap::new(),
            edge_count: 0,
            slots_in_id_order: true,
        }
    }

    /// Creates an empty simple undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    /// Creates a simple undirected graph holding the given vertices and no
    /// edges.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] if an id repeats.
    pub fn with_vertices(ids: impl IntoIterator<Item = VertexId>) -> Result<Self, GraphError> {
        let mut graph = Self::undirected();
        for id in ids {
            graph.add_vertex(id)?;
        }
        Ok(graph)
    }

    /// Builds a simple undirected graph from a populated edge list, adding
    /// endpoint vertices the first time they appear.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateEdge`] for a repeated pair and
    /// [`GraphError::SelfLoop`] for an edge whose endpoints coincide.
    ///
    /// # Examples
    /// ```
    /// use complexnets_core::{Graph, VertexId};
    ///
    /// let id = |raw| VertexId::new(raw).expect("positive");
    /// let graph = Graph::from_edges([(id(1), id(2)), (id(2), id(3))])?;
    /// assert_eq!(graph.vertices_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), complexnets_core::GraphError>(())
    /// ```
    pub fn from_edges(
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::undirected();
        for (left, right) in edges {
            for endpoint in [left, right] {
                if !graph.contains(endpoint) {
                    graph.add_vertex(endpoint)?;
                }
            }
            graph.add_edge(left, right)?;
        }
        Ok(graph)
    }

    /// Reports the directed flag the graph was created with.
    #[must_use]
    pub fn is_digraph(&self) -> bool {
        self.is_digraph
    }

    /// Reports the multigraph flag the graph was created with.
    #[must_use]
    pub fn is_multigraph(&self) -> bool {
        self.is_multigraph
    }

    /// Inserts a new isolated vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when `id` is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex { vertex: id });
        }
        if self
            .index
            .last_key_value()
            .is_some_and(|(&highest, _)| highest > id)
        {
            self.slots_in_id_order = false;
        }
        let slot = self.slots.len();
        self.slots.push(Some(Vertex::new(id, slot)));
        self.index.insert(id, slot);
        Ok(())
    }

    /// Connects `left` and `right` with a symmetric edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either endpoint is missing,
    /// [`GraphError::SelfLoop`] when both endpoints are the same vertex and
    /// [`GraphError::DuplicateEdge`] when the vertices are already neighbours.
    pub fn add_edge(&mut self, left: VertexId, right: VertexId) -> Result<(), GraphError> {
        let (left_slot, right_slot) = self.endpoint_slots(left, right)?;
        if self.slot_has_edge(left_slot, right_slot) {
            return Err(GraphError::DuplicateEdge { left, right });
        }
        self.link_slots(left_slot, right_slot);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the edge between `left` and `right` from both endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either endpoint is missing and
    /// [`GraphError::MissingEdge`] when the vertices are not neighbours.
    pub fn remove_edge(&mut self, left: VertexId, right: VertexId) -> Result<(), GraphError> {
        let (left_slot, right_slot) = self.endpoint_slots(left, right)?;
        if !self.slot_has_edge(left_slot, right_slot) {
            return Err(GraphError::MissingEdge { left, right });
        }
        self.unlink_slots(left_slot, right_slot);
        self.edge_count -= 1;
        Ok(())
    }

    /// Removes a vertex together with every incident edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `id` is not present.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        let slot = self
            .index
            .remove(&id)
            .ok_or(GraphError::UnknownVertex { vertex: id })?;
        let removed = self
            .slots
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or(GraphError::UnknownVertex { vertex: id })?;
        for neighbour in removed.neighbour_slots() {
            if let Some(vertex) = self.slots.get_mut(neighbour).and_then(Option::as_mut) {
                vertex.unlink(slot);
            }
        }
        self.edge_count -= removed.degree();
        Ok(())
    }

    /// Looks up a vertex by id, returning `None` when it is absent.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slot(id).and_then(|slot| self.slot_vertex(slot))
    }

    /// Reports whether a vertex with `id` is present.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Reports whether `left` and `right` are neighbours.
    #[must_use]
    pub fn has_edge(&self, left: VertexId, right: VertexId) -> bool {
        match (self.slot(left), self.slot(right)) {
            (Some(left_slot), Some(right_slot)) => self.slot_has_edge(left_slot, right_slot),
            _ => false,
        }
    }

    /// Returns the degree of `id`, or `None` when the vertex is absent.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.vertex(id).map(Vertex::degree)
    }

    /// Returns the neighbours of `id` in ascending id order.
    ///
    /// An absent vertex has no neighbours.
    #[must_use]
    pub fn neighbours(&self, id: VertexId) -> Vec<VertexId> {
        self.vertex(id)
            .map(|vertex| self.sorted_neighbour_slots(vertex))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|slot| self.slot_id(slot))
            .collect()
    }

    /// Iterates over the vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.index
            .values()
            .filter_map(move |&slot| self.slot_vertex(slot))
    }

    /// Iterates over the vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.index.keys().copied()
    }

    /// Iterates over every edge once as `(low, high)`, ordered by `low` then
    /// `high`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices().flat_map(move |vertex| {
            let low = vertex.id();
            self.sorted_neighbour_slots(vertex)
                .into_iter()
                .filter_map(move |slot| self.slot_id(slot))
                .filter(move |&high| high > low)
                .map(move |high| (low, high))
        })
    }

    /// Returns the number of vertices currently stored.
    #[must_use]
    pub fn vertices_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of undirected edges currently stored.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Reports whether the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn slot(&self, id: VertexId) -> Option<VertexSlot> {
        self.index.get(&id).copied()
    }

    pub(crate) fn slot_vertex(&self, slot: VertexSlot) -> Option<&Vertex> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn slot_id(&self, slot: VertexSlot) -> Option<VertexId> {
        self.slot_vertex(slot).map(Vertex::id)
    }

    /// Upper bound (exclusive) on every slot handed out so far.
    pub(crate) fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the neighbour slots of `vertex` ordered by ascending id.
    pub(crate) fn sorted_neighbour_slots(&self, vertex: &Vertex) -> Vec<VertexSlot> {
        let mut slots: Vec<VertexSlot> = vertex.neighbour_slots().collect();
        if !self.slots_in_id_order {
            slots.sort_unstable_by_key(|&slot| self.slot_id(slot));
        }
        slots
    }

    fn endpoint_slots(
        &self,
        left: VertexId,
        right: VertexId,
    ) -> Result<(VertexSlot, VertexSlot), GraphError> {
        let left_slot = self
            .slot(left)
            .ok_or(GraphError::UnknownVertex { vertex: left })?;
        let right_slot = self
            .slot(right)
            .ok_or(GraphError::UnknownVertex { vertex: right })?;
        if left_slot == right_slot {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        Ok((left_slot, right_slot))
    }

    fn slot_has_edge(&self, left: VertexSlot, right: VertexSlot) -> bool {
        match (self.slot_vertex(left), self.slot_vertex(right)) {
            (Some(source), Some(target)) => source.is_neighbour_of(target),
            _ => false,
        }
    }

    fn link_slots(&mut self, left: VertexSlot, right: VertexSlot) {
        if let Some(vertex) = self.slots.get_mut(left).and_then(Option::as_mut) {
            vertex.link(right);
        }
        if let Some(vertex) = self.slots.get_mut(right).and_then(Option::as_mut) {
            vertex.link(left);
        }
    }

    fn unlink_slots(&mut self, left: VertexSlot, right: VertexSlot) {
        if let Some(vertex) = self.slots.get_mut(left).and_then(Option::as_mut) {
            vertex.unlink(right);
        }
        if let Some(vertex) = self.slots.get_mut(right).and_then(Option::as_mut) {
            vertex.unlink(left);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

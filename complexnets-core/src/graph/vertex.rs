//! Vertex identity and adjacency storage.

use std::{collections::BTreeSet, fmt, num::NonZeroU64};

/// Caller-assigned identifier of a vertex.
///
/// Identifiers are positive integers; zero is reserved so that
/// [`VertexId::new`] can reject it.
///
/// # Examples
/// ```
/// use complexnets_core::VertexId;
///
/// let id = VertexId::new(7).expect("seven is a valid id");
/// assert_eq!(id.get(), 7);
/// assert!(VertexId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(NonZeroU64);

impl VertexId {
    /// Creates an identifier, returning `None` for zero.
    #[must_use]
    pub const fn new(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the underlying numeric identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Yields the identifiers `1..=count` in ascending order.
    ///
    /// # Examples
    /// ```
    /// use complexnets_core::VertexId;
    ///
    /// let ids: Vec<u64> = VertexId::sequence(3).map(VertexId::get).collect();
    /// assert_eq!(ids, [1, 2, 3]);
    /// ```
    pub fn sequence(count: usize) -> impl Iterator<Item = Self> {
        (1..=count as u64).filter_map(Self::new)
    }
}

impl From<NonZeroU64> for VertexId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena index of a vertex inside its owning graph.
pub(crate) type VertexSlot = usize;

/// A vertex owned by a [`crate::Graph`].
///
/// Neighbour references are arena slots of the same graph, so they never own
/// the vertices they point at.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    slot: VertexSlot,
    neighbours: BTreeSet<VertexSlot>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, slot: VertexSlot) -> Self {
        Self {
            id,
            slot,
            neighbours: BTreeSet::new(),
        }
    }

    /// Returns the vertex identifier.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the number of neighbours.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Reports whether `other` is adjacent to this vertex.
    #[must_use]
    pub fn is_neighbour_of(&self, other: &Self) -> bool {
        self.neighbours.contains(&other.slot)
    }

    pub(crate) fn slot(&self) -> VertexSlot {
        self.slot
    }

    pub(crate) fn neighbour_slots(&self) -> impl Iterator<Item = VertexSlot> + '_ {
        self.neighbours.iter().copied()
    }

    pub(crate) fn link(&mut self, slot: VertexSlot) -> bool {
        self.neighbours.insert(slot)
    }

    pub(crate) fn unlink(&mut self, slot: VertexSlot) -> bool {
        self.neighbours.remove(&slot)
    }
}

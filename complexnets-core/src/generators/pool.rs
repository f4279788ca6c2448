//! Degree-proportional sampling via a replicated-id pool.

use rand::{Rng, seq::SliceRandom};

use crate::graph::VertexId;

/// Sequence of vertex ids in which each id appears once per unit of
/// selection weight, so a uniform draw from the pool is a weighted draw over
/// vertices.
#[derive(Clone, Debug, Default)]
pub(crate) struct AttachmentPool {
    entries: Vec<VertexId>,
}

impl AttachmentPool {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds `copies` units of weight to `vertex`.
    pub(crate) fn push_copies(&mut self, vertex: VertexId, copies: usize) {
        self.entries.extend(std::iter::repeat_n(vertex, copies));
    }

    /// Records a new edge by adding one unit of weight to each endpoint.
    pub(crate) fn record_link(&mut self, left: VertexId, right: VertexId) {
        self.entries.push(left);
        self.entries.push(right);
    }

    /// Draws an id with probability proportional to its weight.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<VertexId> {
        self.entries.choose(rng).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn weight_of(&self, vertex: VertexId) -> usize {
        self.entries.iter().filter(|&&entry| entry == vertex).count()
    }
}

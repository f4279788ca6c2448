//! Adjacency-structure abstraction shared by every generator.
//!
//! A [`Graph`] exclusively owns its [`Vertex`] values. Adjacency is stored as
//! sets of arena slots on each vertex, which keeps the owning/non-owning split
//! without reference counting.

mod store;
mod vertex;

pub use self::{
    store::Graph,
    vertex::{Vertex, VertexId},
};
pub(crate) use self::vertex::VertexSlot;

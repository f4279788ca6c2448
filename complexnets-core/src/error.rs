//! Error types for the complexnets core library.
//!
//! Defines the graph mutation errors, the generator errors that wrap them,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The two vertices are already neighbours.
    #[error("vertices {left} and {right} are already connected")]
    DuplicateEdge {
        /// First endpoint of the rejected edge.
        left: VertexId,
        /// Second endpoint of the rejected edge.
        right: VertexId,
    },
    /// An edge from a vertex to itself was requested.
    #[error("vertex {vertex} cannot be connected to itself")]
    SelfLoop {
        /// Vertex named on both ends of the edge.
        vertex: VertexId,
    },
    /// A vertex with the same id is already stored in the graph.
    #[error("vertex {vertex} is already present in the graph")]
    DuplicateVertex {
        /// Identifier that collided.
        vertex: VertexId,
    },
    /// The referenced vertex is not stored in the graph.
    #[error("vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// Identifier that could not be resolved.
        vertex: VertexId,
    },
    /// The edge to remove does not exist.
    #[error("vertices {left} and {right} are not connected")]
    MissingEdge {
        /// First endpoint of the missing edge.
        left: VertexId,
        /// Second endpoint of the missing edge.
        right: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The two vertices are already neighbours.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge from a vertex to itself was requested.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A vertex with the same id is already stored in the graph.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// The referenced vertex is not stored in the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// The edge to remove does not exist.
        MissingEdge => MissingEdge { .. } => "GRAPH_MISSING_EDGE",
    }
}

/// Error type produced by the graph generators.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Generator parameters were rejected before any work started.
    #[error("invalid generator parameter: {reason}")]
    InvalidParameters {
        /// Human-readable description of the violated precondition.
        reason: String,
    },
    /// Rejection sampling ran out of draws before linking a new vertex.
    #[error("gave up attaching vertex {vertex} after {attempts} draws")]
    RetryBudgetExhausted {
        /// Vertex that could not be fully attached.
        vertex: VertexId,
        /// Number of draws consumed before giving up.
        attempts: usize,
    },
    /// A graph mutation failed, which indicates a generator logic error.
    #[error("graph mutation failed: {0}")]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Generator parameters were rejected before any work started.
        InvalidParameters => InvalidParameters { .. } => "GENERATOR_INVALID_PARAMETERS",
        /// Rejection sampling ran out of draws.
        RetryBudgetExhausted => RetryBudgetExhausted { .. } => "GENERATOR_RETRY_BUDGET_EXHAUSTED",
        /// A graph mutation failed.
        GraphFailure => Graph(..) => "GENERATOR_GRAPH_FAILURE",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a [`crate::Graph`].
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the generator API.
pub type Result<T> = core::result::Result<T, GeneratorError>;

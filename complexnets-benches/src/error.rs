//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of panicking
//! inside Criterion closures.

use complexnets_core::{GeneratorError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generator rejected its parameters or failed while building.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A direct graph mutation failed.
    #[error("graph mutation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}

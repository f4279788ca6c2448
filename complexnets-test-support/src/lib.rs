//! Shared test utilities used across complexnets crates.

pub mod ci;
pub mod tracing;

//! Support library for the `complexnets` binary.
//!
//! Exposes the command pipeline so doctests and unit tests can drive a
//! generator run without spawning a subprocess.

pub mod cli;
pub mod logging;

//! Benchmark support crate for complexnets.
//!
//! Provides parameter types, setup errors and seeded workloads for the
//! Criterion benchmarks of the graph generators and traversal routines.

pub mod error;
pub mod params;
pub mod workload;

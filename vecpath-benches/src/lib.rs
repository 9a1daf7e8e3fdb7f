//! Benchmark support crate for vecpath.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for Bellman-Ford and Floyd-Warshall.

pub mod error;
pub mod params;
pub mod source;

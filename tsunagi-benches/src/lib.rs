//! Benchmark support crate for tsunagi.
//!
//! Builds the seeded graphs and edge lists the Criterion benchmarks time, so
//! the sort and MST benches measure the same inputs.

pub mod error;
pub mod fixtures;
pub mod params;

//! Benchmark support crate for roadnet.
//!
//! Provides seeded synthetic road networks and parameter types used by the
//! Criterion benchmarks for route search and minimum spanning forests.

pub mod error;
pub mod network;
pub mod params;

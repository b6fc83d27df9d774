//! Shared test utilities used across roadnet crates.

pub mod ci;
pub mod tracing;

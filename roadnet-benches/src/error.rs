//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use crate::network::GridError;
use roadnet_core::RoadNetError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation failed.
    #[error("synthetic network generation failed: {0}")]
    Grid(#[from] GridError),
    /// The core rejected a generated network.
    #[error("road network rejected: {0}")]
    Core(#[from] RoadNetError),
    /// A generated network had no route between its corners.
    #[error("no route between `{start}` and `{end}`")]
    Unreachable {
        /// Start endpoint of the query.
        start: String,
        /// End endpoint of the query.
        end: String,
    },
}

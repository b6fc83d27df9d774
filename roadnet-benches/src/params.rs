//! Benchmark parameter types.

use std::fmt;

/// Dimensions of a grid benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Endpoints per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! Seeded synthetic road networks.
//!
//! A grid network places `width * height` endpoints on a lattice and joins
//! each one to its right and lower neighbour. Lengths are drawn from a
//! seeded [`SmallRng`] so every run benchmarks the same network.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use roadnet_core::{Road, RouteQuery};

/// Errors raised while generating a grid network.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The longest allowed road has length zero.
    #[error("maximum road length must be non-zero")]
    ZeroMaxLength,
    /// The grid needs more road ids than an `i64` can hold.
    #[error("grid of {width}x{height} exceeds the road id range")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Configuration for [`GridNetwork::generate`].
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Endpoints per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Longest road length, inclusive. Lengths start at 1.
    pub max_length: u64,
    /// Seed for the length generator.
    pub seed: u64,
}

/// A generated grid and the corner-to-corner query used by the benchmarks.
#[derive(Clone, Debug)]
pub struct GridNetwork {
    roads: Vec<Road>,
    query: RouteQuery,
    endpoint_count: usize,
}

impl GridNetwork {
    /// Generates the grid described by `config`.
    ///
    /// # Errors
    /// Returns [`GridError`] for empty grids, a zero maximum length, or
    /// grids with more roads than road ids.
    ///
    /// # Examples
    /// ```
    /// use roadnet_benches::network::{GridConfig, GridNetwork};
    ///
    /// let grid = GridNetwork::generate(&GridConfig { width: 3, height: 2, max_length: 9, seed: 7 })?;
    /// assert_eq!(grid.roads().len(), 7);
    /// assert_eq!(grid.query().start(), "R0C0");
    /// assert_eq!(grid.query().end(), "R1C2");
    /// # Ok::<(), roadnet_benches::network::GridError>(())
    /// ```
    pub fn generate(config: &GridConfig) -> Result<Self, GridError> {
        let GridConfig {
            width,
            height,
            max_length,
            seed,
        } = *config;
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if max_length == 0 {
            return Err(GridError::ZeroMaxLength);
        }
        let endpoint_count = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut roads = Vec::with_capacity(endpoint_count.saturating_mul(2));
        let mut next_id: i64 = 1;

        for row in 0..height {
            for column in 0..width {
                let here = endpoint_name(row, column);
                let neighbours = [
                    (column + 1 < width).then(|| endpoint_name(row, column + 1)),
                    (row + 1 < height).then(|| endpoint_name(row + 1, column)),
                ];
                for neighbour in neighbours.into_iter().flatten() {
                    let length = rng.gen_range(1..=max_length);
                    roads.push(Road::new(here.as_str(), neighbour, length, next_id));
                    next_id = next_id
                        .checked_add(1)
                        .ok_or(GridError::TooLarge { width, height })?;
                }
            }
        }

        let query = RouteQuery::new(
            endpoint_name(0, 0),
            endpoint_name(height - 1, width - 1),
        );
        Ok(Self {
            roads,
            query,
            endpoint_count,
        })
    }

    /// Returns the generated roads.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Returns the query from the top-left to the bottom-right corner.
    #[must_use]
    pub const fn query(&self) -> &RouteQuery {
        &self.query
    }

    /// Returns the number of endpoints in the grid.
    #[must_use]
    pub const fn endpoint_count(&self) -> usize {
        self.endpoint_count
    }
}

fn endpoint_name(row: usize, column: usize) -> String {
    format!("R{row}C{column}")
}

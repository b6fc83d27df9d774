//! Minimum spanning forest ("barely connected map") construction.
//!
//! Kruskal's algorithm over endpoint names: roads are evaluated in ascending
//! road order (length, then id) and accepted whenever they join two
//! different components of a union-find. The caller's road list is never
//! reordered; the engine sorts its own copy.

mod union_find;

use tracing::{Span, debug, field, instrument};

use crate::{Result, graph::validate_roads, road::Road, route::total_length};

use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When every endpoint is reachable from every other, the forest is a
/// minimum spanning tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinimumSpanningForest {
    roads: Vec<Road>,
    endpoint_count: usize,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted roads in the order they were evaluated
    /// (ascending length, then id).
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Returns the number of distinct endpoints in the input.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoint_count
    }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed length of the accepted roads.
    #[must_use]
    pub fn total_length(&self) -> u64 {
        total_length(&self.roads)
    }

    /// Consumes the forest and returns its roads.
    #[must_use]
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }
}

/// Computes the minimum spanning forest of `roads` with Kruskal's algorithm.
///
/// `roads` is only read: the engine sorts an owned copy, so callers may keep
/// using the slice in its original order. Ties on length are broken by the
/// lower id, which makes the result reproducible.
///
/// # Errors
/// Returns [`crate::RoadNetError::SelfLoop`] or
/// [`crate::RoadNetError::DuplicateRoadId`] for invalid input, and
/// [`crate::RoadNetError::InvariantViolation`] if the union-find loses track
/// of an endpoint.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, barely_connected};
///
/// let roads = vec![
///     Road::new("A", "C", 25, 3),
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
/// ];
/// let forest = barely_connected(&roads)?;
/// let ids: Vec<i64> = forest.roads().iter().map(|road| road.id()).collect();
/// assert_eq!(ids, [1, 2]);
/// assert_eq!(forest.total_length(), 20);
/// assert!(forest.is_tree());
/// assert_eq!(roads[0].id(), 3);
/// # Ok::<(), roadnet_core::RoadNetError>(())
/// ```
#[instrument(
    name = "roadnet.barely_connected",
    err,
    skip(roads),
    fields(
        roads = roads.len(),
        endpoints = field::Empty,
        accepted = field::Empty,
        components = field::Empty,
    ),
)]
pub fn barely_connected(roads: &[Road]) -> Result<MinimumSpanningForest> {
    validate_roads(roads)?;

    let mut sorted = roads.to_vec();
    sorted.sort_unstable();

    let mut sets = DisjointSet::with_capacity(sorted.len());
    for road in &sorted {
        sets.make_set(road.shared_endpoint1());
        sets.make_set(road.shared_endpoint2());
    }
    let endpoint_count = sets.len();

    let mut accepted = Vec::with_capacity(endpoint_count.saturating_sub(1));
    for road in sorted {
        if sets.try_union(road.endpoint1(), road.endpoint2())? {
            accepted.push(road);
        }
        if is_forest_complete(endpoint_count, &accepted) {
            break;
        }
    }

    let span = Span::current();
    span.record("endpoints", endpoint_count);
    span.record("accepted", accepted.len());
    span.record("components", sets.components());
    debug!(
        total_length = total_length(&accepted),
        "minimum spanning forest computed"
    );

    Ok(MinimumSpanningForest {
        roads: accepted,
        endpoint_count,
        component_count: sets.components(),
    })
}

fn is_forest_complete(endpoint_count: usize, accepted: &[Road]) -> bool {
    accepted.len() == endpoint_count.saturating_sub(1)
}

#[cfg(test)]
mod property;

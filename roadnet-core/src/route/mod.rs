//! Fastest route search over road networks.
//!
//! [`fastest_route`] builds a fresh [`RoadGraph`] from the supplied roads and
//! runs Dijkstra's algorithm between two endpoints. A missing route is a
//! legitimate outcome and is reported as `None`, not as an error.

mod dijkstra;

use std::ops::Deref;

use tracing::{Span, field, instrument};

use crate::{Result, graph::RoadGraph, road::Road};

/// An ordered sequence of roads leading from a start endpoint to an end
/// endpoint, each oriented in the direction of travel.
///
/// The empty route describes a trip from an endpoint to itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    roads: Vec<Road>,
}

impl Route {
    pub(crate) fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// Returns the roads in travel order.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Returns the summed length of every road on the route.
    #[must_use]
    pub fn total_length(&self) -> u64 {
        total_length(&self.roads)
    }

    /// Consumes the route and returns its roads.
    #[must_use]
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }
}

impl Deref for Route {
    type Target = [Road];

    fn deref(&self) -> &Self::Target {
        &self.roads
    }
}

/// Sums the lengths of `roads`, saturating at `u64::MAX`.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, total_length};
///
/// let roads = [Road::new("A", "B", 10, 1), Road::new("B", "C", 15, 2)];
/// assert_eq!(total_length(&roads), 25);
/// assert_eq!(total_length(&[]), 0);
/// ```
#[must_use]
pub fn total_length(roads: &[Road]) -> u64 {
    roads
        .iter()
        .map(Road::length)
        .fold(0, u64::saturating_add)
}

/// Finds the shortest route from `start` to `end` over `roads`.
///
/// Returns `Ok(None)` when `end` cannot be reached from `start`. A trip from
/// an endpoint to itself is the empty route, whether or not the endpoint
/// appears in `roads`. When several routes share the minimum length, the one
/// whose last road has the lowest id wins, then the one whose second-to-last
/// road does, and so on back to `start`. Zero-length roads take part in the
/// tie-break like any other road.
///
/// # Errors
/// Returns [`crate::RoadNetError`] when `roads` contains a self-loop or a
/// repeated id.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, fastest_route};
///
/// let roads = vec![
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
///     Road::new("A", "C", 25, 3),
/// ];
/// let route = fastest_route(&roads, "A", "C")?.expect("A reaches C");
/// assert_eq!(route.total_length(), 20);
/// let ids: Vec<i64> = route.iter().map(|road| road.id()).collect();
/// assert_eq!(ids, [1, 2]);
/// # Ok::<(), roadnet_core::RoadNetError>(())
/// ```
#[instrument(
    name = "roadnet.fastest_route",
    err,
    skip(roads),
    fields(roads = roads.len(), route_roads = field::Empty, route_length = field::Empty),
)]
pub fn fastest_route(roads: &[Road], start: &str, end: &str) -> Result<Option<Route>> {
    let graph = RoadGraph::from_roads(roads)?;
    let route = dijkstra::shortest_route(&graph, start, end)?;
    if let Some(found) = &route {
        let span = Span::current();
        span.record("route_roads", found.len());
        span.record("route_length", found.total_length());
    }
    Ok(route)
}

#[cfg(test)]
mod property;

//! End-to-end analysis of a road network.
//!
//! [`analyze`] finds the fastest route between two endpoints, reduces the
//! network to its minimum spanning forest, repeats the route search on the
//! forest and derives the two comparison ratios.

use std::sync::Arc;

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    mst::{MinimumSpanningForest, barely_connected},
    road::Road,
    route::{Route, fastest_route, total_length},
};

/// The pair of endpoints a route analysis is asked about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    start: Arc<str>,
    end: Arc<str>,
}

impl RouteQuery {
    /// Creates a query from `start` to `end`.
    pub fn new(start: impl Into<Arc<str>>, end: impl Into<Arc<str>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the start endpoint.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end endpoint.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Everything [`analyze`] learns about a network and a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapAnalysis {
    query: RouteQuery,
    network_length: u64,
    fastest_route: Option<Route>,
    forest: MinimumSpanningForest,
    barely_connected_route: Option<Route>,
}

impl MapAnalysis {
    /// Returns the query the analysis answered.
    #[must_use]
    pub fn query(&self) -> &RouteQuery {
        &self.query
    }

    /// Returns the summed length of every input road.
    #[must_use]
    pub fn network_length(&self) -> u64 {
        self.network_length
    }

    /// Returns the fastest route over the full network.
    #[must_use]
    pub fn fastest_route(&self) -> Option<&Route> {
        self.fastest_route.as_ref()
    }

    /// Returns the minimum spanning forest ("barely connected map").
    #[must_use]
    pub fn forest(&self) -> &MinimumSpanningForest {
        &self.forest
    }

    /// Returns the fastest route over the barely connected map.
    #[must_use]
    pub fn barely_connected_route(&self) -> Option<&Route> {
        self.barely_connected_route.as_ref()
    }

    /// Ratio of forest length to network length.
    ///
    /// `None` when the network has zero total length.
    #[must_use]
    pub fn material_usage_ratio(&self) -> Option<f64> {
        ratio(self.forest.total_length(), self.network_length)
    }

    /// Ratio of the barely connected route length to the full route length.
    ///
    /// `None` when either route is missing or the full route has zero length.
    #[must_use]
    pub fn fastest_route_ratio(&self) -> Option<f64> {
        let full = self.fastest_route.as_ref()?;
        let reduced = self.barely_connected_route.as_ref()?;
        ratio(reduced.total_length(), full.total_length())
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "ratios are reported to two decimal places"
)]
fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

/// Runs the full analysis of `roads` for `query`.
///
/// # Errors
/// Propagates [`crate::RoadNetError`] from graph construction or the
/// engines, most commonly for self-loops or repeated road ids.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, RouteQuery, analyze};
///
/// let roads = vec![
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
///     Road::new("A", "C", 25, 3),
/// ];
/// let analysis = analyze(&roads, &RouteQuery::new("A", "C"))?;
/// assert_eq!(analysis.forest().total_length(), 20);
/// assert_eq!(analysis.fastest_route_ratio(), Some(1.0));
/// # Ok::<(), roadnet_core::RoadNetError>(())
/// ```
#[instrument(
    name = "roadnet.analyze",
    err,
    skip(roads, query),
    fields(
        roads = roads.len(),
        start = query.start(),
        end = query.end(),
        endpoints = field::Empty,
        components = field::Empty,
    ),
)]
pub fn analyze(roads: &[Road], query: &RouteQuery) -> Result<MapAnalysis> {
    let fastest = fastest_route(roads, query.start(), query.end())?;
    let forest = barely_connected(roads)?;
    let reduced = fastest_route(forest.roads(), query.start(), query.end())?;

    let span = Span::current();
    span.record("endpoints", forest.endpoint_count());
    span.record("components", forest.component_count());

    let analysis = MapAnalysis {
        query: query.clone(),
        network_length: total_length(roads),
        fastest_route: fastest,
        forest,
        barely_connected_route: reduced,
    };
    info!(
        network_length = analysis.network_length,
        forest_length = analysis.forest.total_length(),
        route_found = analysis.fastest_route.is_some(),
        "road network analysed"
    );
    Ok(analysis)
}

//! Adjacency construction for road networks.
//!
//! [`RoadGraph`] maps every endpoint to its neighbours and the road that
//! reaches each of them. Every undirected road produces two directed entries:
//! the natural orientation from `endpoint1` and a reversed copy from
//! `endpoint2`, so a neighbour lookup always yields a road whose `endpoint2`
//! is the neighbour.

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    sync::Arc,
};

use tracing::debug;

use crate::{Result, error::RoadNetError, road::Road};

/// Undirected adjacency view over a list of roads.
///
/// Built fresh for each query and discarded afterwards.
///
/// # Examples
/// ```
/// use roadnet_core::{Road, RoadGraph};
///
/// let graph = RoadGraph::from_roads(&[Road::new("A", "B", 4, 1)])?;
/// let road = graph.road_between("B", "A").expect("roads are undirected");
/// assert_eq!(road.endpoints(), ("B", "A"));
/// assert!(road.is_reversed());
/// # Ok::<(), roadnet_core::RoadNetError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    adjacency: HashMap<Arc<str>, HashMap<Arc<str>, Road>>,
}

impl RoadGraph {
    /// Builds the adjacency map for `roads`.
    ///
    /// When several roads join the same pair of endpoints only the smallest
    /// by road order (length, then id) is kept.
    ///
    /// # Errors
    /// Returns [`RoadNetError::SelfLoop`] when a road joins an endpoint to
    /// itself and [`RoadNetError::DuplicateRoadId`] when two roads share an id.
    pub fn from_roads(roads: &[Road]) -> Result<Self> {
        validate_roads(roads)?;

        let mut adjacency: HashMap<Arc<str>, HashMap<Arc<str>, Road>> = HashMap::new();
        for road in roads {
            insert_directed(&mut adjacency, road.clone());
            insert_directed(&mut adjacency, road.reversed());
        }

        debug!(
            roads = roads.len(),
            endpoints = adjacency.len(),
            "road graph built"
        );
        Ok(Self { adjacency })
    }

    /// Returns the number of distinct endpoints.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when `endpoint` appears on at least one road.
    #[must_use]
    pub fn contains(&self, endpoint: &str) -> bool {
        self.adjacency.contains_key(endpoint)
    }

    /// Returns the road leading from `from` to `to`, oriented in that
    /// direction, or `None` when the two are not adjacent.
    #[must_use]
    pub fn road_between(&self, from: &str, to: &str) -> Option<&Road> {
        self.adjacency.get(from)?.get(to)
    }

    /// Iterates over the roads leaving `endpoint`, each oriented away from it.
    ///
    /// Unknown endpoints have no neighbours.
    pub fn neighbors<'a>(&'a self, endpoint: &str) -> impl Iterator<Item = &'a Road> + 'a {
        self.adjacency
            .get(endpoint)
            .into_iter()
            .flat_map(HashMap::values)
    }

    /// Returns the shared name stored for `endpoint`, if present.
    pub(crate) fn shared_endpoint(&self, endpoint: &str) -> Option<&Arc<str>> {
        self.adjacency.get_key_value(endpoint).map(|(name, _)| name)
    }
}

fn insert_directed(adjacency: &mut HashMap<Arc<str>, HashMap<Arc<str>, Road>>, road: Road) {
    let neighbors = adjacency
        .entry(Arc::clone(road.shared_endpoint1()))
        .or_default();
    match neighbors.entry(Arc::clone(road.shared_endpoint2())) {
        Entry::Occupied(mut existing) => {
            if road < *existing.get() {
                existing.insert(road);
            }
        }
        Entry::Vacant(slot) => {
            slot.insert(road);
        }
    }
}

/// Checks the per-input road invariants shared by every engine.
///
/// # Errors
/// Returns [`RoadNetError::SelfLoop`] for a road whose two endpoints match
/// and [`RoadNetError::DuplicateRoadId`] for a repeated id.
pub(crate) fn validate_roads(roads: &[Road]) -> Result<()> {
    let mut seen = HashSet::with_capacity(roads.len());
    for road in roads {
        if road.is_self_loop() {
            return Err(RoadNetError::SelfLoop {
                id: road.id(),
                endpoint: Arc::clone(road.shared_endpoint1()),
            });
        }
        if !seen.insert(road.id()) {
            return Err(RoadNetError::DuplicateRoadId { id: road.id() });
        }
    }
    Ok(())
}

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, hash_map::Entry},
    sync::Arc,
};

use tracing::debug;

use crate::{Result, error::RoadNetError, graph::RoadGraph};

use super::Route;

pub(super) fn shortest_route(graph: &RoadGraph, start: &str, end: &str) -> Result<Option<Route>> {
    if start == end {
        return Ok(Some(Route::default()));
    }

    let (Some(source), Some(target)) = (graph.shared_endpoint(start), graph.shared_endpoint(end))
    else {
        return Ok(None);
    };

    let dist = settle_distances(graph, source, end);
    if !dist.contains_key(end) {
        debug!(start, end, settled = dist.len(), "no route found");
        return Ok(None);
    }

    trace_back(graph, &dist, start, target).map(Some)
}

/// Runs Dijkstra from `source` and returns the final distance of every
/// endpoint no further away than `end`.
///
/// Endpoints tied with `end` are settled as well, so both ends of every road
/// on a shortest route to `end` carry their final distance.
fn settle_distances(graph: &RoadGraph, source: &Arc<str>, end: &str) -> HashMap<Arc<str>, u64> {
    let mut settled: HashMap<Arc<str>, u64> = HashMap::with_capacity(graph.endpoint_count());
    let mut tentative: HashMap<Arc<str>, u64> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut horizon = None;

    tentative.insert(Arc::clone(source), 0);
    queue.push(Reverse((0_u64, Arc::clone(source))));

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        if horizon.is_some_and(|limit| vertex_dist > limit) {
            break;
        }
        // Relaxation pushes duplicates instead of decreasing keys; the first
        // pop of an endpoint carries its final distance.
        if settled.contains_key(&vertex) {
            continue;
        }
        settled.insert(Arc::clone(&vertex), vertex_dist);
        if *vertex == *end {
            horizon = Some(vertex_dist);
        }

        for road in graph.neighbors(&vertex) {
            let next = road.shared_endpoint2();
            if settled.contains_key(next) {
                continue;
            }

            let next_dist = vertex_dist.saturating_add(road.length());
            match tentative.entry(Arc::clone(next)) {
                Entry::Occupied(mut known) => {
                    if next_dist < *known.get() {
                        known.insert(next_dist);
                        queue.push(Reverse((next_dist, Arc::clone(next))));
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist);
                    queue.push(Reverse((next_dist, Arc::clone(next))));
                }
            }
        }
    }

    settled
}

/// Rebuilds the route from `end` backwards.
///
/// Each step takes the lowest-id road that ends a shortest route from `start`
/// to the current endpoint without revisiting the endpoints already chosen.
/// The last road therefore has the lowest possible id, then the one before
/// it, and so on.
fn trace_back<'g>(
    graph: &'g RoadGraph,
    dist: &HashMap<Arc<str>, u64>,
    start: &str,
    end: &'g str,
) -> Result<Route> {
    let mut roads = Vec::new();
    let mut on_route: HashSet<&'g str> = HashSet::from([end]);
    let mut current = end;

    while current != start {
        let current_dist =
            dist.get(current)
                .copied()
                .ok_or_else(|| RoadNetError::InvariantViolation {
                    invariant: "every endpoint on the route must be settled",
                    endpoint: Arc::from(current),
                })?;

        // Roads leave `current`, so `endpoint2` is the endpoint travelled from.
        let step = graph
            .neighbors(current)
            .filter(|road| {
                let previous = road.endpoint2();
                !on_route.contains(previous)
                    && dist
                        .get(previous)
                        .is_some_and(|known| known.saturating_add(road.length()) == current_dist)
            })
            // A positive-length step always moves strictly closer to `start`,
            // so only zero-length steps can strand the walk.
            .filter(|road| {
                road.length() > 0 || reaches_start(graph, dist, road.endpoint2(), start, &on_route)
            })
            .min_by_key(|road| road.id())
            .ok_or_else(|| RoadNetError::InvariantViolation {
                invariant: "every endpoint on a shortest route must have a predecessor road",
                endpoint: Arc::from(current),
            })?;

        let previous = step.endpoint2();
        on_route.insert(previous);
        roads.push(step.reversed());
        current = previous;
    }

    roads.reverse();
    Ok(Route::new(roads))
}

/// Whether a shortest route from `start` reaches `from` while avoiding every
/// endpoint in `blocked`.
fn reaches_start<'g>(
    graph: &'g RoadGraph,
    dist: &HashMap<Arc<str>, u64>,
    from: &'g str,
    start: &str,
    blocked: &HashSet<&'g str>,
) -> bool {
    let mut seen: HashSet<&'g str> = HashSet::from([from]);
    let mut stack = vec![from];

    while let Some(vertex) = stack.pop() {
        if vertex == start {
            return true;
        }
        let Some(&vertex_dist) = dist.get(vertex) else {
            continue;
        };
        for road in graph.neighbors(vertex) {
            let previous = road.endpoint2();
            if blocked.contains(previous) || seen.contains(previous) {
                continue;
            }
            if dist
                .get(previous)
                .is_some_and(|known| known.saturating_add(road.length()) == vertex_dist)
            {
                seen.insert(previous);
                stack.push(previous);
            }
        }
    }

    false
}

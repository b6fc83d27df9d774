//! Structural and oracle properties for the minimum spanning forest.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Optimality**: total length matches the Prim oracle.
//! - **Acyclicity**: no accepted road joins two already-connected endpoints.
//! - **Edge count**: `V - C` roads for `C` connected components.
//! - **Order**: roads appear in ascending (length, id) order.
//! - **Material**: the forest is never longer than the network.
//! - **Reachability**: the query endpoints stay connected when they were
//!   connected in the input, and the reduced route is never shorter.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Road, barely_connected, fastest_route, test_utils::NetworkFixture, total_length};

use super::oracle::prim_forest;

pub(super) fn run_structural_invariants_property(fixture: &NetworkFixture) -> TestCaseResult {
    let forest = barely_connected(&fixture.roads).map_err(|err| {
        TestCaseError::fail(format!(
            "barely_connected failed: {err} (topology={:?}, roads={})",
            fixture.topology,
            fixture.roads.len(),
        ))
    })?;

    let oracle = prim_forest(fixture);
    if forest.total_length() != oracle.total_length {
        return Err(TestCaseError::fail(format!(
            "total length {} differs from oracle {} (topology={:?})",
            forest.total_length(),
            oracle.total_length,
            fixture.topology,
        )));
    }
    if forest.component_count() != oracle.component_count
        || forest.roads().len() != oracle.road_count
    {
        return Err(TestCaseError::fail(format!(
            "forest has {} roads in {} components, oracle has {} in {}",
            forest.roads().len(),
            forest.component_count(),
            oracle.road_count,
            oracle.component_count,
        )));
    }

    let network_length = total_length(&fixture.roads);
    if forest.total_length() > network_length {
        return Err(TestCaseError::fail(format!(
            "forest length {} exceeds network length {network_length}",
            forest.total_length(),
        )));
    }

    validate_sorted(forest.roads())?;
    validate_acyclicity(forest.roads())?;
    validate_edge_count(
        forest.endpoint_count(),
        forest.roads().len(),
        forest.component_count(),
    )?;
    validate_reachability(fixture, forest.roads())
}

fn validate_sorted(roads: &[Road]) -> TestCaseResult {
    for (index, pair) in roads.windows(2).enumerate() {
        if let [first, second] = pair {
            if first >= second {
                return Err(TestCaseError::fail(format!(
                    "roads {index} and {} are out of order",
                    index + 1
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclicity(roads: &[Road]) -> TestCaseResult {
    let mut parent: HashMap<&str, &str> = HashMap::new();
    fn root<'a>(parent: &mut HashMap<&'a str, &'a str>, node: &'a str) -> &'a str {
        let mut current = node;
        while let Some(&next) = parent.get(current) {
            if next == current {
                break;
            }
            current = next;
        }
        parent.insert(node, current);
        current
    }

    for (index, road) in roads.iter().enumerate() {
        let left = root(&mut parent, road.endpoint1());
        let right = root(&mut parent, road.endpoint2());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "road {index} ({road}) creates a cycle"
            )));
        }
        parent.insert(left, right);
        parent.entry(right).or_insert(right);
    }
    Ok(())
}

fn validate_edge_count(endpoint_count: usize, actual: usize, component_count: usize) -> TestCaseResult {
    let expected = endpoint_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "road count {actual}, expected n - c = {expected} (n={endpoint_count}, c={component_count})",
        )));
    }
    Ok(())
}

fn validate_reachability(fixture: &NetworkFixture, forest: &[Road]) -> TestCaseResult {
    let full = fastest_route(&fixture.roads, &fixture.start, &fixture.end)
        .map_err(|err| TestCaseError::fail(format!("full route failed: {err}")))?;
    let reduced = fastest_route(forest, &fixture.start, &fixture.end)
        .map_err(|err| TestCaseError::fail(format!("reduced route failed: {err}")))?;

    match (full, reduced) {
        (None, None) => Ok(()),
        (Some(full), Some(reduced)) if reduced.total_length() >= full.total_length() => Ok(()),
        (full, reduced) => Err(TestCaseError::fail(format!(
            "reduced route {:?} inconsistent with full route {:?}",
            reduced.map(|route| route.total_length()),
            full.map(|route| route.total_length()),
        ))),
    }
}

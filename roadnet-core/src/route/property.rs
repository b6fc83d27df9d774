//! Property-based tests for the fastest route search.
//!
//! Checks Dijkstra against an all-pairs oracle, verifies that every returned
//! route is a contiguous walk over input roads, and checks the id tie-break
//! step by step against a Bellman–Ford oracle.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::Road;
use crate::test_utils::{
    NetworkFixture, Topology, all_pairs_distances, distances_avoiding, generate_fixture,
    network_strategy, suite_proptest_config,
};

use super::{Route, fastest_route};

fn run_oracle_property(fixture: &NetworkFixture) -> TestCaseResult {
    let route = fastest_route(&fixture.roads, &fixture.start, &fixture.end)
        .map_err(|err| TestCaseError::fail(format!("fastest_route failed: {err}")))?;

    let (Some(start), Some(end)) = (
        fixture.index_of(&fixture.start),
        fixture.index_of(&fixture.end),
    ) else {
        return Err(TestCaseError::fail("query endpoints must be generated"));
    };
    let expected = all_pairs_distances(fixture)[start][end];

    match (route, expected) {
        (None, None) => Ok(()),
        (Some(route), Some(length)) => {
            prop_assert_eq!(
                route.total_length(),
                length,
                "topology={:?} start={} end={}",
                fixture.topology,
                fixture.start,
                fixture.end
            );
            validate_walk(fixture, &route)
        }
        (found, expected) => Err(TestCaseError::fail(format!(
            "reachability mismatch: found={:?} expected={expected:?} (topology={:?})",
            found.map(|route| route.total_length()),
            fixture.topology,
        ))),
    }
}

fn validate_walk(fixture: &NetworkFixture, route: &Route) -> TestCaseResult {
    let inputs: HashSet<&Road> = fixture.roads.iter().collect();
    let mut used = HashSet::new();
    let mut position: &str = &fixture.start;

    for (index, road) in route.iter().enumerate() {
        prop_assert!(
            inputs.contains(road),
            "road {index} ({road}) is not an input road"
        );
        prop_assert!(used.insert(road.id()), "road {} used twice", road.id());
        prop_assert_eq!(road.endpoint1(), position, "road {} is not contiguous", index);
        position = road.endpoint2();
    }

    prop_assert_eq!(position, &*fixture.end);
    let summed: u64 = route.iter().map(Road::length).sum();
    prop_assert_eq!(summed, route.total_length());
    Ok(())
}

/// Walks the route backwards and checks that each road is the lowest-id
/// road ending a shortest route to its endpoint that avoids every endpoint
/// already on the route.
fn run_tie_break_property(fixture: &NetworkFixture) -> TestCaseResult {
    let route = fastest_route(&fixture.roads, &fixture.start, &fixture.end)
        .map_err(|err| TestCaseError::fail(format!("fastest_route failed: {err}")))?;
    let Some(route) = route else {
        return Ok(());
    };
    let (Some(start), Some(end)) = (
        fixture.index_of(&fixture.start),
        fixture.index_of(&fixture.end),
    ) else {
        return Err(TestCaseError::fail("query endpoints must be generated"));
    };

    let mut blocked = vec![false; fixture.endpoints.len()];
    let full = distances_avoiding(fixture, start, &blocked);
    blocked[end] = true;
    let mut current = end;

    for road in route.iter().rev() {
        let Some(target) = full[current] else {
            return Err(TestCaseError::fail("route endpoint must be reachable"));
        };
        let reach = distances_avoiding(fixture, start, &blocked);
        let expected = fixture
            .roads
            .iter()
            .filter_map(|candidate| {
                let left = fixture.index_of(candidate.endpoint1())?;
                let right = fixture.index_of(candidate.endpoint2())?;
                let previous = if left == current {
                    right
                } else if right == current {
                    left
                } else {
                    return None;
                };
                (reach[previous]? + candidate.length() == target).then_some(candidate.id())
            })
            .min();

        prop_assert_eq!(
            Some(road.id()),
            expected,
            "road into {} (topology={:?})",
            fixture.endpoints[current],
            fixture.topology
        );
        let Some(previous) = fixture.index_of(road.endpoint1()) else {
            return Err(TestCaseError::fail("route roads must use generated endpoints"));
        };
        blocked[previous] = true;
        current = previous;
    }

    prop_assert_eq!(current, start);
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn fastest_route_matches_oracle(fixture in network_strategy()) {
        run_oracle_property(&fixture)?;
    }

    #[test]
    fn fastest_route_prefers_lower_ids_on_ties(fixture in network_strategy()) {
        run_tie_break_property(&fixture)?;
    }
}

#[rstest::rstest]
#[case::sparse(Topology::Sparse, 7)]
#[case::dense(Topology::Dense, 7)]
#[case::identical(Topology::ManyIdentical, 7)]
#[case::identical_other_seed(Topology::ManyIdentical, 4242)]
#[case::disconnected(Topology::Disconnected, 7)]
#[case::zero_length(Topology::ZeroLength, 7)]
fn fastest_route_matches_oracle_for_seed(#[case] topology: Topology, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(topology, &mut rng);
    run_oracle_property(&fixture).expect("oracle property must hold");
}

#[test]
fn fastest_route_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(99);
    let fixture = generate_fixture(Topology::ManyIdentical, &mut rng);
    let first = fastest_route(&fixture.roads, &fixture.start, &fixture.end)
        .expect("search must succeed");
    for _ in 0..10 {
        let again = fastest_route(&fixture.roads, &fixture.start, &fixture.end)
            .expect("search must succeed");
        assert_eq!(again, first);
    }
}

#[rstest::rstest]
#[case::identical_7(Topology::ManyIdentical, 7)]
#[case::identical_4242(Topology::ManyIdentical, 4242)]
#[case::zero_length_7(Topology::ZeroLength, 7)]
#[case::zero_length_31(Topology::ZeroLength, 31)]
#[case::zero_length_4242(Topology::ZeroLength, 4242)]
fn fastest_route_prefers_lower_ids_for_seed(#[case] topology: Topology, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(topology, &mut rng);
    run_tie_break_property(&fixture).expect("tie-break property must hold");
}

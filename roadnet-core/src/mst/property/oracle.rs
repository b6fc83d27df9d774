//! Prim oracle for minimum spanning forest verification.
//!
//! A dense O(n²) Prim over endpoint indices, grown once per component. It
//! shares no code with the Kruskal engine, so agreeing totals are meaningful.

use crate::test_utils::NetworkFixture;

/// Result of the Prim oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Summed length of the forest.
    pub total_length: u64,
    /// Number of roads in the forest.
    pub road_count: usize,
    /// Number of components among endpoints that appear on a road.
    pub component_count: usize,
}

pub(super) fn prim_forest(fixture: &NetworkFixture) -> OracleForest {
    let n = fixture.endpoints.len();
    let mut weights: Vec<Vec<Option<u64>>> = vec![vec![None; n]; n];
    let mut present = vec![false; n];

    for road in &fixture.roads {
        let (Some(left), Some(right)) = (
            fixture.index_of(road.endpoint1()),
            fixture.index_of(road.endpoint2()),
        ) else {
            continue;
        };
        present[left] = true;
        present[right] = true;
        let best = weights[left][right].map_or(road.length(), |known| known.min(road.length()));
        weights[left][right] = Some(best);
        weights[right][left] = Some(best);
    }

    let mut in_tree = vec![false; n];
    let mut total_length = 0;
    let mut road_count = 0;
    let mut component_count = 0;

    for root in 0..n {
        if !present[root] || in_tree[root] {
            continue;
        }
        component_count += 1;
        let mut best: Vec<Option<u64>> = vec![None; n];
        best[root] = Some(0);

        loop {
            let next = (0..n)
                .filter(|&node| !in_tree[node])
                .filter_map(|node| best[node].map(|cost| (cost, node)))
                .min();
            let Some((cost, node)) = next else {
                break;
            };
            in_tree[node] = true;
            if node != root {
                total_length += cost;
                road_count += 1;
            }
            for neighbour in 0..n {
                if in_tree[neighbour] {
                    continue;
                }
                if let Some(length) = weights[node][neighbour] {
                    if best[neighbour].is_none_or(|known| length < known) {
                        best[neighbour] = Some(length);
                    }
                }
            }
        }
    }

    OracleForest {
        total_length,
        road_count,
        component_count,
    }
}

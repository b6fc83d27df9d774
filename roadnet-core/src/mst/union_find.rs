//! Union-find over endpoint names for Kruskal's algorithm.
//!
//! Endpoints are registered with [`DisjointSet::make_set`] before any union.
//! `find` halves paths as it walks (each visited node is re-pointed at its
//! grandparent), and unions attach by rank.

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use crate::{Result, error::RoadNetError};

#[derive(Clone, Debug, Default)]
pub(super) struct DisjointSet {
    parents: HashMap<Arc<str>, Arc<str>>,
    ranks: HashMap<Arc<str>, u32>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            parents: HashMap::with_capacity(capacity),
            ranks: HashMap::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `endpoint` as a singleton set; known endpoints are left as
    /// they are.
    pub(super) fn make_set(&mut self, endpoint: &Arc<str>) {
        if let Entry::Vacant(slot) = self.parents.entry(Arc::clone(endpoint)) {
            slot.insert(Arc::clone(endpoint));
            self.ranks.insert(Arc::clone(endpoint), 0);
            self.components += 1;
        }
    }

    pub(super) fn len(&self) -> usize {
        self.parents.len()
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, endpoint: &str) -> Result<Arc<str>> {
        let mut current = Arc::clone(self.parent_of(endpoint)?.0);
        loop {
            let parent = Arc::clone(self.parent_of(&current)?.1);
            if parent == current {
                return Ok(current);
            }

            let grandparent = Arc::clone(self.parent_of(&parent)?.1);
            self.parents
                .insert(Arc::clone(&current), Arc::clone(&grandparent));
            current = grandparent;
        }
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when both already share a root, in which case nothing
    /// changes. On equal ranks the left root is attached under the right one.
    pub(super) fn try_union(&mut self, left: &str, right: &str) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;

        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(&left_root)?;
        let right_rank = self.rank_of(&right_root)?;

        let (parent, child) = if left_rank > right_rank {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        if left_rank == right_rank {
            self.ranks.insert(Arc::clone(&parent), right_rank.saturating_add(1));
        }
        self.parents.insert(child, parent);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    fn parent_of(&self, endpoint: &str) -> Result<(&Arc<str>, &Arc<str>)> {
        self.parents
            .get_key_value(endpoint)
            .ok_or_else(|| unknown_endpoint(endpoint))
    }

    fn rank_of(&self, endpoint: &str) -> Result<u32> {
        self.ranks
            .get(endpoint)
            .copied()
            .ok_or_else(|| unknown_endpoint(endpoint))
    }
}

fn unknown_endpoint(endpoint: &str) -> RoadNetError {
    RoadNetError::InvariantViolation {
        invariant: "union-find endpoint must be registered before use",
        endpoint: Arc::from(endpoint),
    }
}

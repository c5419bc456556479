// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbor graph construction.
//!
//! [`GraphBuilder`] turns a slice of [`FocusTarget`]s into a [`NavGraph`]: one
//! row per eligible target holding its chosen neighbor in each direction.
//! Building is a full `O(n²)` pass over eligible targets; nothing is cached
//! between builds, so a build always reflects the geometry reported at that
//! moment.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::metric::{LateralWeights, candidate_distance};
use crate::types::{Direction, FocusTarget, Neighbors};

/// Configuration for graph construction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GraphConfig {
    /// Lateral offset multipliers per direction.
    pub weights: LateralWeights,
}

/// One row of a [`NavGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEntry<K> {
    /// Identifier of the source target.
    pub id: K,
    /// Normalized bounds captured for this build.
    pub rect: Rect,
    /// Chosen neighbor in each direction.
    pub neighbors: Neighbors<K>,
}

/// Directional neighbor table produced by [`GraphBuilder`].
///
/// Rows are kept in the order the eligible targets were supplied.
#[derive(Clone, Debug)]
pub struct NavGraph<K> {
    entries: Vec<GraphEntry<K>>,
    index: HashMap<K, usize>,
}

impl<K> Default for NavGraph<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> NavGraph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (eligible targets in the last build).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the graph has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` has a row.
    pub fn contains(&self, id: K) -> bool {
        self.index.contains_key(&id)
    }

    /// All rows, in build order.
    pub fn entries(&self) -> &[GraphEntry<K>] {
        &self.entries
    }

    /// The row for `id`, if it was eligible in the last build.
    pub fn entry(&self, id: K) -> Option<&GraphEntry<K>> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// All four neighbors of `id`.
    pub fn neighbors(&self, id: K) -> Option<&Neighbors<K>> {
        self.entry(id).map(|e| &e.neighbors)
    }

    /// The neighbor of `id` in `direction`.
    pub fn neighbor(&self, id: K, direction: Direction) -> Option<K> {
        self.neighbors(id)?.get(direction)
    }

    /// Every directed edge as `(source, direction, neighbor)`, in build order.
    ///
    /// Useful for drawing the graph as an overlay.
    pub fn edges(&self) -> impl Iterator<Item = (K, Direction, K)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.neighbors.iter().map(move |(d, to)| (e.id, d, to)))
    }

    /// Remove all rows, keeping allocations.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    fn push(&mut self, id: K, rect: Rect) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(GraphEntry {
            id,
            rect,
            neighbors: Neighbors::default(),
        });
        true
    }
}

impl<K: Copy + Eq + Hash> PartialEq for NavGraph<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Builds [`NavGraph`]s from focus targets.
///
/// For every eligible source and direction the builder picks the eligible
/// target with the smallest [`candidate_distance`]. Ties go to the target that
/// appears first in the input slice.
#[derive(Copy, Clone, Debug, Default)]
pub struct GraphBuilder {
    /// Scoring configuration.
    pub config: GraphConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Build a fresh graph over `items`.
    pub fn build<K, T>(&self, items: &[T]) -> NavGraph<K>
    where
        K: Copy + Eq + Hash,
        T: FocusTarget<K>,
    {
        let mut graph = NavGraph::new();
        self.build_into(items, &mut graph);
        graph
    }

    /// Rebuild `out` over `items`, reusing its allocations.
    ///
    /// Bounds and eligibility are queried once per target. Only the first
    /// eligible target with a given id takes part; later duplicates are ignored.
    pub fn build_into<K, T>(&self, items: &[T], out: &mut NavGraph<K>)
    where
        K: Copy + Eq + Hash,
        T: FocusTarget<K>,
    {
        out.clear();
        for item in items {
            if item.is_eligible() {
                out.push(item.id(), item.bounds().abs());
            }
        }

        for i in 0..out.entries.len() {
            for direction in Direction::ALL {
                let best = self.best_candidate(
                    out.entries[i].rect,
                    direction,
                    out.entries
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, e)| (e.id, e.rect)),
                );
                out.entries[i].neighbors.set(direction, best);
            }
        }
    }

    /// Find the neighbor of `source` in `direction` without building a full graph.
    ///
    /// Gives the same answer as `self.build(items).neighbor(source, direction)`
    /// provided ids in `items` are unique. Returns `None` when `source` is absent
    /// or ineligible.
    pub fn neighbor<K, T>(&self, items: &[T], source: K, direction: Direction) -> Option<K>
    where
        K: Copy + Eq,
        T: FocusTarget<K>,
    {
        let origin = items
            .iter()
            .find(|item| item.id() == source && item.is_eligible())?
            .bounds()
            .abs();
        self.best_candidate(
            origin,
            direction,
            items
                .iter()
                .filter(|item| item.is_eligible())
                .map(|item| (item.id(), item.bounds().abs()))
                .filter(|&(id, _)| id != source),
        )
    }

    fn best_candidate<K>(
        &self,
        origin: Rect,
        direction: Direction,
        candidates: impl Iterator<Item = (K, Rect)>,
    ) -> Option<K> {
        let mut best: Option<(K, u64)> = None;
        for (id, rect) in candidates {
            let Some(distance) = candidate_distance(&self.config.weights, direction, origin, rect)
            else {
                continue;
            };
            // Strict comparison: the first minimum wins.
            if best.as_ref().is_none_or(|&(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        best.map(|(id, _)| id)
    }
}

//! disjoint_set.rs
//! Union-find over node labels, with path compression and union by rank
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::cmp::Ordering;

use rustc_hash::FxHashMap as HashMap;

/// Partition of a graph's node labels into disjoint sets.
///
/// Labels are borrowed from the graph, so a `DisjointSet` lives no longer than
/// the algorithm invocation that created it. Every operation adds to an
/// internal counter which the caller folds into its own work estimate.
#[derive(Debug, Clone)]
pub struct DisjointSet<'a> {
    labels: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
    operations: u64,
}

impl<'a> DisjointSet<'a> {
    /// Every label starts as its own singleton set with rank 0. A repeated
    /// label collapses into its first occurrence.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let iter = nodes.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = DisjointSet {
            labels: Vec::with_capacity(lower),
            index: HashMap::with_capacity_and_hasher(lower, Default::default()),
            parent: Vec::with_capacity(lower),
            rank: Vec::with_capacity(lower),
            sets: 0,
            operations: 0,
        };

        for node in iter {
            if set.index.contains_key(node) {
                continue;
            }
            let slot = set.labels.len();
            set.labels.push(node);
            set.index.insert(node, slot);
            set.parent.push(slot);
            set.rank.push(0);
            set.sets += 1;
            set.operations += 2; // parent + rank initialisation
        }
        set
    }

    /// Representative of the set containing `node`, or `None` for a label the
    /// structure was not built with.
    pub fn find(&mut self, node: &str) -> Option<&'a str> {
        let slot = *self.index.get(node)?;
        let root = self.find_slot(slot);
        Some(self.labels[root])
    }

    /// Merges the sets of `a` and `b`. Returns `false` when they already share
    /// a set or either label is unknown.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(&slot_a), Some(&slot_b)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let root_a = self.find_slot(slot_a);
        let root_b = self.find_slot(slot_b);
        self.operations += 2;

        if root_a == root_b {
            self.operations += 1;
            return false;
        }

        self.operations += 2; // rank reads
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => {
                self.parent[root_a] = root_b;
                self.operations += 1;
            }
            Ordering::Greater => {
                self.parent[root_b] = root_a;
                self.operations += 1;
            }
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
                self.operations += 2;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn rank(&self, node: &str) -> Option<u32> {
        self.index.get(node).map(|&slot| self.rank[slot])
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    // Iterative: climb to the root, then point every slot on the path at it.
    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        let mut steps = 0u64;
        while self.parent[root] != root {
            root = self.parent[root];
            steps += 1;
        }
        // root visit, plus visit + comparison + compression write per non-root slot
        self.operations += 1 + 3 * steps;

        let mut current = slot;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

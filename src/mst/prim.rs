//! mst/prim.rs
//! Vertex-growth minimum spanning forest (Prim) with a lazily pruned binary heap
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::FxHashSet as HashSet;

use super::{Operations, SpanningTreeAlgorithm, SpanningTreeResult, elapsed_millis};
use crate::debug;
use crate::graph::{Edge, Graph, Weight};

/// Grows one tree per connected component from the first unvisited node, in
/// graph node order. The visited set is shared by all components, which is
/// what turns the single-tree loop into a forest builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Prim;

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the lightest
/// edge first, and among equal weights the one pushed earliest.
#[derive(Debug)]
struct Candidate<'g> {
    weight: Weight,
    seq: u64,
    edge: &'g Edge,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-invocation working state.
struct Growth<'g> {
    graph: &'g Graph,
    visited: HashSet<&'g str>,
    heap: BinaryHeap<Candidate<'g>>,
    seq: u64,
    tree_edges: Vec<Edge>,
    ops: Operations,
}

impl<'g> Growth<'g> {
    fn new(graph: &'g Graph) -> Self {
        Growth {
            graph,
            visited: HashSet::with_capacity_and_hasher(graph.vertex_count(), Default::default()),
            heap: BinaryHeap::new(),
            seq: 0,
            tree_edges: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
            ops: Operations::default(),
        }
    }

    fn push(&mut self, edge: &'g Edge) {
        self.heap.push(Candidate {
            weight: edge.weight,
            seq: self.seq,
            edge,
        });
        self.seq += 1;
    }

    /// Runs the growth loop from `root` until its component is exhausted.
    fn grow_from(&mut self, root: &'g str) {
        let graph = self.graph;
        self.visited.insert(root);
        self.ops.tick();

        for edge in graph.neighbors(root) {
            self.push(edge);
            self.ops.tick();
        }

        while let Some(candidate) = self.heap.pop() {
            // queue check + removal
            self.ops.add(2);

            let edge = candidate.edge;
            let next = edge.to.as_str();
            // stale entry: the vertex was settled after this edge was queued
            if self.visited.contains(next) {
                self.ops.tick();
                continue;
            }

            self.tree_edges.push(edge.clone());
            self.visited.insert(next);
            self.ops.add(3);

            for incident in graph.neighbors(next) {
                self.ops.tick();
                if !self.visited.contains(incident.to.as_str()) {
                    self.ops.add(2);
                    self.push(incident);
                }
            }
        }
    }
}

impl SpanningTreeAlgorithm for Prim {
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn find_spanning_tree(&self, graph: &Graph) -> SpanningTreeResult {
        let start = Instant::now();

        if graph.is_empty() {
            return SpanningTreeResult::new(Vec::new(), 0, 0, elapsed_millis(start));
        }

        let mut growth = Growth::new(graph);
        let mut components = 0usize;
        for node in graph.nodes() {
            if growth.visited.contains(node.as_str()) {
                continue;
            }
            growth.ops.tick();
            components += 1;
            growth.grow_from(node);
        }

        let Growth {
            tree_edges, ops, ..
        } = growth;
        let total_weight: Weight = tree_edges.iter().map(|edge| edge.weight).sum();

        debug!(
            debug,
            graph = graph.id(),
            components,
            edges = tree_edges.len(),
            total_weight,
            "prim finished"
        );
        SpanningTreeResult::new(tree_edges, total_weight, ops.total(), elapsed_millis(start))
    }
}

//! mst/kruskal.rs
//! Edge-sorting minimum spanning forest (Kruskal) with union-find cycle detection
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::time::Instant;

use super::{Operations, SpanningTreeAlgorithm, SpanningTreeResult, elapsed_millis};
use crate::debug;
use crate::disjoint_set::DisjointSet;
use crate::graph::{Edge, Graph, Weight};

/// Sorts every edge by weight and accepts each one that joins two different
/// components. Disconnected input yields a minimum spanning forest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kruskal;

impl SpanningTreeAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn find_spanning_tree(&self, graph: &Graph) -> SpanningTreeResult {
        let start = Instant::now();
        let mut ops = Operations::default();

        if graph.is_empty() {
            return SpanningTreeResult::new(Vec::new(), 0, ops.total(), elapsed_millis(start));
        }

        // stable: equal weights keep their input order
        let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
        sorted.sort_by_key(|edge| edge.weight);
        ops.add(sort_cost(sorted.len()));

        let mut sets = DisjointSet::new(graph.nodes().iter().map(String::as_str));
        let target = graph.vertex_count() - 1;
        let mut tree_edges: Vec<Edge> = Vec::with_capacity(target);
        let mut total_weight: Weight = 0;

        for edge in sorted {
            ops.tick();
            if sets.connected(&edge.from, &edge.to) {
                continue;
            }
            ops.tick();

            tree_edges.push(edge.clone());
            total_weight += edge.weight;
            sets.union(&edge.from, &edge.to);
            ops.add(2);

            // A forest over V vertices with k components holds at most V - k
            // edges, so V - 1 accepted edges means the graph is connected.
            if tree_edges.len() == target {
                ops.tick();
                break;
            }
        }

        ops.add(sets.operations());

        debug!(
            debug,
            graph = graph.id(),
            edges = tree_edges.len(),
            total_weight,
            "kruskal finished"
        );
        SpanningTreeResult::new(tree_edges, total_weight, ops.total(), elapsed_millis(start))
    }
}

/// `floor(E * ln E)`, the modeled comparison work of the sort.
fn sort_cost(len: usize) -> u64 {
    if len < 2 {
        return 0;
    }
    let len = len as f64;
    (len * len.ln()) as u64
}

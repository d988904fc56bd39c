//! mst/mod.rs
//! Minimum spanning tree / forest algorithms and their shared result record
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

mod kruskal;
mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;

use std::fmt;
use std::time::Instant;

use crate::graph::{Edge, Graph, Weight};

/// A minimum spanning tree (or forest) algorithm.
///
/// Implementations are stateless: counters, timers and working structures
/// belong to a single `find_spanning_tree` call, so one value can serve any
/// number of graphs, from any number of threads.
pub trait SpanningTreeAlgorithm: Sync {
    fn name(&self) -> &'static str;

    fn find_spanning_tree(&self, graph: &Graph) -> SpanningTreeResult;
}

/// Output of one algorithm run: the selected edges in selection order plus
/// the two independent cost metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTreeResult {
    tree_edges: Vec<Edge>,
    total_weight: Weight,
    operation_count: u64,
    elapsed_millis: f64,
}

impl SpanningTreeResult {
    pub fn new(
        tree_edges: Vec<Edge>,
        total_weight: Weight,
        operation_count: u64,
        elapsed_millis: f64,
    ) -> Self {
        Self {
            tree_edges,
            total_weight,
            operation_count,
            elapsed_millis,
        }
    }

    pub fn tree_edges(&self) -> &[Edge] {
        &self.tree_edges
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_millis
    }

    pub fn edge_count(&self) -> usize {
        self.tree_edges.len()
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.tree_edges
    }
}

impl fmt::Display for SpanningTreeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MST Total Cost: {}", self.total_weight)?;
        writeln!(f, "Operations Count: {}", self.operation_count)?;
        writeln!(f, "Execution Time: {:.2} ms", self.elapsed_millis)?;
        writeln!(f, "MST Edges:")?;
        for edge in &self.tree_edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}

/// Abstract work counter, local to one invocation.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Operations(u64);

impl Operations {
    #[inline]
    pub(crate) fn tick(&mut self) {
        self.0 += 1;
    }

    #[inline]
    pub(crate) fn add(&mut self, n: u64) {
        self.0 += n;
    }

    pub(crate) fn total(self) -> u64 {
        self.0
    }
}

/// Wall-clock milliseconds since `start`.
pub(crate) fn elapsed_millis(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_result_accessors() {
        let result = SpanningTreeResult::new(
            vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)],
            3,
            42,
            0.5,
        );

        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.total_weight(), 3);
        assert_eq!(result.operation_count(), 42);
        assert_eq!(result.elapsed_millis(), 0.5);
        assert_eq!(result.tree_edges()[1], Edge::new("B", "C", 2));
    }

    #[test]
    fn test_result_display() {
        let result = SpanningTreeResult::new(vec![Edge::new("A", "B", 7)], 7, 10, 1.234);

        let text = result.to_string();
        assert!(text.contains("MST Total Cost: 7"));
        assert!(text.contains("Operations Count: 10"));
        assert!(text.contains("Execution Time: 1.23 ms"));
        assert!(text.contains("  A - B (7)"));
    }

    #[test]
    fn test_operations_accumulate() {
        let mut ops = Operations::default();
        ops.tick();
        ops.add(4);

        assert_eq!(ops.total(), 5);
    }
}

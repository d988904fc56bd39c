//! report/mod.rs
//! Runs both algorithms on a graph and compares their results
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::fmt::Write;

use rayon::prelude::*;

use crate::debug;
use crate::graph::{Graph, GraphId};
use crate::mst::{Kruskal, Prim, SpanningTreeAlgorithm, SpanningTreeResult};

/// Both algorithm results for one input graph.
#[derive(Debug, Clone)]
pub struct GraphReport {
    pub graph_id: GraphId,
    pub vertices: usize,
    pub edges: usize,
    pub prim: SpanningTreeResult,
    pub kruskal: SpanningTreeResult,
}

impl GraphReport {
    pub fn comparison(&self) -> Comparison {
        Comparison::between(&self.prim, &self.kruskal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faster {
    Prim,
    Kruskal,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub costs_match: bool,
    /// `prim - kruskal`
    pub operation_diff: i128,
    pub operation_percent: f64,
    pub time_diff_ms: f64,
    pub time_percent: f64,
    pub faster: Faster,
}

impl Comparison {
    pub fn between(prim: &SpanningTreeResult, kruskal: &SpanningTreeResult) -> Self {
        let prim_ops = prim.operation_count();
        let kruskal_ops = kruskal.operation_count();
        let operation_diff = i128::from(prim_ops) - i128::from(kruskal_ops);
        let operation_percent = percent_of(
            operation_diff.unsigned_abs() as f64,
            prim_ops.min(kruskal_ops) as f64,
        );

        let time_diff_ms = prim.elapsed_millis() - kruskal.elapsed_millis();
        let time_percent = percent_of(
            time_diff_ms.abs(),
            prim.elapsed_millis().min(kruskal.elapsed_millis()),
        );

        let faster = if time_diff_ms < 0.0 {
            Faster::Prim
        } else if time_diff_ms > 0.0 {
            Faster::Kruskal
        } else {
            Faster::Tie
        };

        Comparison {
            costs_match: prim.total_weight() == kruskal.total_weight(),
            operation_diff,
            operation_percent,
            time_diff_ms,
            time_percent,
            faster,
        }
    }
}

fn percent_of(diff: f64, base: f64) -> f64 {
    if base > 0.0 { diff * 100.0 / base } else { 0.0 }
}

/// Runs both algorithms on `graph`.
pub fn analyze(graph: &Graph) -> GraphReport {
    let prim = Prim.find_spanning_tree(graph);
    let kruskal = Kruskal.find_spanning_tree(graph);

    if prim.total_weight() != kruskal.total_weight() {
        debug!(
            err,
            graph = graph.id(),
            prim = prim.total_weight(),
            kruskal = kruskal.total_weight(),
            "spanning tree costs differ"
        );
    }

    GraphReport {
        graph_id: graph.id(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        prim,
        kruskal,
    }
}

/// Analyzes every graph, keeping input order. With `parallel` the graphs are
/// spread over the rayon pool; timings then include contention with siblings.
pub fn analyze_all(graphs: &[Graph], parallel: bool) -> Vec<GraphReport> {
    if parallel {
        graphs.par_iter().map(analyze).collect()
    } else {
        graphs.iter().map(analyze).collect()
    }
}

/// Human readable block for one graph.
pub fn render_summary(report: &GraphReport) -> String {
    let rule = "-".repeat(80);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Processing Graph #{}: {} vertices, {} edges",
        report.graph_id, report.vertices, report.edges
    );
    let _ = writeln!(out, "{rule}");

    render_algorithm(&mut out, Prim.name(), &report.prim);
    render_algorithm(&mut out, Kruskal.name(), &report.kruskal);

    let cmp = report.comparison();
    let _ = writeln!(out, "\n* Verification:");
    if cmp.costs_match {
        let _ = writeln!(out, "   MST costs match: {}", report.prim.total_weight());
    } else {
        let _ = writeln!(
            out,
            "   WARNING: MST costs differ! Prim: {}, Kruskal: {}",
            report.prim.total_weight(),
            report.kruskal.total_weight()
        );
    }

    let _ = writeln!(out, "\n* Performance Comparison:");
    let _ = writeln!(
        out,
        "   Operations: Prim={}, Kruskal={} (diff: {}, {:.1}%)",
        group_thousands(i128::from(report.prim.operation_count())),
        group_thousands(i128::from(report.kruskal.operation_count())),
        signed(group_thousands(cmp.operation_diff), cmp.operation_diff >= 0),
        cmp.operation_percent
    );
    let _ = writeln!(
        out,
        "   Time: Prim={:.3} ms, Kruskal={:.3} ms (diff: {:+.3} ms, {:.1}%)",
        report.prim.elapsed_millis(),
        report.kruskal.elapsed_millis(),
        cmp.time_diff_ms,
        cmp.time_percent
    );
    let winner = match cmp.faster {
        Faster::Prim => "Prim",
        Faster::Kruskal => "Kruskal",
        Faster::Tie => "Tie",
    };
    let _ = writeln!(out, "   Faster algorithm: {winner}");
    out
}

fn render_algorithm(out: &mut String, name: &str, result: &SpanningTreeResult) {
    let _ = writeln!(out, "\n* {name}'s Algorithm");
    let _ = writeln!(out, "   Total Cost: {}", result.total_weight());
    let _ = writeln!(
        out,
        "   Operations: {}",
        group_thousands(i128::from(result.operation_count()))
    );
    let _ = writeln!(out, "   Execution Time: {:.3} ms", result.elapsed_millis());
    let _ = writeln!(out, "   MST Edges ({}):", result.edge_count());
    for (i, edge) in result.tree_edges().iter().enumerate() {
        let _ = writeln!(out, "      {}. {edge}", i + 1);
    }
}

fn signed(text: String, non_negative: bool) -> String {
    if non_negative { format!("+{text}") } else { text }
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

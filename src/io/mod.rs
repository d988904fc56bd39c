//! io/mod.rs
//! JSON documents for graph batches and algorithm results
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::debug;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, GraphId, NodeId, Weight};
use crate::mst::SpanningTreeResult;
use crate::report::GraphReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    pub graphs: Vec<GraphDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub id: GraphId,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn into_graph(self) -> Result<Graph> {
        Graph::new(self.id, self.nodes, self.edges)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub results: Vec<GraphResultDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphResultDocument {
    pub graph_id: GraphId,
    pub input_stats: InputStats,
    pub prim: AlgorithmDocument,
    pub kruskal: AlgorithmDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmDocument {
    pub mst_edges: Vec<Edge>,
    pub total_cost: Weight,
    pub operations_count: u64,
    pub execution_time_ms: f64,
}

impl From<&SpanningTreeResult> for AlgorithmDocument {
    fn from(result: &SpanningTreeResult) -> Self {
        AlgorithmDocument {
            mst_edges: result.tree_edges().to_vec(),
            total_cost: result.total_weight(),
            operations_count: result.operation_count(),
            execution_time_ms: round_millis(result.elapsed_millis()),
        }
    }
}

/// Two decimal places, half away from zero.
pub fn round_millis(millis: f64) -> f64 {
    (millis * 100.0).round() / 100.0
}

/// Parses a `{"graphs": [...]}` document and validates every graph in it.
pub fn parse_graphs(json: &str) -> Result<Vec<Graph>> {
    let document: InputDocument = serde_json::from_str(json)?;
    document
        .graphs
        .into_iter()
        .map(GraphDocument::into_graph)
        .collect()
}

pub fn read_graphs(path: impl AsRef<Path>) -> Result<Vec<Graph>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graphs = parse_graphs(&json)?;
    debug!(info, count = graphs.len(), path = %path.display(), "graphs loaded");
    Ok(graphs)
}

pub fn to_output_document(reports: &[GraphReport]) -> OutputDocument {
    OutputDocument {
        results: reports
            .iter()
            .map(|report| GraphResultDocument {
                graph_id: report.graph_id,
                input_stats: InputStats {
                    vertices: report.vertices,
                    edges: report.edges,
                },
                prim: AlgorithmDocument::from(&report.prim),
                kruskal: AlgorithmDocument::from(&report.kruskal),
            })
            .collect(),
    }
}

/// Writes the pretty-printed results document, in report order. The document
/// is rendered in memory first, so every write failure carries the path.
pub fn write_results(path: impl AsRef<Path>, reports: &[GraphReport]) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_vec_pretty(&to_output_document(reports))?;
    json.push(b'\n');
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(info, count = reports.len(), path = %path.display(), "results written");
    Ok(())
}

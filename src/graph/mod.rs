//! graph/mod.rs
//! Weighted undirected graph definitions
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2024 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::fmt;

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::debug;
use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};

pub type NodeId = String;
pub type GraphId = i64;
pub type Weight = i64;

/// A single undirected road between two districts. The graph stores one
/// record per logical edge; direction only matters inside the adjacency map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Same edge, seen from the `to` endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    adjacency_list: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Builds the graph and its adjacency cache. Every edge endpoint has to be
    /// listed in `nodes`, otherwise `Error::MissingEndpoint` is returned.
    /// Graphs whose absolute weights sum past `Weight::MAX` are rejected with
    /// `Error::WeightOverflow`, so no spanning tree total can overflow.
    pub fn new(id: GraphId, nodes: Vec<NodeId>, edges: Vec<Edge>) -> Result<Self> {
        if weight_bound(&edges).is_none() {
            return Err(Error::WeightOverflow { graph_id: id });
        }
        let adjacency_list = build_adjacency(id, &nodes, &edges)?;
        debug!(
            trace,
            graph = id,
            vertices = nodes.len(),
            edges = edges.len(),
            "graph built"
        );

        Ok(Graph {
            id,
            nodes,
            edges,
            adjacency_list,
        })
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn adjacency_list(&self) -> &HashMap<NodeId, Vec<Edge>> {
        &self.adjacency_list
    }

    /// Incident edges of `node`, each oriented away from it.
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency_list.get(node).map_or(&[], |x| x)
    }

    pub fn degree(&self, node: &str) -> usize {
        self.neighbors(node).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of connected components. Isolated vertices count as one each.
    pub fn component_count(&self) -> usize {
        let mut sets = DisjointSet::new(self.nodes.iter().map(String::as_str));
        for edge in &self.edges {
            sets.union(&edge.from, &edge.to);
        }
        sets.set_count()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph{{id={}, vertices={}, edges={}}}",
            self.id,
            self.vertex_count(),
            self.edge_count()
        )
    }
}

/// Sum of `|weight|` over all edges, `None` on overflow.
fn weight_bound(edges: &[Edge]) -> Option<Weight> {
    edges.iter().try_fold(0 as Weight, |acc, edge| {
        edge.weight.checked_abs().and_then(|w| acc.checked_add(w))
    })
}

fn build_adjacency(
    id: GraphId,
    nodes: &[NodeId],
    edges: &[Edge],
) -> Result<HashMap<NodeId, Vec<Edge>>> {
    let mut adjacency_list: HashMap<NodeId, Vec<Edge>> =
        HashMap::with_capacity_and_hasher(nodes.len(), Default::default());
    for node in nodes {
        adjacency_list.insert(node.clone(), Vec::new());
    }

    for edge in edges {
        // both endpoints are checked before either list is touched
        if !adjacency_list.contains_key(&edge.to) {
            return Err(Error::MissingEndpoint {
                graph_id: id,
                endpoint: edge.to.clone(),
            });
        }
        match adjacency_list.get_mut(&edge.from) {
            Some(incident) => incident.push(edge.clone()),
            None => {
                return Err(Error::MissingEndpoint {
                    graph_id: id,
                    endpoint: edge.from.clone(),
                });
            }
        }
        if let Some(incident) = adjacency_list.get_mut(&edge.to) {
            incident.push(edge.reversed());
        }
    }

    Ok(adjacency_list)
}

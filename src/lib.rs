//! lib.rs
//! Minimum spanning tree / forest analysis for city transportation networks
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html
// ================================================================================================
mod macros;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod io;
pub mod mst;
pub mod report;
// ================================================================================================
pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphId, NodeId, Weight};
pub use mst::{Kruskal, Prim, SpanningTreeAlgorithm, SpanningTreeResult};
pub use report::{GraphReport, analyze, analyze_all};
// ================================================================================================

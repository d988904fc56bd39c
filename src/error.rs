//! error.rs
//! Error taxonomy shared by the graph model and the document collaborators
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::path::PathBuf;

use crate::graph::GraphId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph {graph_id} contains an edge with a missing endpoint: {endpoint}")]
    MissingEndpoint { graph_id: GraphId, endpoint: String },

    #[error("graph {graph_id} has edge weights whose total does not fit in 64 bits")]
    WeightOverflow { graph_id: GraphId },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

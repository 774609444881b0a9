use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Configuration for [`crate::ShortestPathRunner`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Scan every edge for negative weights before running
    pub validate_weights: bool,

    /// Stop as soon as this vertex is settled
    pub target: Option<VertexId>,

    /// Stop after this many vertices are settled
    pub max_settled: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            validate_weights: true,
            target: None,
            max_settled: None,
        }
    }
}

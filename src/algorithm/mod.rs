pub mod traits;
pub mod config;
pub mod dijkstra;

pub use traits::{RunResult, RunSummary, ShortestPathAlgorithm, VertexSummary};

//! Dijkstra Core - single-source shortest paths on directed, non-negatively weighted graphs
//!
//! The crate is built from three pieces that together give the classic
//! O((V + E) log V) bound:
//!
//! - a directed adjacency-list graph ([`DirectedGraph`]),
//! - a binary heap that can locate an entry by its vertex and decrease its key
//!   in place ([`PriorityMap`]),
//! - a per-vertex state table built once over a fixed id set with true O(1)
//!   access ([`VertexState`], backed by [`VertexIndex`]).
//!
//! [`ShortestPathRunner`] drives them and hands back a [`RunResult`] that the
//! caller owns and queries for distances and paths.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    config::RunnerConfig,
    dijkstra::{RunStep, ShortestPathRunner},
    RunResult, RunSummary, ShortestPathAlgorithm,
};
pub use data_structures::{Distance, PriorityMap, VertexIndex, VertexRecord, VertexState};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, MutableGraph, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex ID: {0}")]
    UnknownVertex(VertexId),

    #[error("Vertex ID registered twice: {0}")]
    DuplicateVertex(VertexId),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: String,
    },

    #[error("Non-finite edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: String,
    },

    #[error("Extract-min called on an empty priority map")]
    EmptyQueue,

    #[error("Vertex {0} is already queued")]
    DuplicatePayload(VertexId),

    #[error("Heap position {0} is out of range")]
    InvalidPosition(usize),

    #[error("Decrease-key would raise key at position {position} from {current} to {requested}")]
    InvalidDecrease {
        position: usize,
        current: String,
        requested: String,
    },

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: VertexId, to: VertexId },

    #[error("Could not build a perfect hash over {0} vertex IDs")]
    IndexConstruction(usize),

    #[error("Predecessor chain from vertex {0} does not reach the source")]
    CorruptPredecessors(VertexId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

//! Dijkstra Trace - dense-matrix single-source shortest paths
//!
//! This library implements the classic array-scan variant of Dijkstra's algorithm
//! over a V×V weight matrix. Every round settles one vertex and emits a
//! [`trace::RoundEvent`] describing the settled vertex and the tentative distances
//! still left in the fringe, so callers can render the computation step by step.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod trace;

pub use algorithm::{
    dijkstra::{Dijkstra, RoundOutcome, ShortestPathEngine},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{FringeRecord, FringeSet};
pub use graph::{Graph, MutableGraph, Weight, WeightMatrix};
pub use trace::{RoundEvent, TraceSink};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {0} is not in the fringe")]
    NotFound(usize),

    #[error("Fringe is empty")]
    EmptySet,

    #[error("Trace output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Trace serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

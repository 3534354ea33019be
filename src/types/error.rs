//! Error types for the point-graph library.

use thiserror::Error;

use super::Point;

/// All errors that can occur in the point-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The point was never used as the first argument of a union.
    #[error("Key {0} not found in the graph")]
    KeyNotFound(Point),

    /// Text could not be parsed as a point.
    #[error("Invalid point: {0:?} (expected \"x,y\" or \"(x, y)\")")]
    InvalidPoint(String),

    /// Text could not be parsed as an edge.
    #[error("Invalid edge: {0:?} (expected \"x,y->x,y\")")]
    InvalidEdge(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for point-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

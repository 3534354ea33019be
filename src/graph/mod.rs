//! In-memory graph operations, the core data structure.

pub mod builder;
pub mod observer;
pub mod point_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use observer::{
    ConsoleObserver, GraphEvent, GraphObserver, LogObserver, RecordingObserver, SilentObserver,
};
pub use point_graph::{AdjacencyEntry, GraphSnapshot, PointGraph};
pub use traversal::{bfs_reachable, shortest_path};

//! Point graph: a directed adjacency-list graph keyed by 2D integer points.
//!
//! `union_(a, b)` records the one-way edge `a -> b`; `find_(a, b)` asks
//! whether `b` is a direct, recorded neighbor of `a`. Neither is disjoint-set
//! union-find: there is no merging and `find_` never follows paths. Use
//! [`PointGraph::is_connected`] for transitive reachability.

pub mod cli;
pub mod graph;
pub mod order;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_reachable, shortest_path, AdjacencyEntry, ConsoleObserver, GraphBuilder, GraphEvent,
    GraphObserver, GraphSnapshot, LogObserver, PointGraph, RecordingObserver, SilentObserver,
};
pub use order::{ForwardDisjunctive, Lexicographic, OrderKind, PointOrder, ReversedDisjunctive};
pub use types::{Edge, GraphError, GraphResult, Point};

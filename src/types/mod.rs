//! Value types shared across the point-graph library.

pub mod edge;
pub mod error;
pub mod point;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use point::Point;

/// Console message printed by `print_graph` on an empty graph.
pub const EMPTY_GRAPH_MESSAGE: &str = "Graph is empty, hmm! Care to fill it yet? ;)";

/// Console message printed when `find_` is asked about an unknown key.
pub const MISSING_KEY_MESSAGE: &str = "First object not found in the graph";

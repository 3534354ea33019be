//! Fluent API for building PointGraph instances.

use crate::order::{PointOrder, ReversedDisjunctive};
use crate::types::{Edge, Point};

use super::observer::{GraphObserver, LogObserver};
use super::PointGraph;

/// Fluent builder for constructing a PointGraph.
///
/// Edges are replayed through `union_` on `build`, so the observer sees the
/// same key-created notifications as incremental construction.
pub struct GraphBuilder<C = ReversedDisjunctive, O = LogObserver> {
    order: C,
    observer: O,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder with the default ordering and logging observer.
    pub fn new() -> Self {
        Self {
            order: ReversedDisjunctive,
            observer: LogObserver,
            edges: Vec::new(),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PointOrder, O: GraphObserver> GraphBuilder<C, O> {
    /// Use a different key ordering.
    pub fn order<C2: PointOrder>(self, order: C2) -> GraphBuilder<C2, O> {
        GraphBuilder {
            order,
            observer: self.observer,
            edges: self.edges,
        }
    }

    /// Use a different observer.
    pub fn observer<O2: GraphObserver>(self, observer: O2) -> GraphBuilder<C, O2> {
        GraphBuilder {
            order: self.order,
            observer,
            edges: self.edges,
        }
    }

    /// Queue the directed edge `a -> b`.
    pub fn edge(mut self, a: Point, b: Point) -> Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Queue several edges, in order.
    pub fn edges<I: IntoIterator<Item = Edge>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build the graph.
    pub fn build(self) -> PointGraph<C, O> {
        let mut graph = PointGraph::with_parts(self.order, self.observer);
        for edge in self.edges {
            graph.union_(edge.source, edge.target);
        }
        graph
    }
}

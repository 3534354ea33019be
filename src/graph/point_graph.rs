//! Core graph structure: point keys with ordered adjacency lists.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::order::{PointOrder, ReversedDisjunctive};
use crate::types::{Edge, GraphError, GraphResult, Point, EMPTY_GRAPH_MESSAGE};

use super::observer::{GraphObserver, LogObserver};

/// One key of the graph and every point it was linked to, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyEntry {
    pub key: Point,
    pub neighbors: Vec<Point>,
}

/// Serializable view of a graph, keys in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub order: &'static str,
    pub key_count: usize,
    pub edge_count: usize,
    pub entries: Vec<AdjacencyEntry>,
}

/// Directed adjacency-list graph keyed by `Point`.
///
/// Keys are positioned by the ordering `C`; diagnostics go to the observer
/// `O`. A key exists iff `union_` was called with it as the first argument.
/// Key identity is comparator equivalence (neither sorts before the other);
/// the first point inserted for an equivalence class is the stored key.
/// Neighbor lists keep duplicates. Nothing is ever removed.
///
/// Not synchronized: share across threads only behind external locking.
#[derive(Debug, Clone, Default)]
pub struct PointGraph<C = ReversedDisjunctive, O = LogObserver> {
    /// Entries positioned by `order`.
    entries: Vec<AdjacencyEntry>,
    order: C,
    observer: O,
}

impl PointGraph {
    /// Create an empty graph with the default ordering, logging diagnostics.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: PointOrder, O: GraphObserver> PointGraph<C, O> {
    /// Create an empty graph with an explicit ordering and observer.
    pub fn with_parts(order: C, observer: O) -> Self {
        Self {
            entries: Vec::new(),
            order,
            observer,
        }
    }

    /// Record the directed edge `a -> b`.
    ///
    /// Creates key `a` (and notifies the observer) if absent, otherwise
    /// appends `b` to its neighbors. `b` gains no entry.
    pub fn union_(&mut self, a: Point, b: Point) {
        match self.locate(&a) {
            Ok(idx) => self.entries[idx].neighbors.push(b),
            Err(pos) => {
                self.observer.key_created(&a);
                self.entries.insert(
                    pos,
                    AdjacencyEntry {
                        key: a,
                        neighbors: vec![b],
                    },
                );
            }
        }
    }

    /// One-hop membership: is `b` among the recorded neighbors of `a`?
    ///
    /// An absent `a` notifies the observer and yields `false`, same as a
    /// present `a` without `b`. Does not follow edges transitively; see
    /// [`PointGraph::is_connected`] for that.
    pub fn find_(&self, a: Point, b: Point) -> bool {
        match self.lookup(&a, &b) {
            Ok(found) => found,
            Err(_) => {
                self.observer.missing_key(&a);
                false
            }
        }
    }

    /// Structured `find_`: distinguishes a missing key, no notification.
    pub fn lookup(&self, a: &Point, b: &Point) -> GraphResult<bool> {
        Ok(self.neighbors(a)?.contains(b))
    }

    /// `find_` without the missing-key notification.
    pub fn is_direct_neighbor(&self, a: &Point, b: &Point) -> bool {
        self.lookup(a, b).unwrap_or(false)
    }

    /// Neighbors of `key` in insertion order.
    pub fn neighbors(&self, key: &Point) -> GraphResult<&[Point]> {
        self.locate(key)
            .map(|idx| self.entries[idx].neighbors.as_slice())
            .map_err(|_| GraphError::KeyNotFound(*key))
    }

    /// Print the dump (or the empty-graph message) to stdout.
    pub fn print_graph(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_dump(&mut out) {
            log::error!("Failed to print graph: {err}");
        }
    }

    /// Write exactly what `print_graph` prints.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> GraphResult<()> {
        if self.is_empty() {
            writeln!(out, "{EMPTY_GRAPH_MESSAGE}")?;
        } else {
            writeln!(out, "{self}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// `print_graph` output as a string.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        self.write_dump(&mut buf).ok();
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn contains_key(&self, key: &Point) -> bool {
        self.locate(key).is_ok()
    }

    /// Number of keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of recorded edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|e| e.neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in store order.
    pub fn keys(&self) -> impl Iterator<Item = &Point> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    /// Entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry> + '_ {
        self.entries.iter()
    }

    /// Every recorded edge, keys in store order, neighbors in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.neighbors.iter().map(move |n| Edge::new(e.key, *n)))
    }

    pub fn order(&self) -> &C {
        &self.order
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            order: self.order.name(),
            key_count: self.key_count(),
            edge_count: self.edge_count(),
            entries: self.entries.clone(),
        }
    }

    /// Lower-bound position of `key` under the ordering.
    fn lower_bound(&self, key: &Point) -> usize {
        self.entries
            .partition_point(|e| self.order.less(&e.key, key))
    }

    /// `Ok(index)` of the entry for `key`, or `Err(insert position)`.
    fn locate(&self, key: &Point) -> Result<usize, usize> {
        let pos = self.lower_bound(key);
        if let Some(entry) = self.entries.get(pos) {
            if self.order.equivalent(&entry.key, key) {
                return Ok(pos);
            }
        }
        if self.order.is_total() {
            return Err(pos);
        }
        // Fallback: linear scan (the ordering may not partition the store)
        match self
            .entries
            .iter()
            .position(|e| self.order.equivalent(&e.key, key))
        {
            Some(idx) => Ok(idx),
            None => Err(pos),
        }
    }
}

/// The classic dump: `Key:` line, then `Connected to:` with every neighbor
/// followed by a space. No line break separates successive keys.
impl<C, O> fmt::Display for PointGraph<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Key: {}", entry.key)?;
            write!(f, "Connected to: ")?;
            for neighbor in &entry.neighbors {
                write!(f, "{neighbor} ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::observer::{GraphEvent, RecordingObserver};
    use crate::order::Lexicographic;

    fn recording() -> PointGraph<ReversedDisjunctive, RecordingObserver> {
        PointGraph::with_parts(ReversedDisjunctive, RecordingObserver::new())
    }

    #[test]
    fn reversed_order_places_larger_points_first() {
        let mut graph = recording();
        graph.union_(Point::new(2, 3), Point::new(0, 0));
        graph.union_(Point::new(3, 3), Point::new(0, 0));
        graph.union_(Point::new(4, 4), Point::new(0, 0));
        let keys: Vec<Point> = graph.keys().copied().collect();
        assert_eq!(
            keys,
            vec![Point::new(4, 4), Point::new(3, 3), Point::new(2, 3)]
        );
    }

    #[test]
    fn lexicographic_order_is_ascending() {
        let mut graph = PointGraph::with_parts(Lexicographic, RecordingObserver::new());
        graph.union_(Point::new(4, 4), Point::new(0, 0));
        graph.union_(Point::new(2, 3), Point::new(0, 0));
        graph.union_(Point::new(2, 1), Point::new(0, 0));
        let keys: Vec<Point> = graph.keys().copied().collect();
        assert_eq!(
            keys,
            vec![Point::new(2, 1), Point::new(2, 3), Point::new(4, 4)]
        );
    }

    #[test]
    fn inconsistent_order_never_duplicates_keys() {
        let mut graph = recording();
        let pts = [
            Point::new(0, 1),
            Point::new(1, 0),
            Point::new(-3, 5),
            Point::new(5, -3),
            Point::new(2, 2),
        ];
        for _ in 0..3 {
            for a in pts {
                for b in pts {
                    graph.union_(a, b);
                }
            }
        }
        assert_eq!(graph.key_count(), pts.len());
        assert_eq!(graph.edge_count(), 3 * pts.len() * pts.len());
        for a in pts {
            assert!(graph.contains_key(&a));
            assert_eq!(graph.neighbors(&a).unwrap().len(), 3 * pts.len());
        }
        let created = graph
            .observer()
            .events()
            .into_iter()
            .filter(|e| matches!(e, GraphEvent::KeyCreated(_)))
            .count();
        assert_eq!(created, pts.len());
    }

    #[test]
    fn display_concatenates_keys_without_separator() {
        let mut graph = recording();
        graph.union_(Point::new(3, 3), Point::new(1, 1));
        graph.union_(Point::new(2, 3), Point::new(4, 4));
        assert_eq!(
            graph.to_string(),
            "Key: (3, 3)\nConnected to: (1, 1) Key: (2, 3)\nConnected to: (4, 4) "
        );
    }

    /// Orders by `x` only, so points sharing `x` are one key.
    struct ByX;

    impl PointOrder for ByX {
        fn less(&self, a: &Point, b: &Point) -> bool {
            a.x < b.x
        }

        fn name(&self) -> &'static str {
            "by_x"
        }
    }

    #[test]
    fn key_identity_follows_order_equivalence() {
        let mut graph = PointGraph::with_parts(ByX, RecordingObserver::new());
        graph.union_(Point::new(1, 0), Point::new(9, 9));
        graph.union_(Point::new(1, 5), Point::new(8, 8));
        graph.union_(Point::new(0, 7), Point::new(7, 7));

        assert_eq!(
            graph.keys().copied().collect::<Vec<_>>(),
            vec![Point::new(0, 7), Point::new(1, 0)]
        );
        assert_eq!(
            graph.neighbors(&Point::new(1, 5)).unwrap(),
            &[Point::new(9, 9), Point::new(8, 8)]
        );
        assert!(graph.find_(Point::new(1, -3), Point::new(8, 8)));
        assert_eq!(
            graph.observer().events(),
            vec![
                GraphEvent::KeyCreated(Point::new(1, 0)),
                GraphEvent::KeyCreated(Point::new(0, 7)),
            ]
        );
    }
}

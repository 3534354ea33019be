//! Transitive reachability (BFS) over directed edges.
//!
//! Kept apart from `find_`, which only ever answers the one-hop question.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::order::PointOrder;
use crate::types::{GraphError, GraphResult, Point};

use super::observer::GraphObserver;
use super::PointGraph;

/// Every point reachable from `start` by following one or more edges, in
/// BFS discovery order. `start` appears only if a cycle leads back to it.
pub fn bfs_reachable<C: PointOrder, O: GraphObserver>(
    graph: &PointGraph<C, O>,
    start: &Point,
) -> GraphResult<Vec<Point>> {
    if !graph.contains_key(start) {
        return Err(GraphError::KeyNotFound(*start));
    }

    let mut visited: HashSet<Point> = HashSet::new();
    let mut order: Vec<Point> = Vec::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    queue.push_back(*start);

    while let Some(current) = queue.pop_front() {
        // Points that were never a union source have no outgoing edges.
        let Ok(neighbors) = graph.neighbors(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.insert(*neighbor) {
                order.push(*neighbor);
                queue.push_back(*neighbor);
            }
        }
    }

    Ok(order)
}

/// Shortest directed path `from -> ... -> to`, both ends included.
/// A point always has the zero-length path to itself.
pub fn shortest_path<C: PointOrder, O: GraphObserver>(
    graph: &PointGraph<C, O>,
    from: &Point,
    to: &Point,
) -> Option<Vec<Point>> {
    if from == to {
        return Some(vec![*from]);
    }

    let mut parents: HashMap<Point, Point> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    parents.insert(*from, *from);
    queue.push_back(*from);

    while let Some(current) = queue.pop_front() {
        let Ok(neighbors) = graph.neighbors(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if parents.contains_key(neighbor) {
                continue;
            }
            parents.insert(*neighbor, current);
            if neighbor == to {
                let mut path = vec![*to];
                let mut cursor = current;
                while cursor != *from {
                    path.push(cursor);
                    cursor = parents[&cursor];
                }
                path.push(*from);
                path.reverse();
                return Some(path);
            }
            queue.push_back(*neighbor);
        }
    }

    None
}

impl<C: PointOrder, O: GraphObserver> PointGraph<C, O> {
    /// Transitive connectivity along edge direction. Unlike `find_`, this
    /// follows neighbors of neighbors, and `is_connected(a, a)` holds.
    pub fn is_connected(&self, a: &Point, b: &Point) -> bool {
        shortest_path(self, a, b).is_some()
    }

    /// See [`bfs_reachable`].
    pub fn reachable_from(&self, start: &Point) -> GraphResult<Vec<Point>> {
        bfs_reachable(self, start)
    }
}

//! Directed point-to-point edges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{GraphError, Point};

/// A directed edge `source -> target`. Recording it never implies the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: Point,
    pub target: Point,
}

impl Edge {
    pub const fn new(source: Point, target: Point) -> Self {
        Self { source, target }
    }

    /// The same pair pointing the other way.
    pub const fn reversed(&self) -> Self {
        Self::new(self.target, self.source)
    }
}

impl From<(Point, Point)> for Edge {
    fn from((source, target): (Point, Point)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Parses `x,y->x,y`, with either side optionally parenthesized.
impl FromStr for Edge {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, target) = s
            .split_once("->")
            .ok_or_else(|| GraphError::InvalidEdge(s.to_string()))?;
        let source = source
            .parse::<Point>()
            .map_err(|_| GraphError::InvalidEdge(s.to_string()))?;
        let target = target
            .parse::<Point>()
            .map_err(|_| GraphError::InvalidEdge(s.to_string()))?;
        Ok(Self::new(source, target))
    }
}

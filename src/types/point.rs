//! The 2D integer point used as vertex identity and map key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GraphError;

/// An integer coordinate pair. Copies are independent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point. Any integer pair is valid.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y` or `(x, y)`.
impl FromStr for Point {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| GraphError::InvalidPoint(s.to_string()))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|_| GraphError::InvalidPoint(s.to_string()))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|_| GraphError::InvalidPoint(s.to_string()))?;
        Ok(Self::new(x, y))
    }
}

//! Key orderings for the adjacency store.
//!
//! Ordering is kept separate from `Point` equality so the store can be
//! positioned by any relation. The default relation is disjunctive and
//! reversed, which is not a strict weak order over all integer pairs: for
//! `(0, 1)` and `(1, 0)` each compares less than the other. The store
//! tolerates this (placement may differ, nothing panics).

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::Point;

/// A "less than" relation over points used to position keys.
pub trait PointOrder {
    /// True if `a` sorts before `b`.
    fn less(&self, a: &Point, b: &Point) -> bool;

    /// Short name used in dumps and snapshots.
    fn name(&self) -> &'static str;

    /// True if the relation is a strict total order, so a lower-bound
    /// search alone decides key presence.
    fn is_total(&self) -> bool {
        false
    }

    /// Neither point sorts before the other.
    fn equivalent(&self, a: &Point, b: &Point) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// `a < b` iff `b.x < a.x || b.y < a.y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversedDisjunctive;

impl PointOrder for ReversedDisjunctive {
    fn less(&self, a: &Point, b: &Point) -> bool {
        b.x < a.x || b.y < a.y
    }

    fn name(&self) -> &'static str {
        "reversed"
    }
}

/// `a < b` iff `a.x < b.x || a.y < b.y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardDisjunctive;

impl PointOrder for ForwardDisjunctive {
    fn less(&self, a: &Point, b: &Point) -> bool {
        a.x < b.x || a.y < b.y
    }

    fn name(&self) -> &'static str {
        "forward"
    }
}

/// Conventional `(x, y)` order. A true total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexicographic;

impl PointOrder for Lexicographic {
    fn less(&self, a: &Point, b: &Point) -> bool {
        (a.x, a.y).cmp(&(b.x, b.y)) == Ordering::Less
    }

    fn name(&self) -> &'static str {
        "lexicographic"
    }

    fn is_total(&self) -> bool {
        true
    }
}

/// Runtime selection among the built-in orderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum OrderKind {
    #[default]
    Reversed,
    Forward,
    Lexicographic,
}

impl OrderKind {
    /// Parse an ordering from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "reversed" | "reversed_disjunctive" => Some(Self::Reversed),
            "forward" | "forward_disjunctive" => Some(Self::Forward),
            "lexicographic" | "lex" => Some(Self::Lexicographic),
            _ => None,
        }
    }

    /// Return a human-readable name for this ordering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reversed => "reversed",
            Self::Forward => "forward",
            Self::Lexicographic => "lexicographic",
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl PointOrder for OrderKind {
    fn less(&self, a: &Point, b: &Point) -> bool {
        match self {
            Self::Reversed => ReversedDisjunctive.less(a, b),
            Self::Forward => ForwardDisjunctive.less(a, b),
            Self::Lexicographic => Lexicographic.less(a, b),
        }
    }

    fn name(&self) -> &'static str {
        OrderKind::name(self)
    }

    fn is_total(&self) -> bool {
        matches!(self, Self::Lexicographic)
    }
}

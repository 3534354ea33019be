//! Notification channel for the graph's non-fatal diagnostics.

use std::cell::RefCell;

use serde::Serialize;

use crate::types::{Point, MISSING_KEY_MESSAGE};

/// A diagnostic raised by a graph operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GraphEvent {
    /// `union_` inserted a key that was not present.
    KeyCreated(Point),
    /// `find_` was asked about a key that is not present.
    MissingKey(Point),
}

/// Receives diagnostics from `PointGraph`. Never alters the graph.
pub trait GraphObserver {
    fn key_created(&self, key: &Point);
    fn missing_key(&self, key: &Point);
}

/// Routes diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GraphObserver for LogObserver {
    fn key_created(&self, key: &Point) {
        log::info!("not found: {key}, creating adjacency entry");
    }

    fn missing_key(&self, key: &Point) {
        log::warn!("{MISSING_KEY_MESSAGE}: {key}");
    }
}

/// Prints the classic console text to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl GraphObserver for ConsoleObserver {
    fn key_created(&self, key: &Point) {
        println!("not found: {key}");
    }

    fn missing_key(&self, _key: &Point) {
        println!("{MISSING_KEY_MESSAGE}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl GraphObserver for SilentObserver {
    fn key_created(&self, _key: &Point) {}
    fn missing_key(&self, _key: &Point) {}
}

/// Keeps every diagnostic in order, for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<GraphEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<GraphEvent> {
        self.events.take()
    }
}

impl GraphObserver for RecordingObserver {
    fn key_created(&self, key: &Point) {
        self.events.borrow_mut().push(GraphEvent::KeyCreated(*key));
    }

    fn missing_key(&self, key: &Point) {
        self.events.borrow_mut().push(GraphEvent::MissingKey(*key));
    }
}

impl<O: GraphObserver + ?Sized> GraphObserver for &O {
    fn key_created(&self, key: &Point) {
        (**self).key_created(key);
    }

    fn missing_key(&self, key: &Point) {
        (**self).missing_key(key);
    }
}

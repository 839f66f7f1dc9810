//! Fan-out of signals and snapshots to subscribers.

use tracing::warn;

use super::signal::SignalEvent;
use super::sink::{FeedbackSink, SnapshotObserver};
use crate::engine::GameSnapshot;

/// Registered feedback sinks and snapshot observers.
#[derive(Default)]
pub struct Subscribers {
    sinks: Vec<Box<dyn FeedbackSink>>,
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl Subscribers {
    /// Create an empty subscriber set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feedback sink.
    pub fn add_sink(&mut self, sink: impl FeedbackSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Add a snapshot observer.
    pub fn add_observer(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of feedback sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Number of snapshot observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver a signal to every sink.
    ///
    /// A failing sink is logged and skipped; the remaining sinks still
    /// receive the signal.
    pub fn emit(&mut self, event: SignalEvent) {
        for sink in &mut self.sinks {
            if let Err(err) = sink.deliver(&event) {
                warn!(signal = ?event.signal, epoch = %event.epoch, %err, "feedback dropped");
            }
        }
    }

    /// Hand a snapshot to every observer.
    pub fn publish(&mut self, snapshot: &GameSnapshot) {
        for observer in &mut self.observers {
            observer.on_snapshot(snapshot);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("sinks", &self.sinks.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

//! Subscriber seams for feedback and rendering collaborators.
//!
//! - `FeedbackSink`: receives signals; may fail, failures are swallowed
//! - `SnapshotObserver`: receives a snapshot after every state change
//!
//! Closures implement both traits, so most hosts never name a type.

use std::cell::RefCell;
use std::rc::Rc;

use derive_more::{Display, Error};

use super::signal::{Signal, SignalEvent};
use crate::engine::GameSnapshot;

/// A feedback collaborator could not deliver a cue (no audio device, etc.).
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("feedback delivery failed: {message}")]
pub struct FeedbackError {
    message: String,
}

impl FeedbackError {
    /// Create a new delivery error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Receives feedback signals.
pub trait FeedbackSink {
    /// Deliver one signal. Errors are logged by the caller and dropped.
    fn deliver(&mut self, event: &SignalEvent) -> Result<(), FeedbackError>;
}

impl<F> FeedbackSink for F
where
    F: FnMut(&SignalEvent) -> Result<(), FeedbackError>,
{
    fn deliver(&mut self, event: &SignalEvent) -> Result<(), FeedbackError> {
        self(event)
    }
}

/// Receives a snapshot after every transition that changed the game.
pub trait SnapshotObserver {
    /// Called with the fresh snapshot.
    fn on_snapshot(&mut self, snapshot: &GameSnapshot);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn on_snapshot(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// In-memory sink that records every signal.
///
/// Clones share the same log, so one handle can be subscribed while
/// another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct SignalLog {
    events: Rc<RefCell<Vec<SignalEvent>>>,
}

impl SignalLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<SignalEvent> {
        self.events.borrow().clone()
    }

    /// All recorded signals without their epochs.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal> {
        self.events.borrow().iter().map(|e| e.signal).collect()
    }

    /// How many times `signal` was recorded.
    #[must_use]
    pub fn count(&self, signal: Signal) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.signal == signal)
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl FeedbackSink for SignalLog {
    fn deliver(&mut self, event: &SignalEvent) -> Result<(), FeedbackError> {
        self.events.borrow_mut().push(*event);
        Ok(())
    }
}

/// In-memory observer that keeps every published snapshot.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLog {
    snapshots: Rc<RefCell<Vec<GameSnapshot>>>,
}

impl SnapshotLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Check if nothing was received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.borrow().is_empty()
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<GameSnapshot> {
        self.snapshots.borrow().last().cloned()
    }
}

impl SnapshotObserver for SnapshotLog {
    fn on_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}

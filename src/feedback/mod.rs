//! Feedback and observation: what collaborators hear about the game.
//!
//! ## Key Types
//!
//! - `Signal` / `SignalEvent`: `Match`, `Mismatch`, `Won`, `Celebrate`
//! - `FeedbackSink`: audio/visual cue subscriber, allowed to fail
//! - `SnapshotObserver`: rendering subscriber
//! - `Subscribers`: fan-out that swallows sink failures
//!
//! Delivery is one-way. Subscribers get shared references and have no path
//! back into the game state.

pub mod hub;
pub mod signal;
pub mod sink;

pub use hub::Subscribers;
pub use signal::{Signal, SignalEvent};
pub use sink::{FeedbackError, FeedbackSink, SignalLog, SnapshotLog, SnapshotObserver};

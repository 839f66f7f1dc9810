//! Feedback signals.
//!
//! Signals are fire-and-forget notifications for audio and visual cues.
//! They describe something that already happened; nothing a subscriber
//! does with them can change the game.

use serde::{Deserialize, Serialize};

use crate::core::{Epoch, ItemId, Position};

/// A feedback cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// A pair was found.
    Match {
        /// The paired item.
        item: ItemId,
    },
    /// Two different tiles were turned up.
    Mismatch {
        /// First tile of the turn.
        first: Position,
        /// Second tile of the turn.
        second: Position,
    },
    /// The game entered `Won`. Emitted once per game.
    Won,
    /// Delayed congratulation after `Won`.
    Celebrate,
}

/// A signal tagged with the game it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalEvent {
    /// Game that produced the signal.
    pub epoch: Epoch,
    /// The cue itself.
    pub signal: Signal,
}

impl SignalEvent {
    /// Create a new signal event.
    #[must_use]
    pub const fn new(epoch: Epoch, signal: Signal) -> Self {
        Self { epoch, signal }
    }
}

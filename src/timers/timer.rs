//! Timer identities and scheduled entries.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Epoch;

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// End the reveal phase.
    Reveal,
    /// Hide a mismatched pair.
    Mismatch,
    /// Emit the delayed congratulation after a win.
    Celebration,
}

impl std::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimerKind::Reveal => "reveal",
            TimerKind::Mismatch => "mismatch",
            TimerKind::Celebration => "celebration",
        };
        f.write_str(name)
    }
}

/// Unique identifier for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A one-shot deferred action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTimer {
    /// Identifier, also the tie-breaker for equal deadlines.
    pub id: TimerId,
    /// What to do on fire.
    pub kind: TimerKind,
    /// The game that scheduled it.
    pub epoch: Epoch,
    /// Coordinator clock reading at which it fires.
    pub deadline: Duration,
}

impl ScheduledTimer {
    /// Check if this timer belongs to `epoch`.
    #[must_use]
    pub fn belongs_to(&self, epoch: Epoch) -> bool {
        self.epoch == epoch
    }
}

//! Game epochs.
//!
//! Every started game gets a fresh, strictly larger `Epoch`. Deferred work
//! (timers) is tagged with the epoch that scheduled it and is discarded if
//! the session has moved on by the time it fires.

use serde::{Deserialize, Serialize};

/// Monotonic token identifying one game within a session.
///
/// `Epoch::default()` (zero) belongs to the idle state before the first game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(pub u64);

impl Epoch {
    /// Create an epoch from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The epoch that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

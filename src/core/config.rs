//! Session configuration.
//!
//! Hosts configure the engine once, when the session is created:
//! - Timer delays for the reveal, mismatch and celebration phases
//! - An optional seed for reproducible decks
//!
//! Delays are plain milliseconds so the config round-trips cleanly through
//! any serde format.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default time all tiles stay face-up after a game starts.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 3000;

/// Default time a mismatched pair stays face-up.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Default time between winning and the congratulation notice.
pub const DEFAULT_CELEBRATION_DELAY_MS: u64 = 500;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the whole deck is shown before play begins.
    pub reveal_delay_ms: u64,

    /// How long a mismatched pair stays visible before re-hiding.
    pub mismatch_delay_ms: u64,

    /// Delay between the `Won` and `Celebrate` signals.
    pub celebration_delay_ms: u64,

    /// Seed for deck shuffling. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            celebration_delay_ms: DEFAULT_CELEBRATION_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = duration_ms(delay);
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = duration_ms(delay);
        self
    }

    /// Set the celebration delay.
    #[must_use]
    pub fn with_celebration_delay(mut self, delay: Duration) -> Self {
        self.celebration_delay_ms = duration_ms(delay);
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Mismatch delay as a `Duration`.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Celebration delay as a `Duration`.
    #[must_use]
    pub fn celebration_delay(&self) -> Duration {
        Duration::from_millis(self.celebration_delay_ms)
    }

    /// Check that every delay is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroDelay` naming the first zero field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delays = [
            ("reveal_delay_ms", self.reveal_delay_ms),
            ("mismatch_delay_ms", self.mismatch_delay_ms),
            ("celebration_delay_ms", self.celebration_delay_ms),
        ];

        match delays.iter().find(|(_, ms)| *ms == 0) {
            Some(&(field, _)) => Err(ConfigError::ZeroDelay { field }),
            None => Ok(()),
        }
    }
}

fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

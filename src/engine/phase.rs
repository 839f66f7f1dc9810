//! Game phases.

use serde::{Deserialize, Serialize};

/// Coarse game state.
///
/// Phases only move forward: `NotStarted -> Revealing -> Playing -> Won`.
/// A restart replaces the whole `GameState` instead of rewinding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// The whole deck is face-up, input is ignored.
    Revealing,
    /// Tiles are hidden and accept selections.
    Playing,
    /// Every pair has been found. Terminal.
    Won,
}

impl Phase {
    /// Check if tiles accept selections.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Check if this phase can never be left.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Revealing => "revealing",
            Phase::Playing => "playing",
            Phase::Won => "won",
        };
        f.write_str(name)
    }
}

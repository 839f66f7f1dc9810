//! Transition outcomes.
//!
//! Every state machine operation reports what it did. Rejections are
//! ordinary outcomes, not errors: input comes from best-effort pointer
//! events and duplicates or races are expected.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::{ItemId, Position};

/// Why a selection left the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Tiles only accept input while `Playing`.
    NotPlaying(Phase),
    /// No tile at this position.
    OutOfRange,
    /// The tile is already face-up as part of the current selection.
    AlreadySelected,
    /// The tile's pair has already been found.
    AlreadyMatched,
    /// A mismatched pair is still waiting to be hidden.
    SelectionFull,
}

/// Result of `GameState::select_tile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Input ignored; state unchanged.
    Rejected(Rejection),
    /// First tile of a turn turned face-up.
    Flipped(Position),
    /// Second tile completed a pair. `won` is set on the winning pair only.
    Matched {
        /// The paired item.
        item: ItemId,
        /// This match moved the game into `Won`.
        won: bool,
    },
    /// Second tile differs from the first; both stay up until cleared.
    Mismatched {
        /// First tile of the turn.
        first: Position,
        /// Second tile of the turn.
        second: Position,
    },
}

impl SelectOutcome {
    /// Check if the selection changed the state.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            SelectOutcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Result of `GameState::request_hide`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HideOutcome {
    /// Revealing ended, play begins.
    Hidden,
    /// The game was not revealing; nothing happened.
    Ignored(Phase),
}

impl HideOutcome {
    /// Check if the deck was hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, HideOutcome::Hidden)
    }
}

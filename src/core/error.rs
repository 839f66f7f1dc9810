//! Caller contract violations.
//!
//! Gameplay input never produces an error: rejected selections and stale
//! timers are reported as outcomes. Errors are reserved for a host handing
//! the engine something it cannot build a game from.

use derive_more::{Display, Error};

use super::item::ItemId;

/// A catalog that cannot produce a playable deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum CatalogError {
    /// No items at all; win detection would be degenerate.
    #[display("catalog must contain at least one item")]
    Empty,

    /// Two entries share an id, so pairs would not be unique.
    #[display("catalog contains {id} more than once")]
    DuplicateId {
        /// The repeated id.
        id: ItemId,
    },
}

/// A configuration value outside its valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A timer delay of zero milliseconds.
    #[display("{field} must be greater than zero")]
    ZeroDelay {
        /// Name of the offending field.
        field: &'static str,
    },
}

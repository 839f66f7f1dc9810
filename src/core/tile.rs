//! Tiles: one physical card occupying one slot of the shuffled deck.
//!
//! A tile carries only what is fixed for the whole game: where it sits and
//! which item it shows. Whether it is face-up is derived from the game
//! state, never stored on the tile.

use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// Index of a tile in the deck (`0..2N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub u32);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The index as a `usize` for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pos({})", self.0)
    }
}

/// One card instance in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Slot in the deck, stable for the game's duration.
    pub position: Position,

    /// The item shown on the face. Exactly one other tile shares it.
    pub item: ItemId,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(position: Position, item: ItemId) -> Self {
        Self { position, item }
    }

    /// Check if two tiles form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.item == other.item && self.position != other.position
    }
}

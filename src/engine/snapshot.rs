//! Immutable state snapshots for rendering collaborators.
//!
//! A snapshot is taken after every transition. Renderers read per-tile
//! `(position, item, face_up)` plus the global phase from it and never touch
//! the live `GameState`.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::Phase;
use crate::core::{Epoch, Item, ItemId, Position};

/// What a renderer needs to draw one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Slot in the deck.
    pub position: Position,
    /// Face payload.
    pub item: Item,
    /// Show the face instead of the back.
    pub face_up: bool,
    /// Part of the unresolved selection.
    pub selected: bool,
    /// Pair already found.
    pub matched: bool,
}

/// Point-in-time copy of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Which game this snapshot belongs to.
    pub epoch: Epoch,
    /// Phase at snapshot time.
    pub phase: Phase,
    /// One view per deck position, in position order.
    pub tiles: Vector<TileView>,
    /// Unresolved selection, in selection order.
    pub selected: SmallVec<[Position; 2]>,
    /// Found pairs.
    pub matched: ImHashSet<ItemId>,
    /// Pairs needed to win.
    pub pair_count: usize,
}

impl GameSnapshot {
    /// View of one tile.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&TileView> {
        self.tiles.get(position.index())
    }

    /// Check if the tile at `position` is face-up.
    #[must_use]
    pub fn is_face_up(&self, position: Position) -> bool {
        self.tile(position).is_some_and(|view| view.face_up)
    }

    /// Number of face-up tiles.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.tiles.iter().filter(|view| view.face_up).count()
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

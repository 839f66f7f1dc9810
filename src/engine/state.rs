//! The game state machine.
//!
//! ## GameState
//!
//! Everything that changes while a game is played:
//! - Phase (`NotStarted -> Revealing -> Playing -> Won`)
//! - The shuffled deck
//! - The 0-2 selected positions awaiting resolution
//! - The set of matched item ids
//!
//! Face-up status is never stored. `is_face_up` derives it from the three
//! fields above, so visibility and bookkeeping cannot drift apart.
//!
//! The state machine is pure: it never schedules timers or emits feedback.
//! Operations return outcomes and the session turns those into timers and
//! signals.

use im::{HashSet as ImHashSet, Vector};
use smallvec::SmallVec;

use super::outcome::{HideOutcome, Rejection, SelectOutcome};
use super::phase::Phase;
use super::snapshot::{GameSnapshot, TileView};
use crate::core::{Catalog, Epoch, GameRng, ItemId, Position, Tile};
use crate::deck::build_deck;

/// Mutable state of a single game.
///
/// Uses `im` persistent collections so snapshots share structure with the
/// live state.
#[derive(Clone, Debug)]
pub struct GameState {
    epoch: Epoch,
    phase: Phase,
    catalog: Catalog,
    tiles: Vector<Tile>,
    selected: SmallVec<[Position; 2]>,
    matched: ImHashSet<ItemId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}

impl GameState {
    /// The state before any game has been started.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            epoch: Epoch::default(),
            phase: Phase::NotStarted,
            catalog: Catalog::empty(),
            tiles: Vector::new(),
            selected: SmallVec::new(),
            matched: ImHashSet::new(),
        }
    }

    /// Start a fresh game: build the deck and enter `Revealing`.
    ///
    /// This constructs a new state. Whatever state the caller held before is
    /// simply dropped; nothing carries over.
    #[must_use]
    pub fn start(catalog: Catalog, rng: &mut GameRng, epoch: Epoch) -> Self {
        let tiles = build_deck(&catalog, rng);
        Self {
            epoch,
            phase: Phase::Revealing,
            catalog,
            tiles,
            selected: SmallVec::new(),
            matched: ImHashSet::new(),
        }
    }

    // === Accessors ===

    /// The epoch this game was started in.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The catalog this game was dealt from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of pairs needed to win.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.catalog.len()
    }

    /// The shuffled deck, indexed by position.
    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    /// The tile at a position.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(position.index())
    }

    /// Positions currently selected, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Position] {
        &self.selected
    }

    /// Item ids whose pairs have been found.
    #[must_use]
    pub fn matched(&self) -> &ImHashSet<ItemId> {
        &self.matched
    }

    /// Check if an item's pair has been found.
    #[must_use]
    pub fn is_matched(&self, item: ItemId) -> bool {
        self.matched.contains(&item)
    }

    /// Both positions holding an item, in deck order.
    pub fn positions_of(&self, item: ItemId) -> impl Iterator<Item = Position> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.item == item)
            .map(|tile| tile.position)
    }

    // === Visibility ===

    /// Derived visibility: revealing, selected, or matched.
    #[must_use]
    pub fn is_face_up(&self, position: Position) -> bool {
        let Some(tile) = self.tile(position) else {
            return false;
        };

        self.phase == Phase::Revealing
            || self.selected.contains(&position)
            || self.matched.contains(&tile.item)
    }

    // === Transitions ===

    /// End the reveal phase.
    ///
    /// Only `Revealing` moves to `Playing`; any other phase is left alone so
    /// a late reveal timer cannot disturb a game in progress.
    pub fn request_hide(&mut self) -> HideOutcome {
        if self.phase != Phase::Revealing {
            return HideOutcome::Ignored(self.phase);
        }
        self.phase = Phase::Playing;
        HideOutcome::Hidden
    }

    /// Flip the tile at `position`.
    ///
    /// Rejections leave the state untouched. A second accepted tile resolves
    /// the turn: a pair is matched and cleared at once, a mismatch keeps both
    /// tiles selected until `clear_selection`.
    pub fn select_tile(&mut self, position: Position) -> SelectOutcome {
        if !self.phase.accepts_input() {
            return SelectOutcome::Rejected(Rejection::NotPlaying(self.phase));
        }
        let Some(tile) = self.tile(position).copied() else {
            return SelectOutcome::Rejected(Rejection::OutOfRange);
        };
        if self.selected.contains(&position) {
            return SelectOutcome::Rejected(Rejection::AlreadySelected);
        }
        if self.matched.contains(&tile.item) {
            return SelectOutcome::Rejected(Rejection::AlreadyMatched);
        }
        if self.selected.len() >= 2 {
            return SelectOutcome::Rejected(Rejection::SelectionFull);
        }

        self.selected.push(position);
        let [first, second] = match self.selected.as_slice() {
            &[first, second] => [first, second],
            _ => return SelectOutcome::Flipped(position),
        };

        let first_item = self.tiles[first.index()].item;
        if first_item != tile.item {
            return SelectOutcome::Mismatched { first, second };
        }

        self.matched.insert(tile.item);
        self.selected.clear();

        let won = self.matched.len() == self.catalog.len();
        if won {
            self.phase = Phase::Won;
        }
        SelectOutcome::Matched {
            item: tile.item,
            won,
        }
    }

    /// Hide a resolved mismatch.
    ///
    /// Returns whether anything was cleared. The phase never changes.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    // === Snapshots ===

    /// Immutable view for rendering collaborators.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let tiles = self
            .tiles
            .iter()
            .map(|tile| {
                let item = self
                    .catalog
                    .get(tile.item)
                    .cloned()
                    .expect("deck tiles are dealt from the catalog");
                TileView {
                    position: tile.position,
                    item,
                    face_up: self.is_face_up(tile.position),
                    selected: self.selected.contains(&tile.position),
                    matched: self.matched.contains(&tile.item),
                }
            })
            .collect();

        GameSnapshot {
            epoch: self.epoch,
            phase: self.phase,
            tiles,
            selected: self.selected.clone(),
            matched: self.matched.clone(),
            pair_count: self.catalog.len(),
        }
    }
}

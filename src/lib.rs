//! # memory-match
//!
//! A game-state engine for tile-matching memory games.
//!
//! A catalog of N distinct items becomes a shuffled deck of 2N tiles. The
//! deck is shown briefly, hidden, and the player turns up two tiles per turn
//! until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, audio or event loop. Hosts read snapshots,
//!    forward input and pass elapsed time in.
//!
//! 2. **Derived Visibility**: A tile's face-up status is computed from phase,
//!    selection and matched set. It is never stored.
//!
//! 3. **Input Is Best-Effort**: Duplicate or racy input is absorbed as a
//!    no-op outcome, never an error.
//!
//! ## Architecture
//!
//! - **Epoch-Guarded Timers**: Every deferred action carries the epoch of the
//!   game that scheduled it; a restarted game never sees a stale timer.
//!
//! - **Deterministic Shuffles**: ChaCha8 with a recorded seed, Fisher-Yates.
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Items, catalogs, tiles, epochs, RNG, configuration
//! - `deck`: Deck builder
//! - `engine`: Game state machine, outcomes, snapshots
//! - `timers`: Timer coordinator
//! - `feedback`: Signals, feedback sinks, snapshot observers
//! - `session`: `MemoryGame`, the host-facing driver
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{Catalog, GameConfig, MemoryGame, Phase};
//!
//! let mut game = MemoryGame::new(GameConfig::default().with_seed(1)).unwrap();
//! game.start_catalog(Catalog::sample());
//! assert_eq!(game.phase(), Phase::Revealing);
//!
//! game.advance(Duration::from_secs(3));
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod core;
pub mod deck;
pub mod engine;
pub mod feedback;
pub mod session;
pub mod timers;

// Re-export commonly used types
pub use crate::core::{
    Catalog, CatalogError, ConfigError, Epoch, GameConfig, GameRng, Item, ItemId, Position, Tile,
};

pub use crate::deck::build_deck;

pub use crate::engine::{
    GameSnapshot, GameState, HideOutcome, Phase, Rejection, SelectOutcome, TileView,
};

pub use crate::feedback::{
    FeedbackError, FeedbackSink, Signal, SignalEvent, SignalLog, SnapshotLog, SnapshotObserver,
    Subscribers,
};

pub use crate::session::MemoryGame;

pub use crate::timers::{ScheduledTimer, TimerCoordinator, TimerId, TimerKind};

//! Game state machine: phases, selection, matching, win detection.
//!
//! ## Key Types
//!
//! - `Phase`: `NotStarted -> Revealing -> Playing -> Won`
//! - `GameState`: the mutable game, driven only through its transitions
//! - `SelectOutcome` / `HideOutcome`: what a transition did (or why not)
//! - `GameSnapshot`: immutable view handed to renderers

pub mod outcome;
pub mod phase;
pub mod snapshot;
pub mod state;

pub use outcome::{HideOutcome, Rejection, SelectOutcome};
pub use phase::Phase;
pub use snapshot::{GameSnapshot, TileView};
pub use state::GameState;

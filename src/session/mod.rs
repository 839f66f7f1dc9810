//! Host-facing session driver.
//!
//! `MemoryGame` is what a host application holds. It owns:
//! - the live `GameState` (replaced wholesale on every start)
//! - the `TimerCoordinator` and the epoch guard around it
//! - the feedback and snapshot subscribers
//!
//! Hosts forward pointer events to `select_tile` and wall-clock time to
//! `advance`. Everything else happens inside.

mod game;

pub use game::MemoryGame;

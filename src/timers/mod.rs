//! Timer coordinator: one-shot, cancellable, epoch-tagged deferred actions.
//!
//! Three timers exist:
//! - `Reveal`: ends the reveal phase
//! - `Mismatch`: hides a mismatched pair
//! - `Celebration`: delayed congratulation after a win
//!
//! Each carries the `Epoch` of the game that scheduled it. Whoever handles a
//! fired timer compares that epoch with the live game and drops it on
//! mismatch.

pub mod coordinator;
pub mod timer;

pub use coordinator::TimerCoordinator;
pub use timer::{ScheduledTimer, TimerId, TimerKind};

//! Host-driven timer coordination.
//!
//! The coordinator owns a monotonic clock that only moves when the host says
//! so. Hosts pass elapsed wall time in; due timers come out in deadline
//! order. Nothing runs on another thread and nothing fires behind the
//! engine's back, so a timer and a click are always processed one after
//! the other.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::Epoch;
//! use memory_match::timers::{TimerCoordinator, TimerKind};
//!
//! let mut timers = TimerCoordinator::new();
//! timers.schedule(TimerKind::Reveal, Epoch::new(1), Duration::from_millis(3000));
//!
//! assert!(timers.advance(Duration::from_millis(2999)).is_empty());
//! let fired = timers.advance(Duration::from_millis(1));
//! assert_eq!(fired.len(), 1);
//! assert_eq!(fired[0].kind, TimerKind::Reveal);
//! ```

use std::time::Duration;

use tracing::trace;

use super::timer::{ScheduledTimer, TimerId, TimerKind};
use crate::core::Epoch;

/// Schedules, cancels and fires one-shot timers.
#[derive(Clone, Debug, Default)]
pub struct TimerCoordinator {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl TimerCoordinator {
    /// Create a coordinator with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Check if a timer of `kind` is pending for `epoch`.
    #[must_use]
    pub fn is_pending(&self, kind: TimerKind, epoch: Epoch) -> bool {
        self.pending
            .iter()
            .any(|timer| timer.kind == kind && timer.belongs_to(epoch))
    }

    /// Schedule a timer `delay` after the current clock reading.
    pub fn schedule(&mut self, kind: TimerKind, epoch: Epoch, delay: Duration) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay);
        trace!(%id, %kind, %epoch, ?deadline, "timer scheduled");
        self.pending.push(ScheduledTimer {
            id,
            kind,
            epoch,
            deadline,
        });
        id
    }

    /// Cancel one timer.
    ///
    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Cancel every timer not belonging to `current`.
    ///
    /// Returns the number of timers dropped.
    pub fn cancel_stale(&mut self, current: Epoch) -> usize {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.belongs_to(current));
        before - self.pending.len()
    }

    /// Time left until the earliest pending timer, if any.
    ///
    /// Event loops can sleep this long before calling `advance`.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|timer| timer.deadline)
            .min()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's deadline, so anything scheduled
    /// while handling it is measured from the moment it fired. Equal
    /// deadlines fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTimer> {
        let slot = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(_, timer)| (timer.deadline, timer.id))
            .map(|(slot, _)| slot)?;

        let timer = self.pending.remove(slot);
        self.now = self.now.max(timer.deadline);
        Some(timer)
    }

    /// Move the clock forward to `target` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    /// Move the clock forward by `elapsed` and return every timer that came
    /// due, in firing order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTimer> {
        let target = self.now.saturating_add(elapsed);
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(target) {
            fired.push(timer);
        }
        self.advance_to(target);
        fired
    }
}

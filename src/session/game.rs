//! Memory game session.

use std::time::Duration;

use tracing::{debug, instrument, trace};

use crate::core::{Catalog, CatalogError, ConfigError, Epoch, GameConfig, GameRng, Item, Position};
use crate::engine::{GameSnapshot, GameState, Phase, SelectOutcome};
use crate::feedback::{FeedbackSink, Signal, SignalEvent, SnapshotObserver, Subscribers};
use crate::timers::{ScheduledTimer, TimerCoordinator, TimerKind};

/// One playing surface: the live game, its timers and its subscribers.
///
/// All mutation goes through `&mut self`, one stimulus at a time:
/// `start`, `select_tile` for player input and `advance` for elapsed time.
#[derive(Debug)]
pub struct MemoryGame {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    timers: TimerCoordinator,
    subscribers: Subscribers,
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::from_parts(GameConfig::default())
    }
}

impl MemoryGame {
    /// Create an idle session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any configured delay is zero.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "session created");
        Self {
            config,
            rng,
            state: GameState::idle(),
            timers: TimerCoordinator::new(),
            subscribers: Subscribers::new(),
        }
    }

    // === Subscriptions ===

    /// Register an audio/visual feedback collaborator.
    pub fn subscribe_feedback(&mut self, sink: impl FeedbackSink + 'static) {
        self.subscribers.add_sink(sink);
    }

    /// Register a rendering collaborator.
    pub fn subscribe_snapshots(&mut self, observer: impl SnapshotObserver + 'static) {
        self.subscribers.add_observer(observer);
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG, for replaying the same sequence of decks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The live game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Epoch of the current game.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.state.epoch()
    }

    /// Immutable view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Session clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Check if a timer of `kind` is waiting for the current game.
    #[must_use]
    pub fn is_timer_pending(&self, kind: TimerKind) -> bool {
        self.timers.is_pending(kind, self.state.epoch())
    }

    // === Commands ===

    /// Start a new game from raw catalog entries.
    ///
    /// The previous game, if any, is discarded along with its timers.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for an empty catalog or duplicate ids; the
    /// current game is left untouched in that case.
    #[instrument(level = "debug", skip_all)]
    pub fn start(&mut self, items: impl IntoIterator<Item = Item>) -> Result<Epoch, CatalogError> {
        let catalog = Catalog::new(items)?;
        Ok(self.start_catalog(catalog))
    }

    /// Start a new game from a validated catalog.
    #[instrument(level = "debug", skip_all, fields(pairs = catalog.len()))]
    pub fn start_catalog(&mut self, catalog: Catalog) -> Epoch {
        let epoch = self.state.epoch().next();
        let dropped = self.timers.cancel_stale(epoch);

        let mut deck_rng = self.rng.fork();
        self.state = GameState::start(catalog, &mut deck_rng, epoch);
        self.timers
            .schedule(TimerKind::Reveal, epoch, self.config.reveal_delay());

        debug!(%epoch, dropped, "game started");
        self.publish();
        epoch
    }

    /// Deal a fresh deck from the current catalog.
    ///
    /// Returns `None` if no game has been started yet.
    pub fn restart(&mut self) -> Option<Epoch> {
        if self.state.phase() == Phase::NotStarted {
            return None;
        }
        let catalog = self.state.catalog().clone();
        Some(self.start_catalog(catalog))
    }

    /// Player input: flip the tile at `position`.
    #[instrument(level = "debug", skip(self), fields(epoch = %self.state.epoch()))]
    pub fn select_tile(&mut self, position: Position) -> SelectOutcome {
        let outcome = self.state.select_tile(position);
        let epoch = self.state.epoch();

        match outcome {
            SelectOutcome::Rejected(reason) => {
                trace!(?reason, "selection ignored");
                return outcome;
            }
            SelectOutcome::Flipped(_) => self.publish(),
            SelectOutcome::Matched { item, won } => {
                self.publish();
                self.signal(Signal::Match { item });
                if won {
                    debug!(%epoch, "game won");
                    self.signal(Signal::Won);
                    self.timers
                        .schedule(TimerKind::Celebration, epoch, self.config.celebration_delay());
                }
            }
            SelectOutcome::Mismatched { first, second } => {
                self.publish();
                self.signal(Signal::Mismatch { first, second });
                self.timers
                    .schedule(TimerKind::Mismatch, epoch, self.config.mismatch_delay());
            }
        }
        outcome
    }

    /// Elapsed time: fire every timer that comes due.
    ///
    /// Returns the number of timers that acted on the current game. Timers
    /// left over from an earlier game are consumed without effect.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.timers.now().saturating_add(elapsed);
        let mut applied = 0;
        while let Some(timer) = self.timers.pop_due(target) {
            if self.fire(timer) {
                applied += 1;
            }
        }
        self.timers.advance_to(target);
        applied
    }

    fn fire(&mut self, timer: ScheduledTimer) -> bool {
        let epoch = self.state.epoch();
        if !timer.belongs_to(epoch) {
            debug!(id = %timer.id, kind = %timer.kind, stale = %timer.epoch, %epoch, "stale timer ignored");
            return false;
        }

        match timer.kind {
            TimerKind::Reveal => {
                let outcome = self.state.request_hide();
                if !outcome.is_hidden() {
                    trace!(?outcome, "reveal timer had nothing to hide");
                    return false;
                }
                debug!(%epoch, "deck hidden");
                self.publish();
            }
            TimerKind::Mismatch => {
                if !self.state.clear_selection() {
                    return false;
                }
                self.publish();
            }
            TimerKind::Celebration => self.signal(Signal::Celebrate),
        }
        true
    }

    fn signal(&mut self, signal: Signal) {
        self.subscribers
            .emit(SignalEvent::new(self.state.epoch(), signal));
    }

    fn publish(&mut self) {
        if self.subscribers.observer_count() == 0 {
            return;
        }
        let snapshot = self.state.snapshot();
        self.subscribers.publish(&snapshot);
    }
}

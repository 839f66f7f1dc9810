//! End-to-end session tests using `MemoryGame`.
//!
//! These drive the engine the way a host does: start a game, forward
//! selections, pass elapsed time, and watch snapshots and signals.

use std::time::Duration;

use memory_match::{
    Epoch, FeedbackError, GameConfig, Item, ItemId, MemoryGame, Phase, Position, Rejection,
    SelectOutcome, Signal, SignalEvent, SignalLog, SnapshotLog, TimerKind,
};

const A: ItemId = ItemId::new(1);
const B: ItemId = ItemId::new(2);

fn ab() -> Vec<Item> {
    vec![
        Item::new(A, "Coconut", "/images/coco.png"),
        Item::new(B, "Ball", "/images/bola.png"),
    ]
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn pair(game: &MemoryGame, item: ItemId) -> (Position, Position) {
    let positions: Vec<_> = game.state().positions_of(item).collect();
    assert_eq!(positions.len(), 2, "{item} should appear exactly twice");
    (positions[0], positions[1])
}

/// A seeded session with an A/B game already past its reveal phase.
fn playing_game() -> (MemoryGame, SignalLog) {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(42)).unwrap();
    let log = SignalLog::new();
    game.subscribe_feedback(log.clone());

    game.start(ab()).unwrap();
    game.advance(ms(3000));
    assert_eq!(game.phase(), Phase::Playing);
    (game, log)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_full_game_scenario() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(1)).unwrap();
    let log = SignalLog::new();
    game.subscribe_feedback(log.clone());

    game.start(ab()).unwrap();

    // Deck: 4 tiles, two of each
    let snapshot = game.snapshot();
    assert_eq!(snapshot.tiles.len(), 4);
    assert_eq!(game.state().positions_of(A).count(), 2);
    assert_eq!(game.state().positions_of(B).count(), 2);

    // Revealing: all visible
    assert_eq!(snapshot.phase, Phase::Revealing);
    assert_eq!(snapshot.face_up_count(), 4);

    // Reveal timeout: playing, nothing visible
    assert_eq!(game.advance(ms(3000)), 1);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::Playing);
    assert_eq!(snapshot.face_up_count(), 0);

    // Match A
    let (a0, a1) = pair(&game, A);
    game.select_tile(a0);
    game.select_tile(a1);
    let snapshot = game.snapshot();
    assert!(snapshot.matched.contains(&A));
    assert_eq!(snapshot.matched_count(), 1);
    assert!(snapshot.selected.is_empty());
    assert_eq!(snapshot.phase, Phase::Playing);

    // Match B: won
    let (b0, b1) = pair(&game, B);
    game.select_tile(b0);
    assert_eq!(game.select_tile(b1), SelectOutcome::Matched { item: B, won: true });
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.snapshot().face_up_count(), 4);

    assert_eq!(
        log.signals(),
        vec![Signal::Match { item: A }, Signal::Match { item: B }, Signal::Won]
    );
}

#[test]
fn test_mismatch_scenario() {
    let (mut game, log) = playing_game();
    let (a0, a1) = pair(&game, A);
    let (b0, b1) = pair(&game, B);

    game.select_tile(a0);
    assert_eq!(
        game.select_tile(b0),
        SelectOutcome::Mismatched { first: a0, second: b0 }
    );

    let snapshot = game.snapshot();
    assert!(snapshot.is_face_up(a0));
    assert!(snapshot.is_face_up(b0));
    assert_eq!(snapshot.selected.len(), 2);

    // Any third pick is rejected while the mismatch is pending
    let before = game.snapshot();
    for position in [a1, b1, a0, b0] {
        assert!(!game.select_tile(position).is_accepted());
    }
    assert_eq!(game.snapshot(), before);

    // Still held just before the timeout
    game.advance(ms(999));
    assert_eq!(game.snapshot().selected.len(), 2);

    game.advance(ms(1));
    let snapshot = game.snapshot();
    assert!(snapshot.selected.is_empty());
    assert!(!snapshot.is_face_up(a0));
    assert!(!snapshot.is_face_up(b0));
    assert!(snapshot.matched.is_empty());
    assert_eq!(snapshot.phase, Phase::Playing);

    assert_eq!(
        log.signals(),
        vec![Signal::Mismatch { first: a0, second: b0 }]
    );

    // Input accepted again
    assert_eq!(game.select_tile(a1), SelectOutcome::Flipped(a1));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_input_ignored_while_revealing() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(3)).unwrap();
    game.start(ab()).unwrap();

    for raw in 0..4 {
        assert_eq!(
            game.select_tile(Position::new(raw)),
            SelectOutcome::Rejected(Rejection::NotPlaying(Phase::Revealing))
        );
    }
    assert!(game.state().selected().is_empty());
}

#[test]
fn test_matched_tile_selection_is_idempotent() {
    let (mut game, _) = playing_game();
    let (a0, a1) = pair(&game, A);
    game.select_tile(a0);
    game.select_tile(a1);

    let before = game.snapshot();
    for _ in 0..3 {
        assert_eq!(
            game.select_tile(a0),
            SelectOutcome::Rejected(Rejection::AlreadyMatched)
        );
        assert_eq!(
            game.select_tile(a1),
            SelectOutcome::Rejected(Rejection::AlreadyMatched)
        );
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_double_click_same_tile() {
    let (mut game, _) = playing_game();
    let (a0, _) = pair(&game, A);

    assert!(game.select_tile(a0).is_accepted());
    assert_eq!(
        game.select_tile(a0),
        SelectOutcome::Rejected(Rejection::AlreadySelected)
    );
    assert_eq!(game.state().selected(), &[a0]);
}

#[test]
fn test_out_of_range_position() {
    let (mut game, _) = playing_game();
    assert_eq!(
        game.select_tile(Position::new(99)),
        SelectOutcome::Rejected(Rejection::OutOfRange)
    );
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_won_fires_exactly_once() {
    let (mut game, log) = playing_game();
    let (a0, a1) = pair(&game, A);
    let (b0, b1) = pair(&game, B);

    for position in [a0, a1, b0, b1] {
        game.select_tile(position);
    }
    assert_eq!(game.phase(), Phase::Won);

    // Hammer the finished board and let time pass
    for position in [a0, a1, b0, b1] {
        game.select_tile(position);
    }
    game.advance(ms(10_000));

    assert_eq!(log.count(Signal::Won), 1);
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.state().matched().len(), 2);
}

#[test]
fn test_celebration_follows_win() {
    let (mut game, log) = playing_game();
    let (a0, a1) = pair(&game, A);
    let (b0, b1) = pair(&game, B);
    for position in [a0, a1, b0, b1] {
        game.select_tile(position);
    }

    assert!(game.is_timer_pending(TimerKind::Celebration));
    assert_eq!(game.next_deadline(), Some(ms(500)));

    game.advance(ms(499));
    assert_eq!(log.count(Signal::Celebrate), 0);

    game.advance(ms(1));
    assert_eq!(log.count(Signal::Celebrate), 1);
    assert_eq!(log.signals().last(), Some(&Signal::Celebrate));
}

#[test]
fn test_single_pair_catalog() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(5)).unwrap();
    game.start(vec![Item::new(A, "Only", "only.png")]).unwrap();
    game.advance(ms(3000));

    assert_eq!(
        game.select_tile(Position::new(0)),
        SelectOutcome::Flipped(Position::new(0))
    );
    assert_eq!(
        game.select_tile(Position::new(1)),
        SelectOutcome::Matched { item: A, won: true }
    );
    assert_eq!(game.phase(), Phase::Won);
}

// =============================================================================
// Stale Timers
// =============================================================================

#[test]
fn test_restart_during_reveal_ignores_old_reveal_timer() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(8)).unwrap();
    game.start(ab()).unwrap();

    game.advance(ms(2000));
    let epoch = game.restart().unwrap();
    assert_eq!(epoch, Epoch::new(2));

    // The first game's reveal would have fired at 3000ms
    game.advance(ms(1500));
    assert_eq!(game.phase(), Phase::Revealing);

    // The new game's reveal fires 3000ms after its own start
    game.advance(ms(1500));
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_restart_during_mismatch_does_not_clear_new_selection() {
    let (mut game, _) = playing_game();
    let (a0, _) = pair(&game, A);
    let (b0, _) = pair(&game, B);
    game.select_tile(a0);
    game.select_tile(b0);
    assert!(game.is_timer_pending(TimerKind::Mismatch));

    game.start(ab()).unwrap();
    assert!(!game.is_timer_pending(TimerKind::Mismatch));
    game.advance(ms(3000));

    let (a0, _) = pair(&game, A);
    game.select_tile(a0);

    // Long past the old mismatch deadline: the new selection must survive
    game.advance(ms(5000));
    assert_eq!(game.state().selected(), &[a0]);
}

#[test]
fn test_restart_after_win_drops_celebration() {
    let (mut game, log) = playing_game();
    let (a0, a1) = pair(&game, A);
    let (b0, b1) = pair(&game, B);
    for position in [a0, a1, b0, b1] {
        game.select_tile(position);
    }

    game.restart();
    game.advance(ms(10_000));

    assert_eq!(log.count(Signal::Celebrate), 0);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_signals_carry_epoch() {
    let (mut game, log) = playing_game();
    let (a0, a1) = pair(&game, A);
    game.select_tile(a0);
    game.select_tile(a1);

    assert_eq!(
        log.events(),
        vec![SignalEvent::new(Epoch::new(1), Signal::Match { item: A })]
    );
}

// =============================================================================
// Collaborators
// =============================================================================

#[test]
fn test_failing_feedback_does_not_affect_state() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(42)).unwrap();
    game.subscribe_feedback(|_: &SignalEvent| -> Result<(), FeedbackError> {
        Err(FeedbackError::new("playback unavailable"))
    });
    let log = SignalLog::new();
    game.subscribe_feedback(log.clone());

    game.start(ab()).unwrap();
    game.advance(ms(3000));
    let (a0, a1) = pair(&game, A);
    let (b0, b1) = pair(&game, B);
    for position in [a0, a1, b0, b1] {
        game.select_tile(position);
    }

    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(log.count(Signal::Won), 1);
}

#[test]
fn test_snapshot_observer_sees_every_change() {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(42)).unwrap();
    let snapshots = SnapshotLog::new();
    game.subscribe_snapshots(snapshots.clone());

    game.start(ab()).unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots.latest().unwrap().phase, Phase::Revealing);

    game.advance(ms(3000));
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots.latest().unwrap().face_up_count(), 0);

    // Rejected input publishes nothing
    game.select_tile(Position::new(99));
    assert_eq!(snapshots.len(), 2);

    let (a0, _) = pair(&game, A);
    let (b0, _) = pair(&game, B);
    game.select_tile(a0);
    game.select_tile(b0);
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots.latest().unwrap().face_up_count(), 2);

    game.advance(ms(1000));
    assert_eq!(snapshots.len(), 5);
    assert_eq!(snapshots.latest().unwrap().face_up_count(), 0);
}

#[test]
fn test_snapshot_serializes() {
    let (game, _) = playing_game();
    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["tiles"].as_array().unwrap().len(), 4);
    assert_eq!(json["tiles"][0]["face_up"], false);
}

#[test]
fn test_custom_delays() {
    let config = GameConfig::default()
        .with_seed(2)
        .with_reveal_delay(ms(100))
        .with_mismatch_delay(ms(50));
    let mut game = MemoryGame::new(config).unwrap();
    game.start(ab()).unwrap();

    game.advance(ms(100));
    assert_eq!(game.phase(), Phase::Playing);

    let (a0, _) = pair(&game, A);
    let (b0, _) = pair(&game, B);
    game.select_tile(a0);
    game.select_tile(b0);
    assert_eq!(game.next_deadline(), Some(ms(50)));

    game.advance(ms(50));
    assert!(game.state().selected().is_empty());
}

//! Driver tests - actions, fall timer and session flow

use std::time::{Duration, Instant};

use blockfall::core::{Board, EngineConfig, Piece, RuleEngine};
use blockfall::engine::{dispatch, Action, DriverConfig, FallTimer, Flow, Session};
use blockfall::input::handle_key_event;
use blockfall::types::{GameAction, PieceKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn config() -> DriverConfig {
    DriverConfig {
        fall_interval: Duration::from_millis(100),
        frame_interval: Duration::from_millis(16),
    }
}

#[test]
fn test_fall_timer_fires_strictly_after_interval() {
    let t0 = Instant::now();
    let mut timer = FallTimer::new(Duration::from_millis(100), t0);

    assert!(!timer.poll(t0 + Duration::from_millis(100)));
    assert!(timer.poll(t0 + Duration::from_millis(101)));
    // Fired: the next window starts at the fire time.
    assert!(!timer.poll(t0 + Duration::from_millis(150)));
    assert!(timer.poll(t0 + Duration::from_millis(202)));
}

#[test]
fn test_timer_ticks_drop_piece_to_floor() {
    let t0 = Instant::now();
    let engine = RuleEngine::with_seed(EngineConfig::with_board(6, 5).unwrap(), 3);
    let mut session = Session::new(engine, config(), t0);

    let mut now = t0;
    // First tick spawns, later ticks fall until the piece settles.
    for _ in 0..20 {
        now += Duration::from_millis(101);
        assert_eq!(session.poll_timer(now), Flow::Continue);
        if session.engine().pieces_settled() == 1 {
            break;
        }
    }

    assert_eq!(session.engine().pieces_settled(), 1);
    assert!(!session.engine().has_active());
    assert_eq!(session.engine().board().dead_count(), 4);
}

#[test]
fn test_keyboard_events_reach_engine() {
    let engine = RuleEngine::with_seed(EngineConfig::with_board(6, 6).unwrap(), 3);
    let mut session = Session::new(engine, config(), Instant::now());

    let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
    let action = handle_key_event(space).unwrap();
    assert_eq!(action, Action::Control(GameAction::EnsurePiece));
    assert_eq!(session.handle(action), Flow::Continue);
    assert!(session.engine().has_active());

    let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert_eq!(session.handle(handle_key_event(q).unwrap()), Flow::Quit);
    assert!(!session.is_running());
}

#[test]
fn test_session_stops_running_on_game_over() {
    let board = Board::from_ascii(&["#...", "#...", "#...", "#..."]).unwrap();
    let engine_config = EngineConfig::with_board(4, 4).unwrap();
    let mut engine = RuleEngine::with_board(engine_config, 1, board).unwrap();
    assert!(engine.place_active(Piece::at(PieceKind::O, 0, -2)));

    let mut session = Session::new(engine, config(), Instant::now());
    assert!(session.is_running());

    assert_eq!(session.handle(Action::Timer), Flow::Continue);
    assert!(session.engine().is_game_over());
    assert!(!session.is_running());

    // Further input is accepted and ignored by the engine.
    assert_eq!(
        session.handle(Action::Control(GameAction::EnsurePiece)),
        Flow::Continue
    );
    assert!(!session.engine().has_active());
}

#[test]
fn test_dispatch_control_applies_action() {
    let mut engine = RuleEngine::with_seed(EngineConfig::with_board(4, 4).unwrap(), 1);
    assert!(engine.place_active(Piece::at(PieceKind::O, 1, -2)));

    assert_eq!(
        dispatch(&mut engine, Action::Control(GameAction::MoveLeft)),
        Flow::Continue
    );
    assert_eq!(engine.active().unwrap().x, 0);
    assert_eq!(dispatch(&mut engine, Action::Quit), Flow::Quit);
}

#[test]
fn test_action_names() {
    assert_eq!(Action::from_str("quit"), Some(Action::Quit));
    assert_eq!(
        Action::from_str("ensurePiece"),
        Some(Action::Control(GameAction::EnsurePiece))
    );
    assert_eq!(Action::from_str(""), None);
}

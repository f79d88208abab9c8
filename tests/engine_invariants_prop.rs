//! Property tests for the rule engine.
//!
//! Random seeds, board sizes and action sequences must never break:
//! - the falling piece stays inside the columns and above the floor
//! - a piece that finished a move down is either settled or not touching anything
//! - while the game runs, no full row is left on the board
//! - once over, the game stays over and the board stops changing

use blockfall::core::{EngineConfig, RuleEngine};
use blockfall::types::GameAction;
use proptest::prelude::*;

fn action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        2 => Just(GameAction::EnsurePiece),
        4 => Just(GameAction::MoveDown),
        2 => Just(GameAction::MoveLeft),
        2 => Just(GameAction::MoveRight),
        1 => Just(GameAction::Rotate),
    ]
}

fn assert_piece_in_bounds(engine: &RuleEngine) {
    if let Some(piece) = engine.active() {
        let board = engine.board();
        for (x, y) in piece.cells() {
            assert!(board.column_in_range(x), "{piece:?} column {x}");
            assert!(y <= board.last_row(), "{piece:?} row {y}");
            assert!(y < 0 || board.is_empty_at(x, y), "{piece:?} overlaps ({x}, {y})");
        }
    }
}

proptest! {
    #[test]
    fn generated_rollout_respects_invariants(
        seed in any::<u64>(),
        rows in 1u16..12,
        cols in 4u16..9,
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut engine = RuleEngine::with_seed(EngineConfig::with_board(rows, cols).unwrap(), seed);
        let mut frozen = None;

        for action in actions {
            let changed = engine.apply_action(action);
            assert_piece_in_bounds(&engine);

            if let Some((board, score)) = &frozen {
                prop_assert!(!changed);
                prop_assert_eq!(engine.board(), board);
                prop_assert_eq!(engine.score(), *score);
                continue;
            }

            if engine.is_game_over() {
                prop_assert!(!engine.has_active());
                prop_assert!(!engine.board().has_overflow());
                frozen = Some((engine.board().clone(), engine.score()));
                continue;
            }

            prop_assert!(!engine.board().has_overflow());
            for y in 0..rows as usize {
                prop_assert!(!engine.board().is_row_full(y), "row {} left full", y);
            }
            if action == GameAction::MoveDown {
                prop_assert!(!engine.touches_bottom());
            }
            prop_assert_eq!(engine.score(), engine.lines());
        }
    }

    #[test]
    fn spawn_is_within_columns_and_above_board(seed in any::<u64>(), cols in 4u16..16) {
        let mut engine = RuleEngine::with_seed(EngineConfig::with_board(20, cols).unwrap(), seed);
        prop_assert!(engine.ensure_active_piece());

        let piece = engine.active().unwrap();
        prop_assert_eq!(piece.y, -piece.height());
        prop_assert!(piece.x >= 0);
        prop_assert!(piece.x + piece.width() <= i32::from(cols));
    }
}

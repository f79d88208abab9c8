//! Core rule engine - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and nothing else. It has no
//! dependency on terminals, timers or input devices:
//!
//! - **Deterministic**: the same seed produces the same pieces and spawn columns
//! - **Testable**: every rule is reachable through plain method calls
//! - **Injected logging**: the engine logs through the [`log::Log`] handle it is given
//!
//! # Module Structure
//!
//! - [`board`]: the settled grid and its overflow-row queue
//! - [`pieces`]: the seven shape matrices and the falling [`Piece`]
//! - [`generator`]: uniform random piece selection
//! - [`rule_engine`]: movement, collision, settling, game over and line clears
//! - [`snapshot`] / [`projection`]: read-only views for renderers
//! - [`config`]: construction parameters and their validation
//! - [`logger`]: the injected logging capability
//!
//! # Game Rules
//!
//! - Pieces spawn fully above the board at a random column
//! - A piece settles as soon as it rests on the floor or on a Dead cell, whether it
//!   got there by falling or by sliding sideways
//! - A piece that settles with any cell above row 0 ends the game
//! - Full rows are removed and each clear adds the configured weight to the score
//! - Rotation is accepted but does nothing
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, RuleEngine};
//! use blockfall_types::GameAction;
//!
//! let mut engine = RuleEngine::with_seed(EngineConfig::default(), 12345);
//! engine.apply_action(GameAction::EnsurePiece);
//!
//! while engine.has_active() {
//!     engine.apply_action(GameAction::MoveDown);
//! }
//!
//! assert_eq!(engine.pieces_settled(), 1);
//! assert!(!engine.is_game_over());
//! ```

pub mod board;
pub mod config;
pub mod generator;
pub mod logger;
pub mod pieces;
pub mod projection;
pub mod rule_engine;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use generator::generate;
pub use logger::{GlobalLogger, SharedLogger};
pub use pieces::{get_shape, Piece, Shape};
pub use projection::{active_cells, board_cells, dead_keys, CellKey, CellView};
pub use rule_engine::RuleEngine;
pub use snapshot::Snapshot;

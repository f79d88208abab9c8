//! Rule engine - owns the board and the falling piece
//!
//! This module ties together the board, pieces and generator. It implements movement,
//! collision, settling, game-over detection and line clears.
//!
//! Every mutating operation returns whether it changed anything and is a no-op once
//! the game is over.

use log::Level;
use rand::Rng;

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::generator::{self, EngineRng};
use crate::logger::{self, SharedLogger};
use crate::pieces::Piece;
use crate::types::{CellState, GameAction, SettleEvent};

/// Complete rule engine state
#[derive(Clone)]
pub struct RuleEngine {
    config: EngineConfig,
    board: Board,
    active: Option<Piece>,
    score: u64,
    lines: u64,
    pieces_settled: u64,
    game_over: bool,
    /// Last settle outcome (consumed by observers).
    last_event: Option<SettleEvent>,
    rng: EngineRng,
    logger: SharedLogger,
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("active", &self.active)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}

impl RuleEngine {
    /// Create an engine seeded from the thread RNG, logging to the global logger
    pub fn new(config: EngineConfig) -> Self {
        Self::build(config, generator::entropy_rng(), logger::global())
    }

    /// Create a reproducible engine
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::build(config, generator::seeded_rng(seed), logger::global())
    }

    /// Create a reproducible engine that logs to `logger`
    pub fn with_logger(config: EngineConfig, seed: u64, logger: SharedLogger) -> Self {
        Self::build(config, generator::seeded_rng(seed), logger)
    }

    /// Create a reproducible engine that starts from a prepared board.
    ///
    /// The board must have exactly the configured dimensions.
    pub fn with_board(
        config: EngineConfig,
        seed: u64,
        board: Board,
    ) -> Result<Self, ConfigError> {
        if board.rows() != config.rows() || board.cols() != config.cols() {
            return Err(ConfigError::BoardMismatch {
                rows: board.rows(),
                cols: board.cols(),
                expected_rows: config.rows(),
                expected_cols: config.cols(),
            });
        }

        let mut engine = Self::with_seed(config, seed);
        engine.board = board;
        Ok(engine)
    }

    fn build(config: EngineConfig, rng: EngineRng, logger: SharedLogger) -> Self {
        Self {
            board: Board::new(config.rows(), config.cols()),
            config,
            active: None,
            score: 0,
            lines: 0,
            pieces_settled: 0,
            game_over: false,
            last_event: None,
            rng,
            logger,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn pieces_settled(&self) -> u64 {
        self.pieces_settled
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Logger this engine was built with, for collaborators that log alongside it
    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    fn log(&self, level: Level, args: std::fmt::Arguments<'_>) {
        logger::emit(self.logger.as_ref(), level, args);
    }

    /// True when the call should be ignored because the game has ended
    fn halted(&self, op: &str) -> bool {
        if self.game_over {
            self.log(Level::Trace, format_args!("{op} ignored: game over"));
        }
        self.game_over
    }

    /// Spawn a random piece above the board if none is falling
    pub fn ensure_active_piece(&mut self) -> bool {
        if self.halted("ensure_active_piece") || self.active.is_some() {
            return false;
        }

        let mut piece = generator::generate(&mut self.rng);
        let max_x = i32::from(self.config.cols()) - piece.width();
        piece.x = self.rng.random_range(0..=max_x);
        piece.y = -piece.height();

        self.log(
            Level::Debug,
            format_args!("spawned {:?} at x={} y={}", piece.kind, piece.x, piece.y),
        );
        self.active = Some(piece);
        true
    }

    /// Install a caller-built piece at its own anchor.
    ///
    /// Fails if a piece is already falling or any of its cells would leave the
    /// board's columns or overlap a Dead cell.
    pub fn place_active(&mut self, piece: Piece) -> bool {
        if self.halted("place_active") || self.active.is_some() || !self.fits(&piece) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Every cell is within the columns and, when on the board, on an Empty cell.
    /// Cells above row 0 cannot collide.
    fn fits(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            self.board.column_in_range(x)
                && y < i32::from(self.config.rows())
                && (y < 0 || self.board.is_empty_at(x, y))
        })
    }

    /// Whether the active piece is resting on the floor or a Dead cell
    pub fn touches_bottom(&self) -> bool {
        match self.active {
            Some(ref piece) => self.piece_touches_bottom(piece),
            None => false,
        }
    }

    fn piece_touches_bottom(&self, piece: &Piece) -> bool {
        let last_row = self.board.last_row();
        piece
            .cells()
            .iter()
            .any(|&(x, y)| y == last_row || self.board.is_dead_at(x, y + 1))
    }

    /// Soft drop / fall tick.
    ///
    /// A piece that already rests on something settles without moving; otherwise it
    /// drops one row (never past the floor) and settles if it landed.
    pub fn move_down(&mut self) -> bool {
        if self.halted("move_down") {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self.piece_touches_bottom(&active) {
            let floor_y = self.board.last_row() - (active.height() - 1);
            let y = (active.y + 1).min(floor_y);
            self.active = Some(Piece { y, ..active });
        }

        if self.touches_bottom() {
            self.settle();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Accepts the call and changes nothing.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            self.log(Level::Trace, format_args!("rotate ignored: game over"));
        }
        false
    }

    /// Shift horizontally if every occupied cell can follow, then settle on contact.
    fn try_shift(&mut self, dx: i32) -> bool {
        if self.halted("shift") {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, 0);
        if !self.fits(&moved) {
            return false;
        }

        self.active = Some(moved);
        if self.touches_bottom() {
            self.settle();
        }
        true
    }

    /// Commit the active piece, check for game over and clear lines.
    fn settle(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let mut event = SettleEvent::default();
        let cols = self.config.cols() as usize;

        // Matrix rows are visited bottom-up so the row nearest the board is queued first.
        let shape = active.shape();
        for row in (0..shape.height()).rev() {
            let y = active.y + row;
            if y < 0 {
                let mut overflow = vec![CellState::Empty; cols];
                for col in shape.row_columns(row) {
                    if let Some(cell) = overflow.get_mut((active.x + col) as usize) {
                        *cell = CellState::Dead;
                    }
                }
                self.board.push_overflow(overflow);
                event.overflow_rows += 1;
            } else {
                for col in shape.row_columns(row) {
                    if self.board.set(active.x + col, y, CellState::Dead) {
                        event.cells_committed += 1;
                    }
                }
            }
        }
        self.pieces_settled += 1;

        self.log(
            Level::Debug,
            format_args!(
                "settled {:?} at x={} y={} ({} cells, {} overflow rows)",
                active.kind, active.x, active.y, event.cells_committed, event.overflow_rows
            ),
        );

        if self.check_game_over() {
            event.game_over = true;
        } else {
            let cleared = self.clear_lines();
            event.lines_cleared = cleared;
            self.lines += u64::from(cleared);
            self.score += u64::from(cleared) * u64::from(self.config.line_weight());
        }

        self.last_event = Some(event);
    }

    /// Over iff anything settled above row 0. Drains the overflow queue either way.
    fn check_game_over(&mut self) -> bool {
        if self.board.has_overflow() {
            self.game_over = true;
            self.log(
                Level::Warn,
                format_args!(
                    "game over after {} pieces, score {}",
                    self.pieces_settled, self.score
                ),
            );
        }
        self.board.drain_overflow();
        self.game_over
    }

    fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.log(Level::Info, format_args!("cleared {cleared} lines"));
        }
        cleared
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::EnsurePiece => self.ensure_active_piece(),
            GameAction::MoveDown => self.move_down(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Check if the active piece could shift by `dx` columns
    pub fn can_shift(&self, dx: i32) -> bool {
        self.active
            .is_some_and(|active| self.fits(&active.shifted(dx, 0)))
    }
}

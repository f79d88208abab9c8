//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the rule engine, the driver, and the terminal front end alike.
//!
//! # Coordinates
//!
//! Boards are addressed as `(x, y)` = `(column, row)`:
//!
//! - **Row 0** is the top of the board, nearest to where pieces spawn
//! - **Row `rows - 1`** is the floor
//! - A falling piece may have a negative `y` while it is still above the board
//!
//! # Default Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Board height in cells |
//! | `DEFAULT_COLS` | 10 | Board width in cells |
//! | `DEFAULT_CELL_WIDTH` | 32 | Pixel width of one cell |
//! | `DEFAULT_CELL_HEIGHT` | 32 | Pixel height of one cell |
//! | `FALL_INTERVAL_MS` | 500 | Fall timer threshold |
//! | `FRAME_MS` | 16 | Driver frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellState, GameAction, PieceKind};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert!(CellState::Dead.is_dead());
//! ```

/// Default board height in cells
pub const DEFAULT_ROWS: u16 = 20;

/// Default board width in cells
pub const DEFAULT_COLS: u16 = 10;

/// Default pixel width of one board cell
pub const DEFAULT_CELL_WIDTH: u32 = 32;

/// Default pixel height of one board cell
pub const DEFAULT_CELL_HEIGHT: u32 = 32;

/// Fall timer threshold in milliseconds
pub const FALL_INTERVAL_MS: u64 = 500;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Widest and tallest extent of any tetromino shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// State of a single board cell
///
/// - **Empty**: nothing there
/// - **Active**: covered by the falling piece (only ever produced by read
///   projections that overlay the active piece; never stored in a board)
/// - **Dead**: permanently settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Active,
    Dead,
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, CellState::Dead)
    }

    /// Single-character form used by debug dumps and test fixtures
    pub fn as_char(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Active => '@',
            CellState::Dead => '#',
        }
    }
}

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Operations a driver may request from the rule engine, one per logical event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Spawn a fresh piece above the board if none is falling
    EnsurePiece,
    /// Soft drop / fall tick
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Accepted and ignored; rotation is not implemented
    Rotate,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ensurepiece" => Some(GameAction::EnsurePiece),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::EnsurePiece => "ensurePiece",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Pixel-space rectangle of one board cell
///
/// `x`/`y` are signed so cells of a piece above the board still map to a
/// rectangle (with negative `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Rectangle covering cell `(col, row)` for the given cell size
    pub fn for_cell(col: i32, row: i32, cell_width: u32, cell_height: u32) -> Self {
        Self {
            x: i64::from(col) * i64::from(cell_width),
            y: i64::from(row) * i64::from(cell_height),
            width: cell_width,
            height: cell_height,
        }
    }
}

/// Event recorded every time the active piece settles.
///
/// Consumed by observers through `RuleEngine::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettleEvent {
    /// Occupied cells written into the board as Dead
    pub cells_committed: u32,
    /// Shape rows that died above row 0
    pub overflow_rows: u32,
    /// Rows removed by the line-clear pass (0 when the settle ended the game)
    pub lines_cleared: u32,
    pub game_over: bool,
}

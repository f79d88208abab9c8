//! Read projection for drawable mirrors
//!
//! Enumerates board and active-piece cells together with their pixel rectangles so a
//! renderer can position one drawable per cell. Nothing here mutates the engine.
//! Drawables for Dead cells identify their source with a [`CellKey`] rather than a
//! reference into the board.

use crate::rule_engine::RuleEngine;
use crate::types::{CellState, PixelRect};

/// Stable lookup key of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: u16,
    pub col: u16,
}

impl CellKey {
    /// Flat row-major index for a board `cols` wide
    pub fn index(&self, cols: u16) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }
}

/// One cell as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub col: i32,
    pub row: i32,
    pub state: CellState,
    pub rect: PixelRect,
}

impl CellView {
    /// Key for on-board cells; None while the cell is above row 0
    pub fn key(&self) -> Option<CellKey> {
        Some(CellKey {
            row: u16::try_from(self.row).ok()?,
            col: u16::try_from(self.col).ok()?,
        })
    }
}

/// Every board cell, row-major, with its stored state
pub fn board_cells(engine: &RuleEngine) -> impl Iterator<Item = CellView> + '_ {
    let config = engine.config();
    let (cw, ch) = (config.cell_width(), config.cell_height());
    let cols = i32::from(config.cols());

    engine
        .board()
        .cells()
        .iter()
        .enumerate()
        .map(move |(i, &state)| {
            let (col, row) = (i as i32 % cols, i as i32 / cols);
            CellView {
                col,
                row,
                state,
                rect: PixelRect::for_cell(col, row, cw, ch),
            }
        })
}

/// Occupied cells of the falling piece that are on the board, as `Active`
pub fn active_cells(engine: &RuleEngine) -> impl Iterator<Item = CellView> + '_ {
    let config = engine.config();
    let (cw, ch) = (config.cell_width(), config.cell_height());

    engine
        .active()
        .map(|piece| piece.cells())
        .into_iter()
        .flatten()
        .filter(|&(_, y)| y >= 0)
        .map(move |(col, row)| CellView {
            col,
            row,
            state: CellState::Active,
            rect: PixelRect::for_cell(col, row, cw, ch),
        })
}

/// Keys of every Dead cell, in row-major order
pub fn dead_keys(engine: &RuleEngine) -> impl Iterator<Item = CellKey> + '_ {
    board_cells(engine)
        .filter(|view| view.state.is_dead())
        .filter_map(|view| view.key())
}

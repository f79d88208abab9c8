//! Board module - manages the settled grid
//!
//! The board is a `rows x cols` grid where each cell is Empty or Dead.
//! Cells live in one flat row-major vector; dimensions only change on [`Board::reset`].
//! Coordinates: (x, y) where x is the column (left to right) and y the row (top to bottom).
//!
//! Next to the grid the board keeps a FIFO of *overflow rows*: synthetic rows built
//! from the parts of a piece that settled above row 0. They never enter the grid
//! except through the line-clear refill, and exist to make top-outs observable.

use std::collections::VecDeque;

use crate::types::CellState;

/// One synthetic row of width `cols`
pub type OverflowRow = Vec<CellState>;

/// The settled board plus its overflow queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<CellState>,
    overflow: VecDeque<OverflowRow>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Callers must pass positive dimensions; `EngineConfig` enforces this.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows as usize * cols as usize],
            overflow: VecDeque::new(),
        }
    }

    /// Re-dimension the board and fill every cell with Empty.
    pub fn reset(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells
            .resize(rows as usize * cols as usize, CellState::Empty);
        self.overflow.clear();
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Index of the floor row
    pub fn last_row(&self) -> i32 {
        i32::from(self.rows) - 1
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and Empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(CellState::Empty))
    }

    /// Within bounds and Dead
    pub fn is_dead_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(CellState::Dead))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        !self.column_in_range(x) || y < 0 || y >= i32::from(self.rows)
    }

    pub fn column_in_range(&self, x: i32) -> bool {
        x >= 0 && x < i32::from(self.cols)
    }

    /// Row `y` as a slice, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        if y >= self.rows as usize {
            return None;
        }
        let width = self.cols as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Check if a row is completely Dead
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(CellState::is_dead))
    }

    /// Remove row `y`, shift every row above it down by one and refill row 0.
    ///
    /// Row 0 receives the oldest pending overflow row if there is one, otherwise
    /// an Empty row. Returns false if `y` is out of bounds.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }

        let width = self.cols as usize;

        // copy_within handles the overlapping source/destination ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        let top = &mut self.cells[..width];
        match self.overflow.pop_front() {
            Some(refill) => {
                for (dst, src) in top.iter_mut().zip(refill.into_iter()) {
                    *dst = src;
                }
            }
            None => top.fill(CellState::Empty),
        }

        true
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Rows are scanned from the floor upwards. After a clear the same index is
    /// tested again, since the row that slid into it may be full as well.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.rows as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Queue a synthetic row. Rows of the wrong width are padded or cut to `cols`.
    pub fn push_overflow(&mut self, mut row: OverflowRow) {
        row.resize(self.cols as usize, CellState::Empty);
        self.overflow.push_back(row);
    }

    pub fn pop_overflow(&mut self) -> Option<OverflowRow> {
        self.overflow.pop_front()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    /// Drop every pending overflow row, returning how many there were.
    pub fn drain_overflow(&mut self) -> usize {
        let n = self.overflow.len();
        self.overflow.clear();
        n
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Count of Dead cells on the grid
    pub fn dead_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_dead()).count()
    }

    /// Build a board from rows of `'#'` (Dead) and `'.'` (Empty), top row first.
    ///
    /// Returns None if there are no rows, the rows differ in length or either
    /// dimension does not fit in a `u16`.
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }
        let height = u16::try_from(rows.len()).ok()?;
        let cols = u16::try_from(width).ok()?;

        let mut board = Self::new(height, cols);
        for (y, line) in (0..).zip(rows) {
            for (x, ch) in (0..).zip(line.chars()) {
                if ch == '#' {
                    board.set(x, y, CellState::Dead);
                }
            }
        }
        Some(board)
    }

    /// Inverse of [`Board::from_ascii`]
    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.rows as usize)
            .filter_map(|y| self.row(y))
            .map(|row| row.iter().map(CellState::as_char).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(20, 10);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_reset_changes_dimensions_and_empties() {
        let mut board = Board::from_ascii(&["##", "#."]).unwrap();
        board.push_overflow(vec![CellState::Dead; 2]);

        board.reset(3, 5);
        assert_eq!((board.rows(), board.cols()), (3, 5));
        assert_eq!(board.cells().len(), 15);
        assert_eq!(board.dead_count(), 0);
        assert!(!board.has_overflow());
    }

    #[test]
    fn test_clear_row_refills_from_overflow() {
        let mut board = Board::from_ascii(&["....", "#...", "####"]).unwrap();
        board.push_overflow(vec![
            CellState::Dead,
            CellState::Empty,
            CellState::Empty,
            CellState::Dead,
        ]);

        assert!(board.clear_row(2));
        assert_eq!(board.to_ascii(), vec!["#..#", "....", "#..."]);
        assert!(!board.has_overflow());
    }

    #[test]
    fn test_clear_full_rows_retests_same_index() {
        let mut board = Board::from_ascii(&["#...", "####", "####", ".###"]).unwrap();
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_ascii(), vec!["....", "....", "#...", ".###"]);
    }

    #[test]
    fn test_full_overflow_row_is_cleared_in_same_pass() {
        let mut board = Board::from_ascii(&["..", "##"]).unwrap();
        board.push_overflow(vec![CellState::Dead, CellState::Dead]);

        // Row 1 clears, the full overflow row slides into row 0 and is cleared next.
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_ascii(), vec!["..", ".."]);
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert_eq!(Board::from_ascii(&["##", "#"]), None);
        assert_eq!(Board::from_ascii(&[]), None);

        let board = Board::from_ascii(&["#.", ".#"]).unwrap();
        assert_eq!(board.get(0, 0), Some(CellState::Dead));
        assert_eq!(board.get(1, 1), Some(CellState::Dead));
        assert_eq!(board.dead_count(), 2);
    }

    #[test]
    fn test_push_overflow_normalises_width() {
        let mut board = Board::new(2, 4);
        board.push_overflow(vec![CellState::Dead]);
        let row = board.pop_overflow().unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], CellState::Dead);
        assert!(row[1..].iter().all(CellState::is_empty));
    }
}

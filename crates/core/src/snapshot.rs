use crate::pieces::Piece;
use crate::rule_engine::RuleEngine;
use crate::types::CellState;

/// Flattened copy of the engine with the falling piece drawn in as `Active` cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major, `rows * cols` long
    pub grid: Vec<CellState>,
    pub active: Option<Piece>,
    pub score: u64,
    pub lines: u64,
    pub game_over: bool,
}

impl Snapshot {
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.cols as usize || y >= self.rows as usize {
            return None;
        }
        self.grid.get(y * self.cols as usize + x).copied()
    }

    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        let width = self.cols as usize;
        self.grid.get(y * width..(y + 1) * width)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl RuleEngine {
    /// Fill `out` in place, reusing its grid allocation
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        let board = self.board();
        out.rows = board.rows();
        out.cols = board.cols();
        out.grid.clear();
        out.grid.extend_from_slice(board.cells());

        out.active = self.active();
        if let Some(active) = out.active {
            let cols = out.cols as usize;
            for (x, y) in active.cells() {
                if y >= 0 && !board.is_out_of_bounds(x, y) {
                    out.grid[y as usize * cols + x as usize] = CellState::Active;
                }
            }
        }

        out.score = self.score();
        out.lines = self.lines();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::config::EngineConfig;
    use crate::pieces::Piece;
    use crate::rule_engine::RuleEngine;
    use crate::types::{CellState, PieceKind};

    #[test]
    fn test_snapshot_overlays_only_on_board_cells() {
        let board = Board::from_ascii(&["....", "....", "....", "#..."]).unwrap();
        let mut engine =
            RuleEngine::with_board(EngineConfig::with_board(4, 4).unwrap(), 3, board).unwrap();
        assert!(engine.place_active(Piece::at(PieceKind::O, 1, -1)));

        let snap = engine.snapshot();
        assert_eq!(snap.get(1, 0), Some(CellState::Active));
        assert_eq!(snap.get(2, 0), Some(CellState::Active));
        assert_eq!(snap.get(0, 3), Some(CellState::Dead));
        assert_eq!(
            snap.grid.iter().filter(|c| **c == CellState::Active).count(),
            2
        );
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let engine = RuleEngine::with_seed(EngineConfig::default(), 3);
        let mut snap = engine.snapshot();
        let cap = snap.grid.capacity();
        engine.snapshot_into(&mut snap);
        assert_eq!(snap.grid.capacity(), cap);
        assert_eq!(snap.row(0).map(<[CellState]>::len), Some(10));
    }
}

//! Pieces module - tetromino shape matrices and the falling piece
//!
//! Every kind has one fixed orientation, stored as a small matrix of markers.
//! There is no rotation system: the engine's rotate operation is a stub.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_SIZE};

/// One row of a shape matrix; `true` marks an occupied cell
pub type ShapeRow = [bool; MAX_SHAPE_SIZE];

/// Offset of an occupied cell relative to the piece anchor, as (column, row)
pub type CellOffset = (i32, i32);

/// Rectangular marker matrix of a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [ShapeRow; MAX_SHAPE_SIZE],
}

const X: bool = true;
const O: bool = false;

const I_SHAPE: Shape = Shape {
    width: 4,
    height: 1,
    rows: [[X, X, X, X], [O; 4], [O; 4], [O; 4]],
};

const J_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    rows: [[X, O, O, O], [X, X, X, O], [O; 4], [O; 4]],
};

const L_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    rows: [[O, O, X, O], [X, X, X, O], [O; 4], [O; 4]],
};

const O_SHAPE: Shape = Shape {
    width: 2,
    height: 2,
    rows: [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]],
};

const S_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    rows: [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]],
};

const T_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    rows: [[O, X, O, O], [X, X, X, O], [O; 4], [O; 4]],
};

const Z_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    rows: [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]],
};

/// Get the shape matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

impl Shape {
    pub fn width(&self) -> i32 {
        i32::from(self.width)
    }

    pub fn height(&self) -> i32 {
        i32::from(self.height)
    }

    /// Marker at (row, col) of the matrix; false outside it
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row >= self.height() || col >= self.width() {
            return false;
        }
        self.rows[row as usize][col as usize]
    }

    /// Occupied cells of matrix row `row`, as column offsets
    pub fn row_columns(&self, row: i32) -> impl Iterator<Item = i32> + '_ {
        (0..self.width()).filter(move |&col| self.is_filled(row, col))
    }

    /// Occupied cells, scanned from the bottom matrix row upwards
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        let mut out = ArrayVec::new();
        for row in (0..self.height()).rev() {
            for col in self.row_columns(row) {
                out.push((col, row));
            }
        }
        out
    }
}

/// A piece: kind, shape matrix and anchor of the matrix's top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at anchor (0, 0)
    pub fn new(kind: PieceKind) -> Self {
        Self { kind, x: 0, y: 0 }
    }

    /// Create a piece at the given anchor
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    pub fn shape(&self) -> Shape {
        get_shape(self.kind)
    }

    pub fn width(&self) -> i32 {
        self.shape().width()
    }

    pub fn height(&self) -> i32 {
        self.shape().height()
    }

    /// Absolute board coordinates (x, y) of every occupied cell
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        self.shape()
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Board row of the lowest occupied cell
    pub fn bottom(&self) -> i32 {
        self.y + self.height() - 1
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

//! Pieces module tests - shape matrices and piece geometry

use blockfall::core::{get_shape, Piece};
use blockfall::types::PieceKind;

fn rows(kind: PieceKind) -> Vec<String> {
    let shape = get_shape(kind);
    (0..shape.height())
        .map(|r| {
            (0..shape.width())
                .map(|c| if shape.is_filled(r, c) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_shape_matrices() {
    assert_eq!(rows(PieceKind::I), vec!["####"]);
    assert_eq!(rows(PieceKind::O), vec!["##", "##"]);
    assert_eq!(rows(PieceKind::J), vec!["#..", "###"]);
    assert_eq!(rows(PieceKind::L), vec!["..#", "###"]);
    assert_eq!(rows(PieceKind::S), vec![".##", "##."]);
    assert_eq!(rows(PieceKind::T), vec![".#.", "###"]);
    assert_eq!(rows(PieceKind::Z), vec!["##.", ".##"]);
}

#[test]
fn test_every_kind_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(get_shape(kind).cells().len(), 4, "{kind:?}");
    }
}

#[test]
fn test_cells_listed_bottom_row_first() {
    let cells = get_shape(PieceKind::T).cells();
    assert_eq!(cells.as_slice(), &[(0, 1), (1, 1), (2, 1), (1, 0)]);
}

#[test]
fn test_piece_absolute_cells() {
    let piece = Piece::at(PieceKind::Z, 3, -1);
    let mut cells = piece.cells().to_vec();
    cells.sort();
    assert_eq!(cells, vec![(3, -1), (4, -1), (4, 0), (5, 0)]);
    assert_eq!(piece.bottom(), 0);
}

#[test]
fn test_shifted_keeps_kind() {
    let piece = Piece::new(PieceKind::L).shifted(2, 5);
    assert_eq!(piece, Piece::at(PieceKind::L, 2, 5));
    assert_eq!(piece.width(), 3);
    assert_eq!(piece.height(), 2);
}

#[test]
fn test_is_filled_outside_matrix() {
    let shape = get_shape(PieceKind::O);
    assert!(!shape.is_filled(-1, 0));
    assert!(!shape.is_filled(0, 2));
    assert!(!shape.is_filled(2, 0));
}

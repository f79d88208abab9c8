use blockfall::core::{Board, EngineConfig, Piece, RuleEngine};
use blockfall::term::{encode_full_into, GameView, Viewport};
use blockfall::types::PieceKind;

fn engine() -> RuleEngine {
    RuleEngine::with_seed(EngineConfig::default(), 1)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = engine().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_cells_two_chars_wide() {
    let mut rows = vec!["..........".to_string(); 20];
    rows[19] = "#.........".to_string();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let board = Board::from_ascii(&rows).unwrap();
    let mut engine = RuleEngine::with_board(EngineConfig::default(), 1, board).unwrap();
    assert!(engine.place_active(Piece::at(PieceKind::I, 4, 0)));

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(22, 22));

    // Inside border: (1,1) origin.
    let dead = fb.get(1, 20).unwrap();
    assert_eq!(dead.ch, fb.get(2, 20).unwrap().ch);
    assert_ne!(dead.ch, fb.get(3, 20).unwrap().ch);

    let active = fb.get(1 + 4 * 2, 1).unwrap();
    assert_eq!(active.ch, '█');
    assert_eq!(fb.get(1 + 7 * 2 + 1, 1).unwrap().ch, '█');
    assert_ne!(active.style, dead.style);
}

#[test]
fn term_view_render_into_resizes() {
    let snap = engine().snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(10, 10));

    view.render_into(&snap, Viewport::new(60, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 30));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(String::from_utf8_lossy(&out).contains("SCORE"));
}

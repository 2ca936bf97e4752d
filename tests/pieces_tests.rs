//! Shape catalog and active piece tests

use tetris_grid::core::pieces::{rotate_clockwise, spawn_offsets, PieceShape};
use tetris_grid::core::GridTetromino;
use tetris_grid::types::{PieceKind, Point, TetColor};

#[test]
fn test_catalog_colors() {
    let expected = [
        (PieceKind::S, TetColor::Red),
        (PieceKind::Z, TetColor::Green),
        (PieceKind::L, TetColor::Orange),
        (PieceKind::J, TetColor::DarkBlue),
        (PieceKind::O, TetColor::Yellow),
        (PieceKind::I, TetColor::LightBlue),
        (PieceKind::T, TetColor::Purple),
    ];
    for (kind, color) in expected {
        assert_eq!(PieceShape::of(kind).color, color, "{:?}", kind);
    }
}

#[test]
fn test_every_shape_has_pivot_block() {
    for kind in PieceKind::ALL {
        assert!(
            spawn_offsets(kind).contains(&Point::ORIGIN),
            "{:?} has no block at the pivot",
            kind
        );
    }
}

#[test]
fn test_rotation_closes_after_four_turns() {
    for kind in PieceKind::ALL {
        let start = spawn_offsets(kind);
        let mut offsets = start;
        for _ in 0..4 {
            offsets = rotate_clockwise(kind, offsets);
        }
        assert_eq!(offsets, start, "{:?}", kind);
    }
}

#[test]
fn test_non_o_rotation_changes_offsets() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let start = spawn_offsets(kind);
        assert_ne!(rotate_clockwise(kind, start), start, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let start = spawn_offsets(PieceKind::O);
    let mut offsets = start;
    for _ in 0..7 {
        offsets = rotate_clockwise(PieceKind::O, offsets);
        assert_eq!(offsets, start);
    }
}

#[test]
fn test_rotation_rule() {
    // (x, y) -> (y, -x)
    let turned = rotate_clockwise(PieceKind::J, spawn_offsets(PieceKind::J));
    assert_eq!(
        turned,
        [
            Point::new(-1, 1),
            Point::new(0, 1),
            Point::new(0, 0),
            Point::new(0, -1)
        ]
    );
}

#[test]
fn test_mapped_blocks_are_offsets_plus_location() {
    let loc = Point::new(3, 7);
    let piece = GridTetromino::new(PieceKind::S, loc);
    for (block, offset) in piece.mapped_blocks().iter().zip(piece.offsets()) {
        assert_eq!(*block, *offset + loc);
    }
}

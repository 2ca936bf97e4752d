//! Pieces module - piece shape catalog and rotation
//!
//! Each kind has a fixed template of four block offsets around an implicit
//! pivot at (0, 0), a fixed color, and a presentation offset used only by
//! front ends to center previews. Rotation is a pure function over the four
//! offsets; there is no stored rotation state and no wall kicks.

use crate::types::{PieceKind, Point, TetColor};

/// Offsets of the four blocks of a piece, relative to its pivot
pub type ShapeOffsets = [Point; 4];

/// Center of a shape's bounding box measured from the pivot cell's top-left
/// corner, in block units. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationOffset {
    pub x: f32,
    pub y: f32,
}

impl PresentationOffset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Catalog entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceShape {
    pub kind: PieceKind,
    pub offsets: ShapeOffsets,
    pub color: TetColor,
    pub presentation: PresentationOffset,
}

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

impl PieceShape {
    /// Instantiate the template for a kind
    pub fn of(kind: PieceKind) -> Self {
        Self {
            kind,
            offsets: spawn_offsets(kind),
            color: kind.color(),
            presentation: presentation_offset(kind),
        }
    }
}

/// Block offsets for a kind in its spawn orientation
pub fn spawn_offsets(kind: PieceKind) -> ShapeOffsets {
    match kind {
        PieceKind::S => [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
        PieceKind::Z => [p(-1, 1), p(0, 1), p(0, 0), p(1, 0)],
        PieceKind::L => [p(-1, 0), p(0, 0), p(1, 0), p(1, -1)],
        PieceKind::J => [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)],
        PieceKind::O => [p(-1, 0), p(-1, 1), p(0, 1), p(0, 0)],
        PieceKind::I => [p(-2, 0), p(-1, 0), p(0, 0), p(1, 0)],
        PieceKind::T => [p(-1, 0), p(0, 0), p(1, 0), p(0, -1)],
    }
}

/// Presentation offset for a kind in its spawn orientation
pub fn presentation_offset(kind: PieceKind) -> PresentationOffset {
    match kind {
        PieceKind::S | PieceKind::Z => PresentationOffset::new(0.5, 1.0),
        PieceKind::L | PieceKind::J | PieceKind::T => PresentationOffset::new(0.5, 0.0),
        PieceKind::O => PresentationOffset::new(0.0, 1.0),
        PieceKind::I => PresentationOffset::new(0.0, 0.5),
    }
}

/// Rotate offsets a quarter turn about the pivot.
///
/// Every offset has its components swapped and the new y negated. The O kind
/// is exempt and gets its input back unchanged.
pub fn rotate_clockwise(kind: PieceKind, offsets: ShapeOffsets) -> ShapeOffsets {
    if kind == PieceKind::O {
        return offsets;
    }
    offsets.map(|o| o.swapped().scaled_y(-1))
}

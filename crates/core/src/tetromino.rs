//! Active piece - a shape bound to a location on the board.

use crate::pieces::{rotate_clockwise, spawn_offsets, ShapeOffsets};
use crate::types::{PieceKind, Point, TetColor};

/// A piece positioned on the grid.
///
/// This is a plain value: copying it copies the current offsets and grid
/// location, which is how the engine tests a move before committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridTetromino {
    kind: PieceKind,
    offsets: ShapeOffsets,
    grid_loc: Point,
}

impl GridTetromino {
    /// Create a piece of `kind` in its spawn orientation at `grid_loc`
    pub fn new(kind: PieceKind, grid_loc: Point) -> Self {
        Self {
            kind,
            offsets: spawn_offsets(kind),
            grid_loc,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> TetColor {
        self.kind.color()
    }

    pub fn offsets(&self) -> &ShapeOffsets {
        &self.offsets
    }

    pub fn grid_loc(&self) -> Point {
        self.grid_loc
    }

    pub fn set_grid_loc(&mut self, grid_loc: Point) {
        self.grid_loc = grid_loc;
    }

    /// Translate the grid location by (dx, dy)
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.grid_loc = self.grid_loc.translated(dx, dy);
    }

    pub fn rotate_clockwise(&mut self) {
        self.offsets = rotate_clockwise(self.kind, self.offsets);
    }

    /// Block positions on the grid (offsets + grid location), recomputed on each call
    pub fn mapped_blocks(&self) -> [Point; 4] {
        self.offsets.map(|o| o + self.grid_loc)
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn moved(mut self, dx: i32, dy: i32) -> Self {
        self.move_by(dx, dy);
        self
    }

    /// Copy of this piece rotated once
    pub fn rotated(mut self) -> Self {
        self.rotate_clockwise();
        self
    }
}

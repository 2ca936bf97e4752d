//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid (10x19 by default) where each cell is
//! either empty or holds the color of a locked block.
//! Uses a flat row-major vector so a whole row is one contiguous slice.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! New pieces spawn at `(width / 2, 0)`.
//!
//! Addressing rules:
//! - [`Board::get`] on an out-of-range point is a contract violation and panics.
//! - [`Board::set`] on an out-of-range point is silently ignored.
//! - [`Board::all_empty`] skips out-of-range points, so a piece hanging above
//!   row 0 is judged only by its on-board blocks.

use crate::types::{Cell, Point, TetColor, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default 10x19 dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board of the given size.
    ///
    /// Panics if either dimension is not positive or the cell count does not
    /// fit in an `i32`.
    pub fn with_size(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        let len = match width.checked_mul(height) {
            Some(len) => len as usize,
            None => panic!("board too large: {}x{}", width, height),
        };
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_valid_point(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether (x, y) addresses a cell of this board
    #[inline(always)]
    pub fn is_valid_point(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get cell at position (x, y)
    ///
    /// Panics if the point is out of range; callers that may hold such points
    /// must check with [`Board::is_valid_point`] or use [`Board::try_get`].
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "board read out of range: ({}, {}) on a {}x{} board",
                x, y, self.width, self.height
            ),
        }
    }

    /// Get cell at a point (see [`Board::get`])
    pub fn get_point(&self, p: Point) -> Cell {
        self.get(p.x, p.y)
    }

    /// Get cell at position (x, y), `None` if out of range
    pub fn try_get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); out-of-range positions are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Set every valid point in `points` to `cell`, skipping invalid ones
    pub fn set_points(&mut self, points: &[Point], cell: Cell) {
        for p in points {
            self.set(p.x, p.y, cell);
        }
    }

    /// True iff every valid point in `points` is empty. Invalid points are ignored.
    pub fn all_empty(&self, points: &[Point]) -> bool {
        points
            .iter()
            .filter_map(|p| self.try_get(p.x, p.y))
            .all(|cell| cell.is_none())
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.try_get(x, y), Some(Some(_)))
    }

    fn row(&self, y: i32) -> &[Cell] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Check if a row is completely filled
    ///
    /// Panics if `y` is not a row of this board.
    pub fn is_row_completed(&self, y: i32) -> bool {
        assert!(
            y >= 0 && y < self.height,
            "row index out of range: {} (height {})",
            y,
            self.height
        );
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of every completed row, ascending
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..self.height)
            .filter(|&y| self.is_row_completed(y))
            .map(|y| y as usize)
            .collect()
    }

    /// Remove all completed rows and return how many were removed.
    ///
    /// Every row above a removed row shifts down by one per removed row below
    /// it, and empty rows fill in from the top. Kept rows keep their relative
    /// order. Uses a two-pointer pass from the bottom with no allocation.
    pub fn remove_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut removed = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_completed(read_y as i32) {
                removed += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Fill the vacated rows at the top
        self.cells[..write_y * width].fill(None);

        removed
    }

    /// Fixed spawn coordinate for new pieces
    pub fn spawn_point(&self) -> Point {
        Point::new(self.width / 2, 0)
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole row with `color` (test setup helper)
    pub fn fill_row(&mut self, y: i32, color: TetColor) {
        for x in 0..self.width {
            self.set(x, y, Some(color));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

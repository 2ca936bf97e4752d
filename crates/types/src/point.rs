//! Integer grid coordinates.
//!
//! `x` grows to the right and `y` grows downward (screen convention), so row 0
//! is the top of the board.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The pivot every shape offset is measured from.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`.
    ///
    /// ```
    /// use tetris_grid_types::Point;
    ///
    /// assert_eq!(Point::new(1, 2).translated(3, -1), Point::new(4, 1));
    /// ```
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Return this point with its components exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    pub const fn scaled_x(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y,
        }
    }

    pub const fn scaled_y(self, factor: i32) -> Self {
        Self {
            x: self.x,
            y: self.y * factor,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.translated(rhs.x, rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Formats as `[x,y]`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

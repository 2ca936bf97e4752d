//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the engine, the terminal front end, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 19 rows (indexed 0-18, row 0 at the top)
//! - **Spawn point**: `(width / 2, 0)`
//!
//! Both dimensions are defaults; the engine accepts other sizes through its
//! configuration.
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Single | 100 |
//! | Double | 300 |
//! | Triple | 500 |
//! | Four rows | 800 |
//! | Soft drop | 1 per cell |
//! | Hard drop | 2 per row |
//!
//! # Speed
//!
//! [`LEVEL_FALL_SECONDS`] gives, per level, how long a block takes to fall the
//! whole board. The engine divides it by the board height to get the seconds
//! per gravity tick. Level is `rows_cleared / 10 + 1`, capped at the table length.
//!
//! # Examples
//!
//! ```
//! use tetris_grid_types::{GameCommand, PieceKind, TetColor, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), TetColor::Purple);
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 19);
//! ```

pub mod point;

pub use point::Point;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (19 rows)
pub const BOARD_HEIGHT: i32 = 19;

/// Number of upcoming pieces shown by default
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Capacity of the upcoming-piece queue
pub const MAX_LOOKAHEAD: usize = 5;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points for clearing 0..=4 rows in one placement.
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per cell of a successful soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row of a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Rows that must be cleared to advance one level.
pub const ROWS_PER_LEVEL: u32 = 10;

/// Seconds for a block to fall the full board height, one entry per level.
///
/// Index 0 = level 1. Levels past the end of the table stay at the last entry.
pub const LEVEL_FALL_SECONDS: [f32; 30] = [
    15.974, 14.310, 12.646, 10.982, 9.318, 7.654, 5.990, 4.326, 2.662, 1.997, // 1-10
    1.664, 1.664, 1.664, 1.331, 1.331, 1.331, 0.998, 0.998, 0.998, // 11-19
    0.666, 0.666, 0.666, 0.666, 0.666, 0.666, 0.666, 0.666, 0.666, 0.666, // 20-29
    0.333, // 30
];

/// The seven piece kinds.
///
/// Declaration order is the catalog order used by the bag randomizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    L,
    J,
    O,
    I,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
    ];

    /// Number of distinct kinds (one bag).
    pub const COUNT: usize = 7;

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The fixed color blocks of this kind are drawn and locked with.
    pub fn color(self) -> TetColor {
        match self {
            PieceKind::S => TetColor::Red,
            PieceKind::Z => TetColor::Green,
            PieceKind::L => TetColor::Orange,
            PieceKind::J => TetColor::DarkBlue,
            PieceKind::O => TetColor::Yellow,
            PieceKind::I => TetColor::LightBlue,
            PieceKind::T => TetColor::Purple,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_grid_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
        }
    }
}

/// Block colors. One per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetColor {
    Red,
    Orange,
    Yellow,
    Green,
    LightBlue,
    DarkBlue,
    Purple,
}

impl TetColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TetColor::Red => "red",
            TetColor::Orange => "orange",
            TetColor::Yellow => "yellow",
            TetColor::Green => "green",
            TetColor::LightBlue => "lightBlue",
            TetColor::DarkBlue => "darkBlue",
            TetColor::Purple => "purple",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(TetColor)`: Cell holding a locked block of that color
pub type Cell = Option<TetColor>;

/// Discrete player commands, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks it if it cannot move
    SoftDrop,
    /// Rotate piece 90°
    Rotate,
    /// Drop piece to its lowest legal position and lock it
    HardDrop,
    /// Bank the current piece (once per placement)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameCommand {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use tetris_grid_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("ROTATE"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("rotateCcw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "harddrop" => Some(GameCommand::HardDrop),
            "hold" => Some(GameCommand::Hold),
            "pause" => Some(GameCommand::Pause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Hold => "hold",
            GameCommand::Pause => "pause",
            GameCommand::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_color() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let color = kind.color();
            assert!(!seen.contains(&color), "{:?} reuses {:?}", kind, color);
            seen.push(color);
        }
        assert_eq!(seen.len(), PieceKind::COUNT);
    }

    #[test]
    fn index_matches_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            GameCommand::MoveLeft,
            GameCommand::MoveRight,
            GameCommand::SoftDrop,
            GameCommand::Rotate,
            GameCommand::HardDrop,
            GameCommand::Hold,
            GameCommand::Pause,
            GameCommand::Restart,
        ] {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn level_table_never_speeds_down() {
        for pair in LEVEL_FALL_SECONDS.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(LINE_CLEAR_POINTS[4], 800);
    }
}

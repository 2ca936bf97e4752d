//! Engine configuration.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_LOOKAHEAD, MAX_LOOKAHEAD};

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIDE: i32 = 64;

/// Board size, preview length, and RNG seed for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Number of upcoming pieces kept in the queue (1..=MAX_LOOKAHEAD)
    pub lookahead: usize,
    pub seed: u32,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Whether every field is inside the range the engine accepts
    pub fn is_valid(&self) -> bool {
        // Narrower than 4 columns cannot fit an I piece at spawn.
        (4..=MAX_BOARD_SIDE).contains(&self.width)
            && (2..=MAX_BOARD_SIDE).contains(&self.height)
            && (1..=MAX_LOOKAHEAD).contains(&self.lookahead)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            lookahead: DEFAULT_LOOKAHEAD,
            seed: 1,
        }
    }
}

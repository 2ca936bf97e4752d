//! Scoring module - points, level, and gravity speed
//!
//! Speed follows a single per-level policy: level is derived from the total
//! rows cleared, and each level has a fixed full-board fall time from
//! [`LEVEL_FALL_SECONDS`]. The seconds per gravity tick is that fall time
//! divided by the board height.

use crate::types::{
    HARD_DROP_POINTS, LEVEL_FALL_SECONDS, LINE_CLEAR_POINTS, ROWS_PER_LEVEL, SOFT_DROP_POINTS,
};

/// Highest reachable level
pub const MAX_LEVEL: u32 = LEVEL_FALL_SECONDS.len() as u32;

/// Points for clearing `rows` rows in one placement.
///
/// More than four rows can only come from a hand-built board; it scores the
/// same as four.
pub fn line_clear_points(rows: usize) -> u32 {
    LINE_CLEAR_POINTS[rows.min(LINE_CLEAR_POINTS.len() - 1)]
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per row
pub fn drop_points(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Level for a total number of cleared rows (1-based, capped at [`MAX_LEVEL`])
pub fn level_for_rows(total_rows: u32) -> u32 {
    (total_rows / ROWS_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Seconds per gravity tick at `level` on a board `board_height` rows tall
pub fn seconds_per_tick(level: u32, board_height: i32) -> f32 {
    let idx = (level.clamp(1, MAX_LEVEL) - 1) as usize;
    LEVEL_FALL_SECONDS[idx] / board_height.max(1) as f32
}

//! Discrete game events for presentation and audio layers.
//!
//! The engine records events as they happen; the loop owner drains them with
//! [`GameState::take_events`](crate::GameState::take_events).

/// Something the player should see or hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The active piece turned.
    Rotated,
    /// A hard drop moved the piece `rows` rows before locking.
    HardDropped { rows: u32 },
    /// A locked piece was processed: rows removed and points awarded for them.
    Placed { rows_cleared: u32, points: u32 },
    /// Level increased.
    LevelUp { level: u32 },
    /// The next piece could not spawn. Carries the final counters of the
    /// finished game; a fresh game has already started.
    GameOver { score: u32, level: u32, lines: u32 },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Rotated => "rotated",
            GameEvent::HardDropped { .. } => "hardDropped",
            GameEvent::Placed { .. } => "placed",
            GameEvent::LevelUp { .. } => "levelUp",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}

use arrayvec::ArrayVec;

use crate::queue::QueuedPiece;
use crate::tetromino::GridTetromino;
use crate::types::{Cell, PieceKind, Point, TetColor, BOARD_HEIGHT, BOARD_WIDTH, MAX_LOOKAHEAD};

/// Engine phase as seen by a presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// A piece is under player control.
    #[default]
    Falling,
    /// A piece just locked; the next loop pass spawns, clears and scores.
    Locked,
    Paused,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Falling => "falling",
            GamePhase::Locked => "locked",
            GamePhase::Paused => "paused",
        }
    }
}

/// Grid-space blocks of one piece plus its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: TetColor,
    pub blocks: [Point; 4],
}

impl From<GridTetromino> for PieceView {
    fn from(value: GridTetromino) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            blocks: value.mapped_blocks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major board cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<PieceView>,
    pub ghost: Option<PieceView>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub next: ArrayVec<QueuedPiece, MAX_LOOKAHEAD>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: GamePhase,
    /// Increments every time a new game starts
    pub game_number: u32,
    /// Events lost so far because the engine's buffer was full
    pub dropped_events: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board.iter_mut().for_each(|c| *c = None);
        self.active = None;
        self.ghost = None;
        self.hold = None;
        self.can_hold = true;
        self.next.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.phase = GamePhase::Falling;
        self.game_number = 0;
        self.dropped_events = 0;
    }

    /// Cell at (x, y); `None` outside the board as well as for empty cells
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; (BOARD_WIDTH * BOARD_HEIGHT) as usize],
            active: None,
            ghost: None,
            hold: None,
            can_hold: true,
            next: ArrayVec::new(),
            score: 0,
            level: 1,
            lines: 0,
            phase: GamePhase::Falling,
            game_number: 0,
            dropped_events: 0,
        }
    }
}

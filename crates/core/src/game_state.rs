//! Game state module - the engine state machine
//!
//! A piece is `Falling` while the player controls it. Locking writes its
//! blocks into the board and moves the engine to `Locked`; nothing else
//! happens until the next [`GameState::process_loop`] pass, which spawns the
//! next piece, removes completed rows, and scores. A spawn that is illegal ends
//! the game, and a fresh game starts immediately.
//!
//! Gravity is driven only by [`GameState::tick`], which `process_loop` calls
//! whenever enough time has accumulated for the current level.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::queue::{HoldOutcome, PieceQueue, QueuedPiece};
use crate::scoring::{drop_points, level_for_rows, line_clear_points, seconds_per_tick};
use crate::snapshot::{GamePhase, GameSnapshot, PieceView};
use crate::tetromino::GridTetromino;
use crate::types::{GameCommand, PieceKind, Point};

/// Events kept between drains; later ones are dropped when full
pub const EVENT_CAPACITY: usize = 32;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: GridTetromino,
    queue: PieceQueue,
    score: u32,
    level: u32,
    lines: u32,
    secs_since_tick: f32,
    tick_interval: f32,
    /// Set by `lock`, consumed by the next `process_loop` pass.
    placement_pending: bool,
    paused: bool,
    game_number: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
    /// Events that arrived while `events` was full, over all games
    dropped_events: u32,
}

impl GameState {
    /// Create a new game on the default board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::with_seed(seed))
    }

    /// Create a new game.
    ///
    /// Panics if `config` is outside the accepted ranges (see
    /// [`GameConfig::is_valid`]).
    pub fn with_config(config: GameConfig) -> Self {
        assert!(config.is_valid(), "invalid game config: {:?}", config);

        let board = Board::with_size(config.width, config.height);
        let queue = PieceQueue::new(config.lookahead, config.seed);
        let active = GridTetromino::new(queue.head(), board.spawn_point());

        let mut state = Self {
            config,
            board,
            active,
            queue,
            score: 0,
            level: 1,
            lines: 0,
            secs_since_tick: 0.0,
            tick_interval: 0.0,
            placement_pending: false,
            paused: false,
            game_number: 0,
            events: ArrayVec::new(),
            dropped_events: 0,
        };
        state.start_game();
        state
    }

    /// Rebuild board, queue, hold and counters, then spawn the first piece
    fn start_game(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.tick_interval = seconds_per_tick(self.level, self.board.height());
        self.secs_since_tick = 0.0;
        self.placement_pending = false;
        self.paused = false;
        self.game_number = self.game_number.wrapping_add(1);

        // An empty board always admits a spawn.
        self.active = GridTetromino::new(self.queue.head(), self.board.spawn_point());
        self.queue.advance();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (tests, demos)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> GridTetromino {
        self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn upcoming(&self) -> &[QueuedPiece] {
        self.queue.upcoming()
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.queue.held()
    }

    pub fn can_hold(&self) -> bool {
        self.queue.can_hold()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn placement_pending(&self) -> bool {
        self.placement_pending
    }

    /// Seconds between gravity ticks at the current level
    pub fn tick_interval(&self) -> f32 {
        self.tick_interval
    }

    /// 1 for the first game, incremented by every restart or game over
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused {
            GamePhase::Paused
        } else if self.placement_pending {
            GamePhase::Locked
        } else {
            GamePhase::Falling
        }
    }

    /// Whether every block of `piece` is inside the side and bottom walls.
    ///
    /// Blocks above row 0 are allowed.
    pub fn within_borders(&self, piece: &GridTetromino) -> bool {
        let width = self.board.width();
        let height = self.board.height();
        piece
            .mapped_blocks()
            .iter()
            .all(|p| p.x >= 0 && p.x < width && p.y < height)
    }

    pub fn is_legal(&self, piece: &GridTetromino) -> bool {
        self.board.all_empty(&piece.mapped_blocks()) && self.within_borders(piece)
    }

    /// Move the active piece by (dx, dy) if the result is legal
    pub fn attempt_move(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.active.moved(dx, dy);
        if self.is_legal(&candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Rotate the active piece clockwise if the result is legal
    pub fn attempt_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if self.is_legal(&candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Drop the active piece as far as it goes, then lock it.
    ///
    /// Returns the number of rows dropped; each one scores hard-drop points.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.attempt_move(0, 1) {
            rows += 1;
        }
        self.score += drop_points(rows, true);
        self.record(GameEvent::HardDropped { rows });
        self.lock();
        rows
    }

    /// Write the active piece into the board and flag the placement.
    ///
    /// Queue advance, row removal and scoring wait for the next loop pass.
    /// Blocks still above the board are discarded.
    pub fn lock(&mut self) {
        if self.placement_pending {
            return;
        }
        let color = Some(self.active.color());
        self.board.set_points(&self.active.mapped_blocks(), color);
        self.placement_pending = true;
    }

    /// One gravity step: move down, or lock in place if that is illegal.
    ///
    /// Returns true if the piece moved.
    pub fn tick(&mut self) -> bool {
        if self.placement_pending {
            return false;
        }
        if self.attempt_move(0, 1) {
            true
        } else {
            self.lock();
            false
        }
    }

    /// Advance the game by `delta_secs` of wall-clock time.
    ///
    /// Runs a gravity tick once the accumulated time exceeds the current
    /// interval, then processes any pending placement.
    pub fn process_loop(&mut self, delta_secs: f32) {
        if self.paused {
            return;
        }

        self.secs_since_tick += delta_secs.max(0.0);
        if self.secs_since_tick > self.tick_interval {
            self.tick();
            self.secs_since_tick = 0.0;
        }

        if self.placement_pending {
            self.finish_placement();
        }
    }

    fn finish_placement(&mut self) {
        self.placement_pending = false;
        self.queue.release_hold();

        let next = GridTetromino::new(self.queue.head(), self.board.spawn_point());
        if !self.is_legal(&next) {
            self.end_game();
            return;
        }
        self.active = next;
        self.queue.advance();

        let rows = self.board.remove_completed_rows();
        // Rows shifting down can land on the piece that just spawned.
        if rows > 0 && !self.is_legal(&self.active) {
            self.end_game();
            return;
        }

        let points = line_clear_points(rows);
        self.score += points;
        self.lines += rows as u32;
        self.record(GameEvent::Placed {
            rows_cleared: rows as u32,
            points,
        });
        self.update_level();
    }

    fn update_level(&mut self) {
        let level = level_for_rows(self.lines);
        if level > self.level {
            self.level = level;
            self.record(GameEvent::LevelUp { level });
        }
        self.tick_interval = seconds_per_tick(self.level, self.board.height());
    }

    fn end_game(&mut self) {
        self.record(GameEvent::GameOver {
            score: self.score,
            level: self.level,
            lines: self.lines,
        });
        self.start_game();
    }

    /// Bank the active piece in the hold slot.
    ///
    /// The replacement (the previously held kind, or the queue head when the
    /// slot was empty) appears at the spawn point. Returns false without
    /// changing anything when hold was already used for this placement or the
    /// replacement would not fit.
    pub fn hold(&mut self) -> bool {
        if !self.queue.can_hold() {
            return false;
        }

        let replacement = self.queue.held().unwrap_or_else(|| self.queue.head());
        let candidate = GridTetromino::new(replacement, self.board.spawn_point());
        if !self.is_legal(&candidate) {
            return false;
        }

        match self.queue.hold(self.active.kind()) {
            HoldOutcome::Unavailable => return false,
            HoldOutcome::Stored => {
                self.queue.advance();
            }
            HoldOutcome::Swapped(_) => {}
        }
        self.active = candidate;
        true
    }

    /// Apply one player command.
    ///
    /// Pause and Restart always act. Everything else is ignored while paused
    /// or while a placement is waiting for the loop. Returns whether the
    /// command changed anything.
    pub fn on_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Pause => {
                self.paused = !self.paused;
                true
            }
            GameCommand::Restart => {
                self.start_game();
                true
            }
            _ if self.paused || self.placement_pending => false,
            GameCommand::MoveLeft => self.shift(-1),
            GameCommand::MoveRight => self.shift(1),
            GameCommand::Rotate => {
                if self.attempt_rotate() {
                    self.secs_since_tick = 0.0;
                    self.record(GameEvent::Rotated);
                    true
                } else {
                    false
                }
            }
            GameCommand::SoftDrop => {
                if self.attempt_move(0, 1) {
                    self.score += drop_points(1, false);
                    true
                } else {
                    self.lock();
                    false
                }
            }
            GameCommand::HardDrop => {
                self.hard_drop();
                true
            }
            GameCommand::Hold => self.hold(),
        }
    }

    fn shift(&mut self, dx: i32) -> bool {
        let moved = self.attempt_move(dx, 0);
        if moved {
            self.secs_since_tick = 0.0;
        }
        moved
    }

    /// The active piece dropped as far as it legally goes, never locked
    pub fn ghost(&self) -> GridTetromino {
        let mut ghost = self.active;
        loop {
            let next = ghost.moved(0, 1);
            if !self.is_legal(&next) {
                return ghost;
            }
            ghost = next;
        }
    }

    /// Drain recorded events, oldest first
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Events discarded because nobody drained the buffer in time
    pub fn dropped_events(&self) -> u32 {
        self.dropped_events
    }

    fn record(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            self.dropped_events = self.dropped_events.saturating_add(1);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        // A locked piece is already part of the board.
        if self.placement_pending {
            out.active = None;
            out.ghost = None;
        } else {
            out.active = Some(PieceView::from(self.active));
            out.ghost = Some(PieceView::from(self.ghost()));
        }

        out.hold = self.queue.held();
        out.can_hold = self.queue.can_hold();
        out.next.clear();
        out.next.extend(self.queue.upcoming().iter().copied());
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase();
        out.game_number = self.game_number;
        out.dropped_events = self.dropped_events;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn location of the board in use
    pub fn spawn_point(&self) -> Point {
        self.board.spawn_point()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TetColor, BOARD_HEIGHT, BOARD_WIDTH, LINE_CLEAR_POINTS};

    fn place(state: &mut GameState, kind: PieceKind, x: i32, y: i32) {
        state.active = GridTetromino::new(kind, Point::new(x, y));
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.game_number(), 1);
        assert_eq!(state.phase(), GamePhase::Falling);
        assert!(state.held().is_none());
        assert_eq!(state.upcoming().len(), 3);
        assert_eq!(state.active().grid_loc(), Point::new(BOARD_WIDTH / 2, 0));
        assert!(state.is_legal(&state.active()));
    }

    #[test]
    fn test_custom_config() {
        let state = GameState::with_config(GameConfig {
            width: 6,
            height: 12,
            lookahead: 1,
            seed: 3,
        });
        assert_eq!(state.board().width(), 6);
        assert_eq!(state.spawn_point(), Point::new(3, 0));
        assert_eq!(state.upcoming().len(), 1);
        assert!((state.tick_interval() - 15.974 / 12.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "invalid game config")]
    fn test_invalid_config_panics() {
        GameState::with_config(GameConfig {
            lookahead: 9,
            ..GameConfig::default()
        });
    }

    #[test]
    fn test_within_borders() {
        let state = GameState::new(1);
        let at = |x, y| GridTetromino::new(PieceKind::I, Point::new(x, y));

        // I spans x-2..=x+1
        assert!(!state.within_borders(&at(1, 5)));
        assert!(state.within_borders(&at(2, 5)));
        assert!(state.within_borders(&at(8, 5)));
        assert!(!state.within_borders(&at(9, 5)));
        assert!(!state.within_borders(&at(5, BOARD_HEIGHT)));
        assert!(state.within_borders(&at(5, BOARD_HEIGHT - 1)));
        assert!(state.within_borders(&at(5, -40)));
    }

    #[test]
    fn test_is_legal_checks_occupancy() {
        let mut state = GameState::new(1);
        let piece = GridTetromino::new(PieceKind::O, Point::new(4, 10));
        assert!(state.is_legal(&piece));

        state.board.set(4, 11, Some(TetColor::Red));
        assert!(!state.is_legal(&piece));
        assert!(state.within_borders(&piece));
    }

    #[test]
    fn test_attempt_move() {
        let mut state = GameState::new(12345);
        let start = state.active().grid_loc();

        assert!(state.attempt_move(1, 0));
        assert_eq!(state.active().grid_loc(), start.translated(1, 0));
        assert!(state.attempt_move(-1, 0));
        assert_eq!(state.active().grid_loc(), start);

        // Above the board is open.
        assert!(state.attempt_move(0, -3));
    }

    #[test]
    fn test_rejected_move_leaves_piece_untouched() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 4, 5);
        // O covers x 3..=4, y 5..=6
        state.board.set(5, 6, Some(TetColor::Green));

        let before = state.active();
        assert!(!state.attempt_move(1, 0));
        assert_eq!(state.active(), before);

        assert!(state.attempt_move(-1, 0));
    }

    #[test]
    fn test_attempt_rotate() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::T, 5, 5);
        let before = *state.active().offsets();

        assert!(state.attempt_rotate());
        assert_ne!(*state.active().offsets(), before);
    }

    #[test]
    fn test_rotate_blocked_by_floor() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::I, 5, BOARD_HEIGHT - 1);
        let before = state.active();

        // Vertical I would reach two rows below the floor.
        assert!(!state.attempt_rotate());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_hard_drop() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::T, 5, 0);

        let rows = state.hard_drop();
        assert_eq!(rows, (BOARD_HEIGHT - 1) as u32);
        assert_eq!(state.score(), rows * 2);
        assert!(state.placement_pending());
        assert_eq!(state.phase(), GamePhase::Locked);

        let bottom = BOARD_HEIGHT - 1;
        assert_eq!(state.board().get(4, bottom), Some(TetColor::Purple));
        assert_eq!(state.board().get(5, bottom), Some(TetColor::Purple));
        assert_eq!(state.board().get(6, bottom), Some(TetColor::Purple));
        assert_eq!(state.board().get(5, bottom - 1), Some(TetColor::Purple));
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_hard_drop_events_then_placement() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::T, 5, 0);
        state.hard_drop();
        state.process_loop(0.0);

        let events = state.take_events();
        assert_eq!(
            events.as_slice(),
            &[
                GameEvent::HardDropped { rows: 18 },
                GameEvent::Placed {
                    rows_cleared: 0,
                    points: 0
                },
            ]
        );
        assert!(state.take_events().is_empty());
        assert_eq!(state.phase(), GamePhase::Falling);
    }

    #[test]
    fn test_tick_moves_then_locks() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 5, 0);

        let mut moves = 0;
        while state.tick() {
            moves += 1;
        }
        // O occupies rows y..=y+1
        assert_eq!(moves, BOARD_HEIGHT - 2);
        assert!(state.placement_pending());

        // Further ticks do nothing until the placement is processed.
        assert!(!state.tick());
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_process_loop_waits_for_interval() {
        let mut state = GameState::new(1);
        let y = state.active().grid_loc().y;
        let half = state.tick_interval() * 0.6;

        state.process_loop(half);
        assert_eq!(state.active().grid_loc().y, y);

        state.process_loop(half);
        assert_eq!(state.active().grid_loc().y, y + 1);

        // Accumulator was reset.
        state.process_loop(half);
        assert_eq!(state.active().grid_loc().y, y + 1);
    }

    #[test]
    fn test_spawn_takes_queue_head() {
        let mut state = GameState::new(99);
        let head = state.upcoming()[0].kind;

        state.hard_drop();
        state.process_loop(0.0);

        assert_eq!(state.active().kind(), head);
        assert_eq!(state.active().grid_loc(), state.spawn_point());
        assert_eq!(state.upcoming().len(), 3);
    }

    #[test]
    fn test_move_resets_tick_accumulator() {
        let mut state = GameState::new(1);
        let y = state.active().grid_loc().y;
        let part = state.tick_interval() * 0.6;

        state.process_loop(part);
        assert!(state.on_command(GameCommand::MoveLeft));
        state.process_loop(part);
        assert_eq!(state.active().grid_loc().y, y);
    }

    #[test]
    fn test_soft_drop_scores_and_locks() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 5, BOARD_HEIGHT - 3);

        assert!(state.on_command(GameCommand::SoftDrop));
        assert_eq!(state.score(), 1);

        assert!(!state.on_command(GameCommand::SoftDrop));
        assert_eq!(state.score(), 1);
        assert!(state.placement_pending());
    }

    #[test]
    fn test_commands_ignored_while_placement_pending() {
        let mut state = GameState::new(1);
        state.hard_drop();
        let score = state.score();

        assert!(!state.on_command(GameCommand::MoveLeft));
        assert!(!state.on_command(GameCommand::HardDrop));
        assert!(!state.on_command(GameCommand::Hold));
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_rotate_command_records_event() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::T, 5, 5);
        assert!(state.on_command(GameCommand::Rotate));
        assert_eq!(state.take_events().as_slice(), &[GameEvent::Rotated]);
    }

    #[test]
    fn test_pause_stops_game() {
        let mut state = GameState::new(1);
        let before = state.active();

        assert!(state.on_command(GameCommand::Pause));
        assert_eq!(state.phase(), GamePhase::Paused);

        state.process_loop(100.0);
        assert!(!state.on_command(GameCommand::MoveRight));
        assert_eq!(state.active(), before);

        assert!(state.on_command(GameCommand::Pause));
        assert!(state.on_command(GameCommand::MoveRight));
    }

    #[test]
    fn test_restart() {
        let mut state = GameState::new(1);
        state.hard_drop();
        state.process_loop(0.0);
        assert!(state.score() > 0);

        assert!(state.on_command(GameCommand::Restart));
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.game_number(), 2);
        assert!(!state.placement_pending());
    }

    #[test]
    fn test_hold_stores_then_swaps() {
        let mut state = GameState::new(12345);
        let first = state.active().kind();
        let head = state.upcoming()[0].kind;

        assert!(state.hold());
        assert_eq!(state.held(), Some(first));
        assert_eq!(state.active().kind(), head);
        assert_eq!(state.upcoming().len(), 3);
        assert!(!state.can_hold());

        // Second hold in the same round is a no-op.
        let current = state.active();
        assert!(!state.hold());
        assert_eq!(state.active(), current);
        assert_eq!(state.held(), Some(first));

        state.hard_drop();
        state.process_loop(0.0);
        assert!(state.can_hold());

        let second = state.active().kind();
        assert!(state.hold());
        assert_eq!(state.active().kind(), first);
        assert_eq!(state.active().grid_loc(), state.spawn_point());
        assert_eq!(state.held(), Some(second));
    }

    #[test]
    fn test_hold_rejected_when_spawn_blocked() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 5, 10);
        state.board.fill_row(0, TetColor::Red);
        state.board.fill_row(1, TetColor::Red);
        let before = state.active();

        assert!(!state.hold());
        assert_eq!(state.active(), before);
        assert!(state.held().is_none());
        assert!(state.can_hold());
    }

    #[test]
    fn test_game_over_resets() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 5, 10);
        state.score = 500;
        state.lock();
        state.board.fill_row(0, TetColor::Red);
        state.board.fill_row(1, TetColor::Red);

        state.process_loop(0.0);

        assert_eq!(
            state.take_events().as_slice(),
            &[GameEvent::GameOver {
                score: 500,
                level: 1,
                lines: 0
            }]
        );
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.game_number(), 2);
        assert_eq!(state.phase(), GamePhase::Falling);
    }

    #[test]
    fn test_rows_shifting_onto_spawned_piece_ends_game() {
        let mut state = GameState::new(1);
        // Only S and Z have a block under an empty spawn-row cell.
        while !matches!(state.queue.head(), PieceKind::S | PieceKind::Z) {
            state.queue.advance();
        }
        let marker_x = match state.queue.head() {
            PieceKind::S => 6,
            _ => 4,
        };

        place(&mut state, PieceKind::O, 5, 10);
        state.lock();
        state.board.fill_row(BOARD_HEIGHT - 1, TetColor::Red);
        state.board.set(marker_x, 0, Some(TetColor::Green));

        let spawn = GridTetromino::new(state.queue.head(), state.spawn_point());
        assert!(state.is_legal(&spawn));
        assert!(spawn.mapped_blocks().contains(&Point::new(marker_x, 1)));

        state.process_loop(0.0);

        assert_eq!(
            state.take_events().as_slice(),
            &[GameEvent::GameOver {
                score: 0,
                level: 1,
                lines: 0
            }]
        );
        assert_eq!(state.game_number(), 2);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_full_event_buffer_counts_drops() {
        let mut state = GameState::new(1);
        for _ in 0..EVENT_CAPACITY + 8 {
            state.record(GameEvent::Rotated);
        }

        assert_eq!(state.dropped_events(), 8);
        assert_eq!(state.snapshot().dropped_events, 8);
        assert_eq!(state.take_events().len(), EVENT_CAPACITY);

        state.record(GameEvent::Rotated);
        assert_eq!(state.take_events().len(), 1);
        assert_eq!(state.dropped_events(), 8);
    }

    #[test]
    fn test_line_clear_scoring() {
        for rows in 1..=4 {
            let mut state = GameState::new(7);
            for y in BOARD_HEIGHT - rows..BOARD_HEIGHT {
                state.board.fill_row(y, TetColor::DarkBlue);
            }

            while state.tick() {}
            assert!(state.placement_pending());
            state.process_loop(0.0);

            assert_eq!(state.score(), LINE_CLEAR_POINTS[rows as usize]);
            assert_eq!(state.lines(), rows as u32);
            // Only the locked piece remains.
            assert_eq!(state.board().filled_count(), 4);
        }
    }

    #[test]
    fn test_level_up() {
        let mut state = GameState::new(7);
        state.lines = 9;
        let slow = state.tick_interval();
        state.board.fill_row(BOARD_HEIGHT - 1, TetColor::Yellow);

        state.hard_drop();
        state.process_loop(0.0);

        assert_eq!(state.level(), 2);
        assert!(state.tick_interval() < slow);
        assert!(state
            .take_events()
            .contains(&GameEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_ghost() {
        let mut state = GameState::new(1);
        place(&mut state, PieceKind::O, 5, 0);

        let ghost = state.ghost();
        assert_eq!(ghost.kind(), PieceKind::O);
        assert_eq!(ghost.grid_loc(), Point::new(5, BOARD_HEIGHT - 2));
        assert_eq!(state.active().grid_loc(), Point::new(5, 0));
        assert!(!state.placement_pending());
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameState::new(1);
        let snap = state.snapshot();

        assert_eq!(snap.board.len(), (BOARD_WIDTH * BOARD_HEIGHT) as usize);
        assert_eq!(snap.active.map(|a| a.kind), Some(state.active().kind()));
        assert!(snap.ghost.is_some());
        assert_eq!(snap.next.len(), 3);
        assert_eq!(snap.phase, GamePhase::Falling);

        state.hard_drop();
        let mut snap2 = snap.clone();
        state.snapshot_into(&mut snap2);
        assert!(snap2.active.is_none());
        assert_eq!(snap2.phase, GamePhase::Locked);
        assert_eq!(snap2.score, state.score());
    }
}

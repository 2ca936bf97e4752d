//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all engine state. It has no
//! dependencies on terminals, files, or clocks: time arrives as a plain
//! `f32` delta and input as [`GameCommand`](types::GameCommand) values.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of colored cells with row removal
//! - [`pieces`]: the seven shape templates, colors, and rotation
//! - [`tetromino`]: a shape placed on the grid ([`GridTetromino`])
//! - [`rng`]: seeded LCG and the bag randomizer
//! - [`queue`]: upcoming-piece lookahead and the hold slot
//! - [`scoring`]: points, level, and gravity speed
//! - [`game_state`]: the engine ([`GameState`])
//! - [`snapshot`]: read-only view for presenters
//! - [`events`]: discrete events for sound and effects
//!
//! # Game Rules
//!
//! - **Bag randomizer**: every run of seven draws contains each kind once
//! - **Rotation**: clockwise quarter turn about the pivot, no wall kicks; O never turns
//! - **Locking**: a piece locks when gravity or a soft drop cannot move it down
//! - **Hold**: one slot, usable once per placement
//! - **Game over**: the next piece cannot spawn; a new game starts at once
//!
//! # Example
//!
//! ```
//! use tetris_grid_core::GameState;
//! use tetris_grid_types::GameCommand;
//!
//! let mut game = GameState::new(12345);
//!
//! game.on_command(GameCommand::MoveRight);
//! game.on_command(GameCommand::Rotate);
//! game.on_command(GameCommand::HardDrop);
//!
//! // Hard drop awards points; the next loop pass spawns a new piece.
//! assert!(game.score() > 0);
//! game.process_loop(0.016);
//! assert!(!game.placement_pending());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::process_loop`] once per frame with the elapsed seconds.
//! Gravity ticks happen when the accumulated time exceeds the interval for the
//! current level ([`scoring::seconds_per_tick`]).

pub mod board;
pub mod config;
pub mod events;
pub mod game_state;
pub mod pieces;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use tetris_grid_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{GameConfig, MAX_BOARD_SIDE};
pub use events::GameEvent;
pub use game_state::GameState;
pub use pieces::{rotate_clockwise, PieceShape, PresentationOffset};
pub use queue::{HoldOutcome, PieceQueue, QueuedPiece};
pub use rng::{BagRandomizer, SimpleRng};
pub use scoring::{level_for_rows, line_clear_points, seconds_per_tick};
pub use snapshot::{GamePhase, GameSnapshot, PieceView};
pub use tetromino::GridTetromino;

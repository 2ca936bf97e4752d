//! Terminal input.
//!
//! Maps `crossterm` key events to [`GameCommand`](types::GameCommand) values,
//! one command per key press.

pub mod map;

pub use tetris_grid_types as types;

pub use map::{handle_key_event, should_quit};

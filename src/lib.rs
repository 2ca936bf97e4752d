//! Falling-block puzzle game (workspace facade crate).
//!
//! The rules engine, input mapping and terminal rendering live in dedicated
//! crates under `crates/` and are re-exported here as
//! `tetris_grid::{core, input, term, types}`. This package adds the pieces
//! only the binary needs: environment configuration and the event log.

pub mod config;
pub mod event_log;

pub use tetris_grid_core as core;
pub use tetris_grid_input as input;
pub use tetris_grid_term as term;
pub use tetris_grid_types as types;

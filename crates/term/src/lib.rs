//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`GameSnapshot`](core::GameSnapshot) into a [`FrameBuffer`] of styled
//! glyphs, and [`TerminalRenderer`] flushes frames to the terminal through
//! crossterm, rewriting only what changed.
//!
//! Board cells are drawn two columns wide to compensate for the usual
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_grid_core as core;
pub use tetris_grid_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

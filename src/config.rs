//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TETRIS_GRID_SEED` | RNG seed | derived from the clock |
//! | `TETRIS_GRID_WIDTH` | board columns (4-64) | 10 |
//! | `TETRIS_GRID_HEIGHT` | board rows (2-64) | 19 |
//! | `TETRIS_GRID_LOOKAHEAD` | upcoming pieces shown (1-5) | 3 |
//! | `TETRIS_GRID_EVENT_LOG` | JSON-lines event log path | off |
//! | `TETRIS_GRID_FRAME_MS` | frame interval | 16 |
//!
//! Values that do not parse fall back to their defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub event_log_path: Option<String>,
    pub frame_ms: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            event_log_path: None,
            frame_ms: FRAME_MS,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup (the environment, or a map in tests)
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
            raw.and_then(|s| s.trim().parse().ok())
        }

        let defaults = GameConfig::default();
        let seed = parsed(get("TETRIS_GRID_SEED")).unwrap_or_else(clock_seed);
        let mut game = GameConfig {
            width: parsed(get("TETRIS_GRID_WIDTH")).unwrap_or(defaults.width),
            height: parsed(get("TETRIS_GRID_HEIGHT")).unwrap_or(defaults.height),
            lookahead: parsed(get("TETRIS_GRID_LOOKAHEAD")).unwrap_or(defaults.lookahead),
            seed,
        };
        if !game.is_valid() {
            eprintln!(
                "[Tetris] ignoring out-of-range board settings {}x{} lookahead {}",
                game.width, game.height, game.lookahead
            );
            game = GameConfig::with_seed(seed);
        }

        let event_log_path = get("TETRIS_GRID_EVENT_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let frame_ms = parsed(get("TETRIS_GRID_FRAME_MS"))
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(FRAME_MS);

        Self {
            game,
            event_log_path,
            frame_ms,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::term::{GameView, Viewport};
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = RuntimeConfig::from_env();
    }

    #[test]
    fn test_reads_all_variables() {
        let cfg = config_from(&[
            ("TETRIS_GRID_SEED", "42"),
            ("TETRIS_GRID_WIDTH", "12"),
            ("TETRIS_GRID_HEIGHT", "22"),
            ("TETRIS_GRID_LOOKAHEAD", "5"),
            ("TETRIS_GRID_EVENT_LOG", " /tmp/events.jsonl "),
            ("TETRIS_GRID_FRAME_MS", "20"),
        ]);
        assert_eq!(
            cfg.game,
            GameConfig {
                width: 12,
                height: 22,
                lookahead: 5,
                seed: 42
            }
        );
        assert_eq!(cfg.event_log_path.as_deref(), Some("/tmp/events.jsonl"));
        assert_eq!(cfg.frame_ms, 20);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = config_from(&[
            ("TETRIS_GRID_SEED", "7"),
            ("TETRIS_GRID_WIDTH", "wide"),
            ("TETRIS_GRID_EVENT_LOG", "   "),
            ("TETRIS_GRID_FRAME_MS", "0"),
        ]);
        assert_eq!(cfg.game, GameConfig::with_seed(7));
        assert!(cfg.event_log_path.is_none());
        assert_eq!(cfg.frame_ms, FRAME_MS);
    }

    #[test]
    fn test_out_of_range_board_uses_defaults() {
        let cfg = config_from(&[("TETRIS_GRID_SEED", "7"), ("TETRIS_GRID_LOOKAHEAD", "9")]);
        assert_eq!(cfg.game, GameConfig::with_seed(7));
    }

    #[test]
    fn test_oversized_board_uses_defaults() {
        let cfg = config_from(&[("TETRIS_GRID_SEED", "7"), ("TETRIS_GRID_WIDTH", "40000")]);
        assert_eq!(cfg.game, GameConfig::with_seed(7));

        // The fallback config builds and renders.
        let game = GameState::with_config(cfg.game);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
    }
}

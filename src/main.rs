//! Terminal game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! Configuration comes from `TETRIS_GRID_*` environment variables (see
//! [`tetris_grid::config`]).

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tetris_grid::config::RuntimeConfig;
use tetris_grid::core::{GameSnapshot, GameState};
use tetris_grid::event_log::EventLog;
use tetris_grid::input::{handle_key_event, should_quit};
use tetris_grid::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

type FileLog = EventLog<BufWriter<File>>;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    let mut log = config
        .event_log_path
        .as_deref()
        .and_then(EventLog::open_or_warn);

    eprintln!(
        "[Tetris] seed {} board {}x{} lookahead {}",
        config.game.seed, config.game.width, config.game.height, config.game.lookahead
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut warnings = Vec::new();
    let result = run(&mut term, &config, &mut log, &mut warnings);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            warnings.push(format!("event log flush failed: {:#}", e));
        }
    }
    for w in &warnings {
        eprintln!("[Tetris] {}", w);
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &RuntimeConfig,
    log: &mut Option<FileLog>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    let mut game = GameState::with_config(config.game);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        if game.dropped_events() > 0 {
                            warnings.push(format!(
                                "{} game events dropped before logging",
                                game.dropped_events()
                            ));
                        }
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let game_number = game.game_number();
                        game.on_command(command);
                        drain_events(&mut game, game_number, log, warnings);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let game_number = game.game_number();
        game.process_loop(delta);
        drain_events(&mut game, game_number, log, warnings);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

/// Move recorded events into the log. `game_number` is the game they
/// happened in, read before the engine had a chance to restart.
fn drain_events(
    game: &mut GameState,
    game_number: u32,
    log: &mut Option<FileLog>,
    warnings: &mut Vec<String>,
) {
    let events = game.take_events();
    let failure = match log.as_mut() {
        Some(out) => events
            .iter()
            .find_map(|event| out.write_event(game_number, event).err()),
        None => return,
    };
    if let Some(e) = failure {
        // The screen is in raw mode; report after exit.
        warnings.push(format!("event log disabled: {:#}", e));
        *log = None;
    }
}

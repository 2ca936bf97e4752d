//! Optional JSON-lines log of game events.
//!
//! One JSON object per line:
//!
//! ```text
//! {"type":"placed","game":1,"ts":5120,"rowsCleared":2,"points":300}
//! ```
//!
//! `ts` is milliseconds since the log was opened.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameEvent;

/// Serialized form of one [`GameEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event: String,
    pub game: u32,
    pub ts: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_cleared: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
}

impl EventRecord {
    pub fn new(game: u32, ts: u64, event: &GameEvent) -> Self {
        let mut record = Self {
            event: event.as_str().to_string(),
            game,
            ts,
            rows: None,
            rows_cleared: None,
            points: None,
            score: None,
            level: None,
            lines: None,
        };
        match *event {
            GameEvent::Rotated => {}
            GameEvent::HardDropped { rows } => record.rows = Some(rows),
            GameEvent::Placed {
                rows_cleared,
                points,
            } => {
                record.rows_cleared = Some(rows_cleared);
                record.points = Some(points);
            }
            GameEvent::LevelUp { level } => record.level = Some(level),
            GameEvent::GameOver {
                score,
                level,
                lines,
            } => {
                record.score = Some(score);
                record.level = Some(level);
                record.lines = Some(lines);
            }
        }
        record
    }
}

pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
    opened: Instant,
}

impl EventLog<BufWriter<File>> {
    /// Open (or create) `path` for appending
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Like [`EventLog::open`], but a failure only prints a warning and
    /// disables logging.
    pub fn open_or_warn(path: &str) -> Option<Self> {
        match Self::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[Tetris] event log disabled: {:#}", e);
                None
            }
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
            opened: Instant::now(),
        }
    }

    /// Append one event as a JSON line
    pub fn write_event(&mut self, game: u32, event: &GameEvent) -> Result<()> {
        let ts = self.opened.elapsed().as_millis() as u64;
        let record = EventRecord::new(game, ts, event);

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

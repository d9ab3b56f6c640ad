//! Match transcript.
//!
//! The round driver reports everything presentation or analysis cares about
//! as [`FightEvent`]s to an [`EventSink`]. [`JsonLinesLog`] writes one JSON
//! object per line; [`MemoryLog`] keeps events in memory for tests and
//! embedding.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fight_core::{FighterId, HitEvent, Tick};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::round::RoundOutcome;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("log already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// One entry of the match transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FightEvent {
    RoundStarted {
        round: u32,
        fighters: [String; 2],
        health: [u32; 2],
    },
    Hit {
        round: u32,
        #[serde(flatten)]
        hit: HitEvent,
    },
    DecisionFailed {
        round: u32,
        tick: Tick,
        fighter: FighterId,
        reason: String,
    },
    RoundEnded {
        round: u32,
        tick: Tick,
        outcome: RoundOutcome,
        health: [u32; 2],
    },
    MatchEnded {
        winner: Option<FighterId>,
        wins: [u32; 2],
    },
}

/// Destination for fight events.
pub trait EventSink {
    fn record(&mut self, event: &FightEvent) -> Result<(), LogError>;

    fn flush(&mut self) -> Result<(), LogError> {
        Ok(())
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &FightEvent) -> Result<(), LogError> {
        Ok(())
    }
}

/// Keeps events in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    events: Vec<FightEvent>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FightEvent] {
        &self.events
    }

    pub fn hits(&self) -> impl Iterator<Item = &HitEvent> {
        self.events.iter().filter_map(|event| match event {
            FightEvent::Hit { hit, .. } => Some(hit),
            _ => None,
        })
    }
}

impl EventSink for MemoryLog {
    fn record(&mut self, event: &FightEvent) -> Result<(), LogError> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Append-only JSON-lines transcript.
pub struct JsonLinesLog<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesLog<BufWriter<File>> {
    /// Creates `dir/filename`, refusing to overwrite an existing transcript.
    pub fn create(dir: impl AsRef<Path>, filename: impl AsRef<str>) -> Result<Self, LogError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let path = dir.join(filename.as_ref());
        if path.exists() {
            return Err(LogError::AlreadyExists(path));
        }

        let file = OpenOptions::new().create_new(true).write(true).open(&path)?;
        tracing::debug!("Created transcript: {}", path.display());

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventSink for JsonLinesLog<W> {
    fn record(&mut self, event: &FightEvent) -> Result<(), LogError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads a JSON-lines transcript back, skipping blank lines.
pub fn read_transcript(path: &Path) -> Result<Vec<FightEvent>, LogError> {
    let reader = BufReader::new(File::open(path)?);
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(serde_json::from_str(&line)?);
    }
    Ok(events)
}

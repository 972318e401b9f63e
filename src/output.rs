// ABOUTME: Output formatting for snapshot commands.
// ABOUTME: Supports key=value text and a single JSON object.

use crate::error::Result;
use crate::snapshot::KeyValueSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Output mode for snapshot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One `key=value` line per entry
    Text,
    /// One JSON object for scripting
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Text }
    }
}

/// Writes snapshots based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Write `snapshot`, stamping JSON output with the current time.
    pub fn snapshot<W: Write + ?Sized>(
        &self,
        out: &mut W,
        snapshot: &KeyValueSnapshot,
    ) -> Result<()> {
        self.snapshot_at(out, snapshot, Utc::now())
    }

    pub fn snapshot_at<W: Write + ?Sized>(
        &self,
        out: &mut W,
        snapshot: &KeyValueSnapshot,
        captured_at: DateTime<Utc>,
    ) -> Result<()> {
        match self.mode {
            OutputMode::Text => {
                for (key, value) in snapshot {
                    writeln!(out, "{key}={value}")?;
                }
            }
            OutputMode::Json => {
                let doc = JsonSnapshot {
                    captured_at,
                    entries: snapshot,
                };
                serde_json::to_writer(&mut *out, &doc)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    captured_at: DateTime<Utc>,
    entries: &'a KeyValueSnapshot,
}

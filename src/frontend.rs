// src/frontend.rs

//! Pluggable presentation backend.
//!
//! The runtime hands frames and messages to a [`Frontend`] instead of
//! writing to stdout directly, so tests can record what would have been
//! shown.
//!
//! - [`TerminalFrontend`] is the implementation used by the `cookplan`
//!   binary: plain text, or one JSON object per line with `--json`.

use std::io::{self, Write};

use serde::Serialize;

use crate::engine::{Frame, FrameKind};
use crate::errors::Result;
use crate::snapshot::Snapshot;

/// Where frames and messages end up.
pub trait Frontend: Send {
    fn present(&mut self, frame: &Frame) -> Result<()>;
    fn notify(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes to stdout. Logging goes to stderr, so stdout stays clean for
/// piping JSON frames elsewhere.
#[derive(Debug)]
pub struct TerminalFrontend {
    format: OutputFormat,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonLine<'a> {
    Frame { full: bool, snapshot: &'a Snapshot },
    Message { text: &'a str },
}

impl TerminalFrontend {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn write_json(&self, line: &JsonLine<'_>) -> Result<()> {
        let mut out = io::stdout().lock();
        serde_json::to_writer(&mut out, line)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl Frontend for TerminalFrontend {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&JsonLine::Frame {
                full: frame.kind == FrameKind::Full,
                snapshot: &frame.snapshot,
            }),
            OutputFormat::Text => {
                let text = match frame.kind {
                    FrameKind::Full => frame.snapshot.render_text(),
                    FrameKind::Status => format!("{}\n", frame.snapshot.status_line()),
                };
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
                Ok(())
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&JsonLine::Message { text: message }),
            OutputFormat::Text => {
                let mut out = io::stdout().lock();
                writeln!(out, "{message}")?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

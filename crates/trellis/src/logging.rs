//! Log output for interface diagnostics.
//!
//! Diagnostics go through `tracing` under the `interface` target. Hosts with
//! their own subscriber need nothing from here.

use std::{
    io::{Result as IoResult, Write, stderr},
    sync::{Arc, Mutex},
};

use tracing::{level_filters::LevelFilter, subscriber::DefaultGuard};
use tracing_subscriber::fmt;

use crate::error::{Error, Result};

/// Install a compact global subscriber that writes to stderr.
pub fn init() -> Result<()> {
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .compact();
    fmt()
        .with_writer(stderr)
        .event_format(format)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Log writer that appends to a shared buffer.
struct LogWriter {
    /// Shared log buffer.
    buf: Arc<Mutex<Vec<String>>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        if let Ok(mut lines) = self.buf.lock() {
            lines.push(String::from_utf8_lossy(buf).trim().to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

/// An in-memory log sink, one entry per event.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    /// Captured lines.
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route events on the current thread into this buffer until the guard
    /// is dropped.
    pub fn capture(&self) -> DefaultGuard {
        self.capture_with_max_level(LevelFilter::INFO)
    }

    /// Like [`LogBuffer::capture`], but keeping events up to `level`.
    pub fn capture_with_max_level(&self, level: LevelFilter) -> DefaultGuard {
        let format = fmt::format()
            .with_level(true)
            .with_target(false)
            .with_ansi(false)
            .without_time()
            .compact();
        let buf = self.lines.clone();
        let subscriber = fmt()
            .with_writer(move || -> LogWriter { LogWriter { buf: buf.clone() } })
            .with_max_level(level)
            .event_format(format)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Return true if any captured line contains the substring.
    pub fn contains(&self, s: &str) -> bool {
        self.lines().iter().any(|l| l.contains(s))
    }

    /// Number of captured lines containing the substring.
    pub fn count(&self, s: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(s)).count()
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

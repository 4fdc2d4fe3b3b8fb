//! In-memory capturing logger.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Arguments;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every accepted line in memory, rendered as `"<PREFIX>: <message>"`.
///
/// Intended for tests that need to assert on what code under test logged.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    level: Level,
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Create an empty logger that drops calls below `level`.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Threshold below which calls are dropped.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Snapshot of the captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Remove and return the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, level: Level, args: Arguments<'_>) {
        if level.passes(self.level) {
            let line = format!("{}: {}", level.prefix(), args);
            self.guard().push(line);
        }
    }
}

impl Logger for MemoryLogger {
    fn debugf(&self, args: Arguments<'_>) {
        self.emit(Level::DEBUG, args);
    }

    fn infof(&self, args: Arguments<'_>) {
        self.emit(Level::INFO, args);
    }

    fn warningf(&self, args: Arguments<'_>) {
        self.emit(Level::WARNING, args);
    }

    fn errorf(&self, args: Arguments<'_>) {
        self.emit(Level::ERROR, args);
    }
}

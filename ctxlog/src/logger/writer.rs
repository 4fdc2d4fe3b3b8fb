//! Line-oriented logger over any [`io::Write`] sink.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Arguments;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Writes `"<PREFIX>: <message>\n"` for every call at or above a threshold.
///
/// Writes are serialised through a mutex so concurrent callers never
/// interleave within a line. I/O errors are dropped: emit calls have no way
/// to report them.
///
/// # Example
///
/// ```
/// use ctxlog::{Level, Logger, WriterLogger};
///
/// let logger = WriterLogger::new(Level::WARNING, Vec::new());
/// logger.infof(format_args!("dropped"));
/// logger.errorf(format_args!("{} log", "error"));
/// assert_eq!(logger.into_inner(), b"ERROR: error log\n");
/// ```
#[derive(Debug)]
pub struct WriterLogger<W> {
    level: Level,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLogger<W> {
    /// Create a logger writing to `writer`, dropping calls below `level`.
    pub fn new(level: Level, writer: W) -> Self {
        Self {
            level,
            writer: Mutex::new(writer),
        }
    }

    /// Threshold below which calls are dropped.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Consume the logger and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, level: Level, args: Arguments<'_>) {
        if !level.passes(self.level) {
            return;
        }
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}: {}", level.prefix(), args);
    }
}

impl WriterLogger<io::Stderr> {
    /// Console logger on standard error.
    pub fn stderr(level: Level) -> Self {
        Self::new(level, io::stderr())
    }
}

impl WriterLogger<io::Stdout> {
    /// Console logger on standard output.
    pub fn stdout(level: Level) -> Self {
        Self::new(level, io::stdout())
    }
}

impl<W: Write + Send> Logger for WriterLogger<W> {
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

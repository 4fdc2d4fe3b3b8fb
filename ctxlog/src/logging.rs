//! Process-wide `tracing` subscriber setup.
//!
//! Programs that bind a [`TracingLogger`](crate::TracingLogger) need a
//! subscriber installed first. [`init_logging`] installs one that:
//! - Writes to `<log_dir>/<log_file>` (cleared on session start)
//! - Also prints to the console the config selects
//! - Filters with `RUST_LOG`, falling back to the configured level

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, SinkKind};
use crate::level::Level;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global `tracing` subscriber.
///
/// Creates the log directory if needed, clears the previous log file and
/// sets up output to both the file and the console.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created, the log file
/// cannot be cleared, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(&config.log_dir, &config.log_file)?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer(config.sink))
        .with_ansi(config.ansi);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter_for(config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter passing events at `level` and above.
pub fn env_filter_for(level: Level) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from(level).into())
}

/// Create `dir` if missing and truncate `dir/file`, returning the file path.
pub fn prepare_log_file(dir: &Path, file: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let log_path = dir.join(file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}

fn console_writer(sink: SinkKind) -> BoxMakeWriter {
    match sink {
        SinkKind::Stdout => BoxMakeWriter::new(io::stdout),
        _ => BoxMakeWriter::new(io::stderr),
    }
}

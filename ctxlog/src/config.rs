//! Logging configuration.
//!
//! [`LoggingConfig`] describes which logger a program binds into its root
//! context and where the `tracing` subscriber writes. Values start from
//! defaults, may be overridden from `CTXLOG_*` environment variables, and
//! then build the logger.
//!
//! # Example
//!
//! ```
//! use ctxlog::config::{LoggingConfig, SinkKind};
//! use ctxlog::{Level, Logger};
//!
//! let config = LoggingConfig::default()
//!     .with_level(Level::WARNING)
//!     .with_sink(SinkKind::Null);
//!
//! let logger = config.build_logger();
//! logger.errorf(format_args!("discarded"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::level::{Level, LevelParseError};
use crate::logger::{Logger, NullLogger, TracingLogger, WriterLogger};

/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LEVEL: &str = "CTXLOG_LEVEL";
/// Environment variable overriding [`LoggingConfig::sink`].
pub const ENV_SINK: &str = "CTXLOG_SINK";
/// Environment variable overriding [`LoggingConfig::log_dir`].
pub const ENV_LOG_DIR: &str = "CTXLOG_LOG_DIR";
/// Environment variable overriding [`LoggingConfig::log_file`].
pub const ENV_LOG_FILE: &str = "CTXLOG_LOG_FILE";

/// Default directory for the subscriber's log file.
pub const DEFAULT_LOG_DIR: &str = "logs";
/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "ctxlog.log";

/// Errors produced while reading configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Level text did not name a level.
    #[error("invalid value for {key}: {source}")]
    InvalidLevel {
        key: String,
        #[source]
        source: LevelParseError,
    },

    /// Sink text did not name a sink.
    #[error("invalid value for {key}: unknown sink '{value}' - expected one of stderr, stdout, tracing, null")]
    InvalidSink { key: String, value: String },

    /// A value was present but empty.
    #[error("invalid value for {0}: must not be empty")]
    Empty(String),
}

/// Where the configured logger sends its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SinkKind {
    /// Plain lines on standard error.
    #[default]
    Stderr,
    /// Plain lines on standard output.
    Stdout,
    /// Hand messages to the installed `tracing` subscriber.
    Tracing,
    /// Discard everything.
    Null,
}

impl SinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SinkKind::Stderr => "stderr",
            SinkKind::Stdout => "stdout",
            SinkKind::Tracing => "tracing",
            SinkKind::Null => "null",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stderr" => Ok(SinkKind::Stderr),
            "stdout" => Ok(SinkKind::Stdout),
            "tracing" => Ok(SinkKind::Tracing),
            "null" => Ok(SinkKind::Null),
            _ => Err(ConfigError::InvalidSink {
                key: "sink".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for the logger bound at the root of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Threshold below which messages are dropped.
    pub level: Level,
    /// Which logger [`build_logger`](Self::build_logger) creates.
    pub sink: SinkKind,
    /// Directory for the subscriber's log file.
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`.
    pub log_file: String,
    /// Colour console output from the subscriber.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            sink: SinkKind::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = file.into();
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Full path of the subscriber's log file.
    pub fn log_path(&self) -> PathBuf {
        Path::new(&self.log_dir).join(&self.log_file)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Override fields from `lookup`, which maps a `CTXLOG_*` variable name
    /// to its value.
    ///
    /// Unset variables leave the field alone. The first invalid value aborts
    /// with an error naming the variable.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LEVEL) {
            self.level
                .set(value.trim())
                .map_err(|source| ConfigError::InvalidLevel {
                    key: ENV_LEVEL.to_string(),
                    source,
                })?;
        }

        if let Some(value) = lookup(ENV_SINK) {
            self.sink = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSink {
                    key: ENV_SINK.to_string(),
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ENV_LOG_DIR) {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(ENV_LOG_DIR.to_string()));
            }
            self.log_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_LOG_FILE) {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(ENV_LOG_FILE.to_string()));
            }
            self.log_file = value;
        }

        Ok(self)
    }

    /// Create the logger this configuration describes.
    pub fn build_logger(&self) -> Arc<dyn Logger> {
        match self.sink {
            SinkKind::Stderr => Arc::new(WriterLogger::stderr(self.level)),
            SinkKind::Stdout => Arc::new(WriterLogger::stdout(self.level)),
            SinkKind::Tracing => Arc::new(TracingLogger::with_level(self.level)),
            SinkKind::Null => Arc::new(NullLogger),
        }
    }
}

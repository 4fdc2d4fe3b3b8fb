//! Log severity levels.
//!
//! A [`Level`] is a small severity code with four named values. Loggers
//! compare levels to decide what to drop; the facade itself never filters.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a text token does not name a level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized level '{input}' - expected one of debug, info, warning, error")]
pub struct LevelParseError {
    input: String,
}

impl LevelParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The token that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Severity of a log message.
///
/// Ordered by severity: `DEBUG < INFO < WARNING < ERROR`. The wrapped code
/// is public through [`From<u8>`] so that values outside the four named
/// constants can exist; they render as `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

/// Level used by loggers that were not told otherwise.
pub const DEFAULT_LEVEL: Level = Level::INFO;

impl Level {
    /// Debugging information.
    pub const DEBUG: Level = Level(0);
    /// General information.
    pub const INFO: Level = Level(1);
    /// Something needs attention.
    pub const WARNING: Level = Level(2);
    /// Something failed.
    pub const ERROR: Level = Level(3);

    /// The named levels in ascending severity.
    pub const ALL: [Level; 4] = [Level::DEBUG, Level::INFO, Level::WARNING, Level::ERROR];

    /// Replace this level with the one named by `text`.
    ///
    /// Only the exact lowercase names are accepted. On error `self` is left
    /// untouched.
    ///
    /// ```
    /// use ctxlog::Level;
    ///
    /// let mut level = Level::default();
    /// level.set("warning").unwrap();
    /// assert_eq!(level, Level::WARNING);
    /// assert!(level.set("WARN").is_err());
    /// assert_eq!(level, Level::WARNING);
    /// ```
    pub fn set(&mut self, text: &str) -> Result<(), LevelParseError> {
        *self = text.parse()?;
        Ok(())
    }

    /// Canonical lowercase name, or `"unknown"` for an unnamed code.
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "debug",
            1 => "info",
            2 => "warning",
            3 => "error",
            _ => "unknown",
        }
    }

    /// Uppercase tag written in front of each line by text sinks.
    pub const fn prefix(self) -> &'static str {
        match self.0 {
            0 => "DEBUG",
            1 => "INFO",
            2 => "WARNING",
            3 => "ERROR",
            _ => "UNKNOWN",
        }
    }

    /// Raw severity code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether a message at `self` passes a logger configured at `threshold`.
    #[inline]
    pub fn passes(self, threshold: Level) -> bool {
        self >= threshold
    }
}

impl Default for Level {
    fn default() -> Self {
        DEFAULT_LEVEL
    }
}

impl From<u8> for Level {
    fn from(code: u8) -> Self {
        Level(code)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warning" => Ok(Level::WARNING),
            "error" => Ok(Level::ERROR),
            _ => Err(LevelParseError::new(s)),
        }
    }
}

impl From<Level> for tracing_subscriber::filter::LevelFilter {
    fn from(level: Level) -> Self {
        use tracing_subscriber::filter::LevelFilter;

        match level {
            Level::DEBUG => LevelFilter::DEBUG,
            Level::INFO => LevelFilter::INFO,
            Level::WARNING => LevelFilter::WARN,
            Level::ERROR => LevelFilter::ERROR,
            // Above ERROR nothing passes.
            _ => LevelFilter::OFF,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

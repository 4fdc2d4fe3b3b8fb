//! Tracing library adapter implementation.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Binding this adapter into a context routes facade calls into whatever
/// subscriber is installed (see [`init_logging`](crate::logging::init_logging)),
/// so files, filters and formatting come from `tracing-subscriber`.
///
/// # Example
///
/// ```ignore
/// use ctxlog::{Context, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let ctx = Context::background().with_logger(Arc::new(TracingLogger::new()));
/// ctxlog::infof!(&ctx, "Using tracing backend");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Forward every call; the subscriber does all filtering.
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
        }
    }

    /// Drop calls below `level` before they reach `tracing`.
    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// Threshold applied before forwarding.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn debugf(&self, args: Arguments<'_>) {
        if Level::DEBUG.passes(self.level) {
            tracing::debug!("{}", args);
        }
    }

    fn infof(&self, args: Arguments<'_>) {
        if Level::INFO.passes(self.level) {
            tracing::info!("{}", args);
        }
    }

    fn warningf(&self, args: Arguments<'_>) {
        if Level::WARNING.passes(self.level) {
            tracing::warn!("{}", args);
        }
    }

    fn errorf(&self, args: Arguments<'_>) {
        if Level::ERROR.passes(self.level) {
            tracing::error!("{}", args);
        }
    }
}

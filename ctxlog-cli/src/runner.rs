//! CLI runner for common setup.
//!
//! Encapsulates subscriber initialization and logger binding so `main` only
//! deals with arguments.

use crate::error::CliError;
use ctxlog::config::{LoggingConfig, SinkKind};
use ctxlog::logging::{init_logging, LoggingGuard};
use ctxlog::Context;
use tracing::debug;

/// Runner that owns the root context for one CLI invocation.
pub struct CliRunner {
    /// Logging guard - keeps the tracing file writer alive while the runner exists
    #[allow(dead_code)]
    logging_guard: Option<LoggingGuard>,
    /// Root context with the configured logger bound
    context: Context,
}

impl CliRunner {
    /// Initialize tracing when the sink needs it and bind the configured
    /// logger into a fresh root context.
    pub fn new(config: &LoggingConfig) -> Result<Self, CliError> {
        let logging_guard = match config.sink {
            SinkKind::Tracing => Some(init_logging(config).map_err(CliError::LoggingInit)?),
            _ => None,
        };

        let context = Context::background().with_logger(config.build_logger());
        debug!(sink = %config.sink, level = %config.level, "bound root logger");

        Ok(Self {
            logging_guard,
            context,
        })
    }

    /// Root context handed to everything the command runs.
    pub fn context(&self) -> &Context {
        &self.context
    }
}

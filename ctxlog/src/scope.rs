//! Binding a [`Logger`] into a [`Context`] and resolving it again.

use crate::context::Context;
use crate::logger::{Logger, NULL};
use std::sync::Arc;

/// Context slot holding the active logger. Private so that nothing outside
/// this module can bind or shadow it.
struct LoggerSlot(Arc<dyn Logger>);

/// Derive a context in which `logger` is the active logger.
///
/// `ctx` itself is not modified; contexts derived from the returned one
/// resolve to `logger` until another logger is bound below them.
pub fn use_logger(ctx: &Context, logger: Arc<dyn Logger>) -> Context {
    ctx.with_value(LoggerSlot(logger))
}

/// Logger bound nearest to `ctx`, or the silent [`NULL`] logger.
///
/// Never fails: callers do not need to check whether a logger was ever
/// installed.
pub fn get(ctx: &Context) -> &dyn Logger {
    match ctx.value::<LoggerSlot>() {
        Some(LoggerSlot(logger)) => logger.as_ref(),
        None => &NULL,
    }
}

impl Context {
    /// Method form of [`use_logger`].
    pub fn with_logger(&self, logger: Arc<dyn Logger>) -> Context {
        use_logger(self, logger)
    }

    /// Method form of [`get`].
    pub fn logger(&self) -> &dyn Logger {
        get(self)
    }
}

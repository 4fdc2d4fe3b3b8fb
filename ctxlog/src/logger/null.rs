//! No-operation logger implementation.

use crate::logger::Logger;
use std::fmt::Arguments;

/// Shared instance returned by [`get`](crate::get) when a context carries no
/// logger.
pub static NULL: NullLogger = NullLogger;

/// A logger that discards all messages.
///
/// Arguments are never formatted, so calls cost a virtual dispatch and
/// nothing more.
///
/// # Example
///
/// ```
/// use ctxlog::{Logger, NullLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NullLogger);
/// logger.infof(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn debugf(&self, _args: Arguments<'_>) {}

    #[inline]
    fn infof(&self, _args: Arguments<'_>) {}

    #[inline]
    fn warningf(&self, _args: Arguments<'_>) {}

    #[inline]
    fn errorf(&self, _args: Arguments<'_>) {}
}

//! Logger trait definition.

use std::fmt::Arguments;
use std::sync::Arc;

/// Leveled logging capability carried through a [`Context`](crate::Context).
///
/// Each method receives pre-captured formatting arguments and records them as
/// one text line at its level. Whether anything is written, and where, is up
/// to the implementation; dropping calls below a configured threshold is
/// expected.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: a single logger is shared by every
/// context derived from the one it was bound into.
///
/// # Example
///
/// ```
/// use ctxlog::{Logger, MemoryLogger, Level};
///
/// let logger = MemoryLogger::new(Level::DEBUG);
/// logger.infof(format_args!("{} tiles cached", 12));
/// assert_eq!(logger.lines(), vec!["INFO: 12 tiles cached"]);
/// ```
pub trait Logger: Send + Sync {
    /// Record a debug-level message.
    fn debugf(&self, args: Arguments<'_>);

    /// Like [`debugf`](Logger::debugf), at info level.
    fn infof(&self, args: Arguments<'_>);

    /// Like [`debugf`](Logger::debugf), at warning level.
    fn warningf(&self, args: Arguments<'_>);

    /// Like [`debugf`](Logger::debugf), at error level.
    fn errorf(&self, args: Arguments<'_>);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn debugf(&self, args: Arguments<'_>) {
        (**self).debugf(args)
    }

    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args)
    }

    fn warningf(&self, args: Arguments<'_>) {
        (**self).warningf(args)
    }

    fn errorf(&self, args: Arguments<'_>) {
        (**self).errorf(args)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn debugf(&self, args: Arguments<'_>) {
        (**self).debugf(args)
    }

    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args)
    }

    fn warningf(&self, args: Arguments<'_>) {
        (**self).warningf(args)
    }

    fn errorf(&self, args: Arguments<'_>) {
        (**self).errorf(args)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn debugf(&self, args: Arguments<'_>) {
        (**self).debugf(args)
    }

    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args)
    }

    fn warningf(&self, args: Arguments<'_>) {
        (**self).warningf(args)
    }

    fn errorf(&self, args: Arguments<'_>) {
        (**self).errorf(args)
    }
}

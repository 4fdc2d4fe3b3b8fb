//! ctxlog - context-carried leveled logging
//!
//! Code logs through the [`Logger`] bound into the [`Context`] it was handed.
//! When nothing was bound, calls resolve to the silent [`NullLogger`], so
//! library code never has to check whether logging was set up.
//!
//! # Usage
//!
//! ```
//! use ctxlog::{Context, Level, MemoryLogger};
//! use ctxlog::{debugf, warningf};
//! use std::sync::Arc;
//!
//! fn refresh(ctx: &Context, tiles: usize) {
//!     debugf!(ctx, "refreshing {} tiles", tiles);
//!     if tiles > 100 {
//!         warningf!(ctx, "large refresh: {} tiles", tiles);
//!     }
//! }
//!
//! // Nothing bound: silent.
//! refresh(&Context::background(), 500);
//!
//! let logger = Arc::new(MemoryLogger::new(Level::WARNING));
//! let ctx = Context::background().with_logger(logger.clone());
//! refresh(&ctx, 500);
//! assert_eq!(logger.lines(), vec!["WARNING: large refresh: 500 tiles"]);
//! ```

use std::fmt::Arguments;

pub mod config;
pub mod context;
pub mod level;
pub mod logger;
pub mod logging;
mod scope;

pub use context::Context;
pub use level::{Level, LevelParseError, DEFAULT_LEVEL};
pub use logger::{Logger, MemoryLogger, NullLogger, TracingLogger, WriterLogger, NULL};
pub use scope::{get, use_logger};

/// Version of the ctxlog library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log at debug level through the logger bound to `ctx`.
pub fn debugf(ctx: &Context, args: Arguments<'_>) {
    get(ctx).debugf(args);
}

/// Log at info level through the logger bound to `ctx`.
pub fn infof(ctx: &Context, args: Arguments<'_>) {
    get(ctx).infof(args);
}

/// Log at warning level through the logger bound to `ctx`.
pub fn warningf(ctx: &Context, args: Arguments<'_>) {
    get(ctx).warningf(args);
}

/// Log at error level through the logger bound to `ctx`.
pub fn errorf(ctx: &Context, args: Arguments<'_>) {
    get(ctx).errorf(args);
}

/// Format and log at debug level: `debugf!(ctx, "{} log", "debug")`.
#[macro_export]
macro_rules! debugf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::debugf($ctx, format_args!($($arg)+))
    };
}

/// Format and log at info level.
#[macro_export]
macro_rules! infof {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::infof($ctx, format_args!($($arg)+))
    };
}

/// Format and log at warning level.
#[macro_export]
macro_rules! warningf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::warningf($ctx, format_args!($($arg)+))
    };
}

/// Format and log at error level.
#[macro_export]
macro_rules! errorf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::errorf($ctx, format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_functions_resolve_bound_logger() {
        let logger = Arc::new(MemoryLogger::new(Level::DEBUG));
        let ctx = use_logger(&Context::background(), logger.clone());

        debugf(&ctx, format_args!("{} log", "debug"));
        infof(&ctx, format_args!("{} log", "info"));
        warningf(&ctx, format_args!("{} log", "warning"));
        errorf(&ctx, format_args!("{} log", "error"));

        assert_eq!(
            logger.lines(),
            vec![
                "DEBUG: debug log",
                "INFO: info log",
                "WARNING: warning log",
                "ERROR: error log",
            ]
        );
    }

    #[test]
    fn test_macros_without_logger_do_not_panic() {
        let ctx = Context::background();
        debugf!(&ctx, "foo {}", "bar");
        infof!(&ctx, "foo {}", "bar");
        warningf!(&ctx, "foo {}", "bar");
        errorf!(&ctx, "foo {}", "bar");
    }

    #[test]
    fn test_macro_accepts_plain_literal() {
        let logger = Arc::new(MemoryLogger::new(Level::DEBUG));
        let ctx = Context::background().with_logger(logger.clone());
        infof!(&ctx, "no arguments");
        let answer = 42;
        errorf!(&ctx, "inline {answer}");

        assert_eq!(logger.lines(), vec!["INFO: no arguments", "ERROR: inline 42"]);
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Integration tests for the context-carried logging facade.
//!
//! These tests drive the crate through its public surface only:
//! - Level parsing and rendering
//! - Silent fallback when no logger is bound
//! - Binding, resolution and shadowing across derived contexts
//! - Threshold filtering by a capturing logger
//! - Concurrent derivation from a shared base context

use std::sync::Arc;
use std::thread;

use ctxlog::{debugf, errorf, infof, warningf};
use ctxlog::{get, use_logger, Context, Level, Logger, MemoryLogger, WriterLogger, NULL};

// =============================================================================
// Test Helpers
// =============================================================================

fn is_null(logger: &dyn Logger) -> bool {
    std::ptr::addr_eq(logger, &NULL)
}

fn capture(level: Level) -> (Arc<MemoryLogger>, Context) {
    let logger = Arc::new(MemoryLogger::new(level));
    let ctx = use_logger(&Context::background(), logger.clone());
    (logger, ctx)
}

// =============================================================================
// Level
// =============================================================================

#[test]
fn test_level_round_trips_canonical_tokens() {
    for token in ["debug", "info", "warning", "error"] {
        let mut level = Level::default();
        level.set(token).unwrap();
        assert_eq!(level.to_string(), token);
    }
}

#[test]
fn test_level_rejects_unknown_token() {
    let mut level = Level::default();
    assert!(level.set("wrong").is_err());
    assert_eq!(level, Level::INFO);
}

#[test]
fn test_level_strict_order() {
    let levels = Level::ALL;
    for pair in levels.windows(2) {
        assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
    }
}

#[test]
fn test_out_of_range_level_is_unknown() {
    assert_eq!(Level::from(4).to_string(), "unknown");
    assert_eq!(Level::from(u8::MAX).to_string(), "unknown");
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn test_default_null_logger() {
    let ctx = Context::background();
    assert!(is_null(get(&ctx)));

    debugf!(&ctx, "foo {}", "bar");
    infof!(&ctx, "foo {}", "bar");
    warningf!(&ctx, "foo {} {:?} {:>4}", "bar", Some(1), 2);
    errorf!(&ctx, "foo");
}

#[test]
fn test_unrelated_values_do_not_install_a_logger() {
    let ctx = Context::background().with_value("request-7").with_value(3u64);
    assert!(is_null(get(&ctx)));
}

// =============================================================================
// Binding
// =============================================================================

#[test]
fn test_get_returns_exactly_the_bound_logger() {
    let logger: Arc<dyn Logger> = Arc::new(MemoryLogger::new(Level::DEBUG));
    let base = Context::background();
    let ctx = use_logger(&base, Arc::clone(&logger));
    let grandchild = ctx.with_value(1u8).with_value("tag");

    assert!(std::ptr::addr_eq(get(&ctx), logger.as_ref()));
    assert!(std::ptr::addr_eq(get(&grandchild), logger.as_ref()));
    assert!(is_null(get(&base)), "use_logger must not mutate its input");
}

#[test]
fn test_logger_outlives_binding_scope() {
    let logger = Arc::new(MemoryLogger::new(Level::DEBUG));
    let ctx = {
        let scoped = Arc::clone(&logger);
        Context::background().with_logger(scoped)
    };
    infof!(&ctx, "still here");
    drop(ctx);

    assert_eq!(logger.lines(), vec!["INFO: still here"]);
    assert_eq!(Arc::strong_count(&logger), 1);
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn test_all_levels_with_debug_threshold() {
    let (logger, ctx) = capture(Level::DEBUG);

    debugf!(&ctx, "{} log", "debug");
    assert_eq!(logger.take(), vec!["DEBUG: debug log"]);

    infof!(&ctx, "{} log", "info");
    assert_eq!(logger.take(), vec!["INFO: info log"]);

    warningf!(&ctx, "{} log", "warning");
    assert_eq!(logger.take(), vec!["WARNING: warning log"]);

    errorf!(&ctx, "{} log", "error");
    assert_eq!(logger.take(), vec!["ERROR: error log"]);
}

#[test]
fn test_warning_threshold_filters() {
    let (logger, ctx) = capture(Level::WARNING);

    debugf!(&ctx, "{} log", "debug");
    assert!(logger.is_empty());

    infof!(&ctx, "log {}", "info");
    assert!(logger.is_empty());

    warningf!(&ctx, "log {} {}", "warning", "attention");
    assert_eq!(logger.take(), vec!["WARNING: log warning attention"]);

    errorf!(&ctx, "{} log", "error");
    assert_eq!(logger.take(), vec!["ERROR: error log"]);
}

#[test]
fn test_writer_logger_through_context() {
    let logger = Arc::new(WriterLogger::new(Level::WARNING, Vec::new()));
    let ctx = Context::background().with_logger(logger.clone());

    infof!(&ctx, "log {}", "info");
    warningf!(&ctx, "log {} {}", "warning", "attention");
    drop(ctx);

    let logger = Arc::try_unwrap(logger).ok().unwrap();
    assert_eq!(logger.into_inner(), b"WARNING: log warning attention\n");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_use_on_shared_base() {
    let base = Context::background();
    let loggers: Vec<Arc<MemoryLogger>> = (0..16)
        .map(|_| Arc::new(MemoryLogger::new(Level::DEBUG)))
        .collect();

    let handles: Vec<_> = loggers
        .iter()
        .enumerate()
        .map(|(i, logger)| {
            let base = base.clone();
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                let ctx = use_logger(&base, logger);
                for n in 0..10 {
                    infof!(&ctx, "worker {} message {}", i, n);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(is_null(get(&base)));
    for (i, logger) in loggers.iter().enumerate() {
        let lines = logger.lines();
        assert_eq!(lines.len(), 10);
        let prefix = format!("INFO: worker {} message ", i);
        assert!(lines.iter().all(|line| line.starts_with(&prefix)));
    }
}

#[test]
fn test_shared_logger_across_threads() {
    let (logger, ctx) = capture(Level::INFO);

    thread::scope(|s| {
        for i in 0..8 {
            let ctx = &ctx;
            s.spawn(move || {
                debugf!(ctx, "hidden {}", i);
                errorf!(ctx, "visible {}", i);
            });
        }
    });

    let mut lines = logger.lines();
    lines.sort();
    let mut expected: Vec<String> = (0..8).map(|i| format!("ERROR: visible {}", i)).collect();
    expected.sort();
    assert_eq!(lines, expected);
}

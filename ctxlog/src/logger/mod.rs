//! Logger capability and the stock implementations.
//!
//! # Architecture
//!
//! - `Logger` trait: the four-operation interface every sink implements
//! - `NullLogger`: silent default returned when a context has no logger
//! - `WriterLogger`: threshold-filtering text sink over any `io::Write`
//! - `MemoryLogger`: threshold-filtering capture buffer for tests
//! - `TracingLogger`: adapter that hands messages to the `tracing` crate
//!
//! Any other type implementing [`Logger`] can be bound with
//! [`use_logger`](crate::use_logger) just the same.

mod memory;
mod null;
mod tracing_adapter;
mod r#trait;
mod writer;

pub use memory::MemoryLogger;
pub use null::{NullLogger, NULL};
pub use r#trait::Logger;
pub use tracing_adapter::TracingLogger;
pub use writer::WriterLogger;

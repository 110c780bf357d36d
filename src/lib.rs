//! # Logline
//!
//! An asynchronous console/file logging engine: callers on any thread emit
//! leveled records, a single background worker drains them in order and
//! delivers each to a colorized console stream and/or an append-only log
//! file.
//!
//! ## Features
//!
//! - **Non-blocking producers**: a log call renders the line and enqueues
//!   it; all sink I/O happens on the worker thread
//! - **Call-site capture**: file, line, and function recorded per message
//! - **Lossless shutdown**: teardown drains every queued record before the
//!   worker exits and the file closes
//! - **Isolated instances**: explicit engines for tests and libraries, plus
//!   an optional process-wide instance
//!
//! ## Example
//!
//! ```
//! use logline::prelude::*;
//! use logline::{callsite, info};
//!
//! let logger = Logger::builder().min_level(Level::Info).build();
//!
//! info!(logger, "server listening on port {}", 8080);
//! logger.warn(callsite!(), "config file missing, using defaults");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global, init_global, CallSite, Destination, Level, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, Sink, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    global, init_global, CallSite, Destination, Level, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, Sink, DEFAULT_LOG_FILE,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use sinks::{ConsoleSink, FileSink};

//! Logging macros for call-site capture and message formatting.
//!
//! The macros capture the call site from the compiler (`file!`, `line!`,
//! and the enclosing function's type name) and format the message with
//! `format!`, so template/argument mismatches are compile errors.
//!
//! # Examples
//!
//! ```
//! use logline::prelude::*;
//! use logline::{info, warn_file};
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // File-destined records need file logging enabled first;
//! // this one is turned into a console warning instead
//! warn_file!(logger, "retrying in {}s", 5);
//! ```

/// Capture the current call site: file, line, and enclosing function.
///
/// # Examples
///
/// ```
/// let site = logline::callsite!();
/// assert!(site.file.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let __name = __type_name_of(__f);
        $crate::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            __name.strip_suffix("::__f").unwrap_or(__name),
        )
    }};
}

/// Log a console message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logline::prelude::*;
/// # let logger = Logger::new();
/// use logline::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, $crate::callsite!(), ::std::format!($($arg)+))
    };
}

/// Log a file-destined message with automatic formatting.
///
/// Requires file logging to be enabled on the target logger; otherwise the
/// record is dropped and a console warning is emitted in its place.
///
/// # Examples
///
/// ```
/// # use logline::prelude::*;
/// # let logger = Logger::new();
/// use logline::log_to_file;
/// log_to_file!(logger, Level::Info, "persisted value: {}", 42);
/// ```
#[macro_export]
macro_rules! log_to_file {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_to_file($level, $crate::callsite!(), ::std::format!($($arg)+))
    };
}

/// Log a trace-level console message.
///
/// # Examples
///
/// ```
/// # use logline::prelude::*;
/// # let logger = Logger::new();
/// use logline::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level console message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level console message.
///
/// # Examples
///
/// ```
/// # use logline::prelude::*;
/// # let logger = Logger::new();
/// use logline::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level console message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level console message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level console message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Log a trace-level file message.
#[macro_export]
macro_rules! trace_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level file message.
#[macro_export]
macro_rules! debug_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level file message.
///
/// # Examples
///
/// ```no_run
/// # use logline::prelude::*;
/// # let logger = Logger::new();
/// use logline::info_file;
/// logger.enable_file_logging(true);
/// info_file!(logger, "persisted {} rows", 12);
/// ```
#[macro_export]
macro_rules! info_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level file message.
#[macro_export]
macro_rules! warn_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level file message.
#[macro_export]
macro_rules! error_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level file message.
#[macro_export]
macro_rules! fatal_file {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

//! Core engine types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;

pub use call_site::CallSite;
pub use config::{LoggerConfig, DEFAULT_LOG_FILE};
pub use error::{LoggerError, Result};
pub use level::{Level, ANSI_RESET};
pub use logger::{global, init_global, Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use record::{Destination, LogRecord};
pub use sink::Sink;

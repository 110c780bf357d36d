//! Sink trait for log output destinations
//!
//! Records arrive fully rendered, so a sink only writes and flushes.

use super::{error::Result, record::LogRecord};

pub trait Sink: Send + Sync {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

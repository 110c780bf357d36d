//! Console sink implementation
//!
//! Writes rendered lines to stdout. Color escapes are already part of the
//! rendered text, and every level goes to the same stream so the FIFO order
//! of a drain cycle is preserved on screen.

use crate::core::{LogRecord, Result, Sink};
use std::io::Write;

pub struct ConsoleSink {
    stdout: std::io::Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let mut handle = self.stdout.lock();
        handle.write_all(record.line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

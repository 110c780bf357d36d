//! Logger metrics for observability
//!
//! Counters for monitoring engine health: how much was enqueued, what each
//! sink actually wrote, and how often the engine had to emit a diagnostic
//! about its own operation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use logline::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_console_written();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.console_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records accepted onto the queue
    enqueued: AtomicU64,

    /// Lines the console sink wrote
    console_written: AtomicU64,

    /// Lines the file sink wrote
    file_written: AtomicU64,

    /// Warn/Error records the engine emitted about its own operation
    diagnostics_emitted: AtomicU64,

    /// Sink write or flush failures reported by the worker
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            console_written: AtomicU64::new(0),
            file_written: AtomicU64::new(0),
            diagnostics_emitted: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Get the number of records accepted onto the queue
    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    /// Get the number of lines written to the console sink
    #[inline]
    pub fn console_written(&self) -> u64 {
        self.console_written.load(Ordering::Relaxed)
    }

    /// Get the number of lines written to the file sink
    #[inline]
    pub fn file_written(&self) -> u64 {
        self.file_written.load(Ordering::Relaxed)
    }

    /// Get the number of self-diagnostics the engine emitted
    #[inline]
    pub fn diagnostics_emitted(&self) -> u64 {
        self.diagnostics_emitted.load(Ordering::Relaxed)
    }

    /// Get the number of sink write/flush failures
    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a successful enqueue
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a line written to the console sink
    #[inline]
    pub fn record_console_written(&self) -> u64 {
        self.console_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a line written to the file sink
    #[inline]
    pub fn record_file_written(&self) -> u64 {
        self.file_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an engine self-diagnostic
    #[inline]
    pub fn record_diagnostic(&self) -> u64 {
        self.diagnostics_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a sink write/flush failure
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

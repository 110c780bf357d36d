//! Criterion benchmarks for logline

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logline::prelude::*;
use logline::{callsite, info};
use std::sync::Arc;

/// Sink that swallows every line; benchmarks measure the engine, not stdout.
struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _record: &LogRecord) -> logline::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> logline::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(level: Level) -> Logger {
    Logger::builder()
        .min_level(level)
        .console_sink(NullSink)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_defaults", |b| {
        b.iter(|| {
            let logger = null_logger(Level::Trace);
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Enqueue Path Benchmarks
// ============================================================================

fn bench_filtered_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_out");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::Error);

    // Below threshold: the call must cost a level check and nothing else
    group.bench_function("debug_below_error_threshold", |b| {
        b.iter(|| {
            logger.debug(callsite!(), black_box("never rendered"));
        });
    });

    group.finish();
}

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::Trace);

    group.bench_function("plain_message", |b| {
        b.iter(|| {
            logger.info(callsite!(), black_box("benchmark message"));
        });
    });

    group.bench_function("formatted_message", |b| {
        b.iter(|| {
            info!(logger, "value = {}", black_box(42));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Producer Benchmarks
// ============================================================================

fn bench_concurrent_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_producers");

    let logger = Arc::new(null_logger(Level::Trace));

    group.bench_function("single_thread", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            logger.info(callsite!(), black_box("concurrent message"));
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..25 {
                            logger.info(callsite!(), "concurrent message");
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_filtered_out,
    bench_enqueue,
    bench_concurrent_producers
);
criterion_main!(benches);

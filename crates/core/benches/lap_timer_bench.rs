//! Lap Timer Benchmarks
//!
//! Overhead of recording a lap and of summarizing a full run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use latencykit_core::{LapStats, LapTimer};

/// Benchmark the cost of a single fixed lap
fn bench_lap_fixed(c: &mut Criterion) {
    c.bench_function("lap_fixed", |b| {
        let mut timer = LapTimer::with_capacity(1_000_000);
        b.iter(|| {
            if timer.len() == timer.capacity() {
                timer.reset();
            }
            black_box(timer.lap_fixed().ok())
        });
    });
}

/// Benchmark statistics over runs of increasing length
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_stats");
    for count in [100_u64, 10_000] {
        let laps: Vec<Duration> = (0..count)
            .map(|i| Duration::from_nanos(1_000 + (i * 7919) % 5_000))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &laps, |b, laps| {
            b.iter(|| black_box(LapStats::from_laps(black_box(laps))));
        });
    }
    group.finish();
}

criterion_group!(timer_benches, bench_lap_fixed, bench_stats);
criterion_main!(timer_benches);

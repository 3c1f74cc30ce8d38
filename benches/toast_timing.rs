// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast scheduling.
//!
//! Measures the performance of:
//! - Pushing toasts into a handful of regions
//! - Running full countdowns to detachment on simulated time

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toast::toast::{Manager, Position, ToastOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark toast creation across all named regions.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_timing");

    group.bench_function("push_all_regions", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            let now = Instant::now();
            for position in Position::NAMED {
                manager.push(ToastOptions::new().position(position), now);
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark complete lifecycles, from push to detachment.
///
/// Every 10ms tick of every toast is fired, so this is dominated by the
/// timer queue.
fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_timing");

    for count in [1_usize, 10, 50] {
        group.bench_with_input(BenchmarkId::new("lifecycle", count), &count, |b, &count| {
            b.iter(|| {
                let mut manager = Manager::new();
                let start = Instant::now();
                for _ in 0..count {
                    manager.push(
                        ToastOptions::new().auto_close_millis(1000).show_progress(true),
                        start,
                    );
                }
                manager.advance(start + Duration::from_millis(1500));
                assert!(black_box(&manager).is_empty());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_lifecycle);
criterion_main!(benches);

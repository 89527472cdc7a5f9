// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification churn.
//!
//! Measures the performance of:
//! - Pushing into a full manager (eviction on every push)
//! - Ticking a full manager while countdowns expire
//! - Hover pause/resume cycles

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toastline::clock::ManualClock;
use toastline::notifications::{Kind, Manager, Preset, Settings};

fn full_manager(max_visible: usize) -> (Manager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone(), Settings::with_max_visible(max_visible));
    for preset in Preset::ALL.iter().cycle().take(max_visible) {
        manager.show_preset(*preset);
    }
    (manager, clock)
}

/// Every push evicts the oldest toast.
fn bench_push_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    for max_visible in [5, 20] {
        let (mut manager, _clock) = full_manager(max_visible);
        group.bench_function(format!("push_evict_{max_visible}"), |b| {
            b.iter(|| {
                let id = manager.add(Kind::Info, "Link copied!");
                black_box(id)
            });
        });
    }

    group.finish();
}

/// Ticks at the default cadence until every countdown has fired.
fn bench_tick_until_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("tick_until_empty", |b| {
        b.iter(|| {
            let (mut manager, clock) = full_manager(20);
            // The offline preset is persistent and would never expire.
            manager.clear_kind(Kind::Warning);
            while !manager.is_empty() {
                clock.advance_millis(100);
                black_box(manager.tick());
            }
        });
    });

    group.finish();
}

fn bench_pause_resume(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let (mut manager, clock) = full_manager(5);
    let id = manager.show_preset(Preset::SubmissionFailed);

    group.bench_function("pause_resume", |b| {
        b.iter(|| {
            black_box(manager.pause(id));
            clock.advance_millis(1);
            black_box(manager.resume(id));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_with_eviction,
    bench_tick_until_empty,
    bench_pause_resume
);
criterion_main!(benches);

//! Benchmark for the function decorators.
//!
//! Measures the overhead each wrapper adds over a direct call, the cost of
//! memoize hits and misses, and throttle bookkeeping on a virtual timeline.

use combinars::decorate::{VirtualTimeline, memoize, once, throttle};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// 1. once
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapped = once(|value: u64| value.wrapping_mul(31));
            black_box(wrapped.call(black_box(7)))
        });
    });

    let wrapped = once(|value: u64| value.wrapping_mul(31));
    wrapped.call(7);
    group.bench_function("replayed_call", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(9))));
    });

    group.finish();
}

// =============================================================================
// 2. memoize
// =============================================================================

fn fibonacci(index: u64) -> u64 {
    (0..index).fold((0_u64, 1_u64), |(current, next), _| (next, current.wrapping_add(next))).0
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for index in [10_u64, 80] {
        group.bench_with_input(BenchmarkId::new("direct", index), &index, |bencher, &index| {
            bencher.iter(|| black_box(fibonacci(black_box(index))));
        });

        let memoized = memoize(fibonacci);
        memoized.call(index);
        group.bench_with_input(BenchmarkId::new("hit", index), &index, |bencher, &index| {
            bencher.iter(|| black_box(memoized.call(black_box(index))));
        });
    }

    group.bench_function("miss_then_hit_1000_keys", |bencher| {
        bencher.iter(|| {
            let memoized = memoize(|key: u32| key.rotate_left(7));
            for key in 0..1_000 {
                black_box(memoized.call(key));
            }
            for key in 0..1_000 {
                black_box(memoized.call(key));
            }
        });
    });

    group.finish();
}

// =============================================================================
// 3. throttle
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("throttle");

    for calls_per_window in [1_u64, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(calls_per_window),
            &calls_per_window,
            |bencher, &calls_per_window| {
                bencher.iter(|| {
                    let timeline = Rc::new(VirtualTimeline::new());
                    let throttled = throttle(
                        |value: u64| black_box(value),
                        Duration::from_millis(100),
                        timeline.clone(),
                        timeline.clone(),
                    );
                    let step = Duration::from_millis(100 / calls_per_window);
                    for value in 0..1_000 {
                        black_box(throttled.call(value));
                        timeline.advance(step);
                    }
                    timeline.run_until_idle()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_throttle);

criterion_main!(benches);

// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// Measures the driver's own per-item overhead:
//   1. Seeded fold over synchronous workers, no forced yields
//   2. The same fold with a budget tight enough to yield often
//   3. map / filter over the same input

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coopfold::core::engine::{Driver, Step};
use coopfold::core::timing::TimingConfig;

const ITEMS: u64 = 100_000;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build runtime")
}

fn bench_fold(c: &mut Criterion) {
    let rt = runtime();
    let relaxed = Driver::new().with_timing(TimingConfig::from_millis(0, 1_000));
    let tight = Driver::new().with_timing(TimingConfig {
        yield_delay: Duration::ZERO,
        batch_time: Duration::from_micros(50),
    });

    c.bench_function("fold_100k_no_yield", |b| {
        b.iter(|| {
            rt.block_on(relaxed.fold(0..ITEMS, 0u64, |acc, n| async move {
                Step::Continue(acc + black_box(n))
            }))
        })
    });

    c.bench_function("fold_100k_tight_budget", |b| {
        b.iter(|| {
            rt.block_on(tight.fold(0..ITEMS, 0u64, |acc, n| async move {
                Step::Continue(acc + black_box(n))
            }))
        })
    });
}

fn bench_combinators(c: &mut Criterion) {
    let rt = runtime();
    let driver = Driver::new().with_timing(TimingConfig::from_millis(0, 50));

    c.bench_function("map_100k", |b| {
        b.iter(|| rt.block_on(driver.map(0..ITEMS, |n| async move { black_box(n) * 2 })))
    });

    c.bench_function("filter_100k", |b| {
        b.iter(|| rt.block_on(driver.filter(0..ITEMS, |&n| async move { n % 3 == 0 })))
    });
}

criterion_group!(benches, bench_fold, bench_combinators);
criterion_main!(benches);

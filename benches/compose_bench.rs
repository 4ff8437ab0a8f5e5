//! Benchmarks for derived nested-container operations against their
//! hand-written equivalents.

use criterion::{Criterion, criterion_group, criterion_main};
use kindred::compose::Compose;
use kindred::typeclass::{Foldable, Functor};
use std::hint::black_box;

fn nested_input() -> Vec<Vec<u64>> {
    (0..100).map(|outer| (0..100).map(|inner| outer * 100 + inner).collect()).collect()
}

fn bench_composed_fmap(c: &mut Criterion) {
    let input = nested_input();
    c.bench_function("composed fmap 100x100", |b| {
        b.iter(|| Compose(black_box(input.clone())).fmap(|n| n + 1));
    });
}

fn bench_composed_fold(c: &mut Criterion) {
    let input = nested_input();
    c.bench_function("composed fold_left 100x100", |b| {
        b.iter(|| {
            Compose(black_box(input.clone()))
                .fold_left(0u64, |accumulator, element| accumulator + element)
        });
    });
}

fn bench_manual_fold(c: &mut Criterion) {
    let input = nested_input();
    c.bench_function("manual nested fold 100x100", |b| {
        b.iter(|| {
            black_box(input.clone())
                .into_iter()
                .flatten()
                .fold(0u64, |accumulator, element| accumulator + element)
        });
    });
}

criterion_group!(
    benches,
    bench_composed_fmap,
    bench_composed_fold,
    bench_manual_fold
);
criterion_main!(benches);

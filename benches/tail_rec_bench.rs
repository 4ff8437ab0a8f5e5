//! Benchmarks for the stack-safe recursion drivers.

use criterion::{Criterion, criterion_group, criterion_main};
use kindred::control::{Either, tail_rec, tail_rec_writer};
use std::hint::black_box;

fn bench_tail_rec(c: &mut Criterion) {
    c.bench_function("tail_rec count to 100k", |b| {
        b.iter(|| {
            tail_rec(black_box(0u64), |n| {
                if n < 100_000 {
                    Either::Left(n + 1)
                } else {
                    Either::Right(n)
                }
            })
        });
    });
}

fn bench_tail_rec_writer(c: &mut Criterion) {
    c.bench_function("tail_rec_writer collect 10k seeds", |b| {
        b.iter(|| {
            let (log, result): (Vec<u32>, u32) = tail_rec_writer(black_box(1u32), |n| {
                if n < 10_000 {
                    (vec![n], Either::Left(n + 1))
                } else {
                    (vec![n], Either::Right(n))
                }
            });
            (log, result)
        });
    });
}

criterion_group!(benches, bench_tail_rec, bench_tail_rec_writer);
criterion_main!(benches);

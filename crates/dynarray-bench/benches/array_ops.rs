//! Criterion micro-benchmarks for append, middle insertion, erase, and copy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dynarray_alloc::HeapAlloc;
use dynarray_bench::{filled, random_positions};
use dynarray_core::{DynArray, GrowthPolicy};

const N: usize = 10_000;

fn bench_push_back(c: &mut Criterion) {
    c.bench_function("push_back_10k_from_empty", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..N as u64 {
                array.push_back(black_box(i));
            }
            array
        });
    });

    c.bench_function("push_back_10k_reserved", |b| {
        b.iter(|| {
            let mut array = DynArray::with_capacity(N);
            for i in 0..N as u64 {
                array.push_back(black_box(i));
            }
            array
        });
    });

    let policy = GrowthPolicy::new(16, 4).unwrap();
    c.bench_function("push_back_10k_factor_4", |b| {
        b.iter(|| {
            let mut array = DynArray::with_policy(policy);
            for i in 0..N as u64 {
                array.push_back(black_box(i));
            }
            array
        });
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..1_000u64 {
                array.insert(0, black_box(i));
            }
            array
        });
    });
}

fn bench_erase_random(c: &mut Criterion) {
    let positions = random_positions(42, 1_000, N);
    c.bench_function("erase_random_1k_of_10k", |b| {
        b.iter_batched(
            || filled(N, HeapAlloc),
            |mut array| {
                for &pos in &positions {
                    black_box(array.erase(pos));
                }
                array
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_clone(c: &mut Criterion) {
    let source = filled(N, HeapAlloc);
    c.bench_function("clone_10k", |b| {
        b.iter(|| black_box(&source).clone());
    });

    let mut target = DynArray::with_capacity(N / 2);
    c.bench_function("clone_from_10k", |b| {
        b.iter(|| target.clone_from(black_box(&source)));
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_insert_front,
    bench_erase_random,
    bench_clone
);
criterion_main!(benches);

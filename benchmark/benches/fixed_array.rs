// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Fixed-array suite across the size ladder.
//!
//! The payload bytes live inline, so the stack path pays a genuine N-byte
//! copy at each of the three non-inlined boundaries while the heap path pays
//! one allocation. The runtime size is dispatched to the concrete `Slab<N>`
//! shape at benchmark time through the closed `with_slab_size!` match.

use callcost_core::{ship_slab, ship_slab_boxed, with_slab_size, PayloadSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

fn bench_stack_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_array_stack");
    group.measurement_time(Duration::from_secs(5));

    for size in PayloadSize::ladder() {
        group.throughput(Throughput::Bytes(size.bytes() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.label()), &size, |b, &size| {
            macro_rules! run_stack {
                ($n:literal) => {
                    b.iter(|| black_box(ship_slab::<$n>()))
                };
            }
            with_slab_size!(size, run_stack);
        });
    }

    group.finish();
}

fn bench_heap_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_array_heap");
    group.measurement_time(Duration::from_secs(5));

    for size in PayloadSize::ladder() {
        group.throughput(Throughput::Bytes(size.bytes() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.label()), &size, |b, &size| {
            macro_rules! run_heap {
                ($n:literal) => {
                    b.iter(|| black_box(ship_slab_boxed::<$n>()))
                };
            }
            with_slab_size!(size, run_heap);
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stack_path, bench_heap_path);
criterion_main!(benches);

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Small-struct suite: by-value versus boxed return of a 16-byte payload.
//!
//! No size sweep. At this size the copy is near free, so the gap between the
//! two groups is essentially the price of one heap allocation per chain.

use callcost_core::probe::{ship_probe, ship_probe_boxed};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_small_struct(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_struct");

    group.bench_function("stack", |b| {
        b.iter(|| black_box(ship_probe()));
    });

    group.bench_function("heap", |b| {
        b.iter(|| black_box(ship_probe_boxed()));
    });

    group.finish();
}

criterion_group!(benches, bench_small_struct);
criterion_main!(benches);

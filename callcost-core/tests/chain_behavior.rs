// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Integration tests over the full public surface of callcost-core.
//!
//! These verify the semantics the benchmarks rely on: every chain level
//! leaves an observable mutation, both return paths produce identical
//! payloads, and the size ladder gates everything that varies by size.

use callcost_core::{
    parcel, probe, ship_slab, ship_slab_boxed, with_slab_size, CallcostError, PayloadSize,
    SIZE_LADDER,
};

/// Bytes 0..2 carry one distinct mark per call level.
const LEVEL_MARKS: [u8; 3] = [1, 2, 3];

#[test]
fn test_parcel_paths_agree_for_every_ladder_size() {
    for size in PayloadSize::ladder() {
        let stack = parcel::ship_parcel(size);
        let heap = parcel::ship_parcel_boxed(size);

        assert_eq!(stack.data.len(), size.bytes());
        assert_eq!(&stack.data[..3], &LEVEL_MARKS);
        assert_eq!(stack, *heap, "paths diverged at {}", size.label());
    }
}

#[test]
fn test_probe_paths_agree() {
    assert_eq!(probe::ship_probe(), *probe::ship_probe_boxed());
}

#[test]
fn test_slab_paths_agree_for_every_ladder_size() {
    // By-value Slab frames at 1 MiB need more than the default test stack.
    std::thread::Builder::new()
        .stack_size(32 << 20)
        .spawn(|| {
            for size in PayloadSize::ladder() {
                macro_rules! compare_paths {
                    ($n:literal) => {{
                        let stack = ship_slab::<$n>();
                        let heap = ship_slab_boxed::<$n>();
                        assert_eq!(&stack.fill[..3], &LEVEL_MARKS);
                        assert_eq!(stack, *heap, "paths diverged at {}", size.label());
                    }};
                }
                with_slab_size!(size, compare_paths);
            }
        })
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_off_ladder_sizes_are_rejected_before_dispatch() {
    for size in [0, 512, 3000, (1 << 20) + 1, 1 << 21] {
        match PayloadSize::new(size) {
            Err(CallcostError::UnsupportedSize { size: got, .. }) => assert_eq!(got, size),
            other => panic!("size {} should be rejected, got {:?}", size, other),
        }
    }
}

#[test]
fn test_ladder_matches_exported_constant() {
    let sweep: Vec<usize> = PayloadSize::ladder().map(|s| s.bytes()).collect();
    assert_eq!(sweep, SIZE_LADDER);
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Dynamically sized payload: a struct wrapping a heap buffer.
//!
//! Moving a `Parcel` by value moves only the `Vec` header, so the stack path
//! here measures repeated small header copies on top of one buffer
//! allocation, while the heap path boxes the struct itself and moves a single
//! pointer through the outer levels.
//!
//! Three-level nesting models a repository/service/transport layering purely
//! to multiply the number of boundary events per timed iteration. Each level
//! writes a distinct byte offset so the optimizer cannot treat any
//! intermediate value as dead.

use crate::size::PayloadSize;

/// Variable-length synthetic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    pub data: Vec<u8>,
}

impl Parcel {
    /// Zero-filled parcel of a ladder size.
    pub fn zeroed(size: PayloadSize) -> Self {
        Self {
            data: vec![0u8; size.bytes()],
        }
    }
}

/// Inner constructor: allocates the buffer and marks offset 0.
#[inline(never)]
pub fn fetch_parcel(size: PayloadSize) -> Parcel {
    let mut p = Parcel::zeroed(size);
    p.data[0] = 1;
    p
}

/// Middle level: marks offset 1.
#[inline(never)]
pub fn wrap_parcel(size: PayloadSize) -> Parcel {
    let mut p = fetch_parcel(size);
    p.data[1] = 2;
    p
}

/// Outer level: marks offset 2. This is what the harness times.
#[inline(never)]
pub fn ship_parcel(size: PayloadSize) -> Parcel {
    let mut p = wrap_parcel(size);
    p.data[2] = 3;
    p
}

/// Inner constructor: one boxed allocation, marks offset 0.
#[inline(never)]
pub fn fetch_parcel_boxed(size: PayloadSize) -> Box<Parcel> {
    let mut p = Box::new(Parcel::zeroed(size));
    p.data[0] = 1;
    p
}

/// Middle level: marks offset 1, moves the pointer.
#[inline(never)]
pub fn wrap_parcel_boxed(size: PayloadSize) -> Box<Parcel> {
    let mut p = fetch_parcel_boxed(size);
    p.data[1] = 2;
    p
}

/// Outer level: marks offset 2. This is what the harness times.
#[inline(never)]
pub fn ship_parcel_boxed(size: PayloadSize) -> Box<Parcel> {
    let mut p = wrap_parcel_boxed(size);
    p.data[2] = 3;
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smallest() -> PayloadSize {
        PayloadSize::new(1 << 10).unwrap()
    }

    #[test]
    fn test_stack_chain_marks_three_offsets() {
        let p = ship_parcel(smallest());
        assert_eq!(&p.data[..3], &[1, 2, 3]);
        assert!(p.data[3..].iter().all(|&b| b == 0));
        assert_eq!(p.data.len(), 1 << 10);
    }

    #[test]
    fn test_heap_chain_marks_three_offsets() {
        let p = ship_parcel_boxed(smallest());
        assert_eq!(&p.data[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_paths_agree_across_ladder() {
        for size in PayloadSize::ladder().take(4) {
            assert_eq!(ship_parcel(size), *ship_parcel_boxed(size));
        }
    }
}

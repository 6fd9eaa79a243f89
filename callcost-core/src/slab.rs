// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Fixed-size byte-array payload family.
//!
//! One concrete `Slab<N>` shape per ladder size. Unlike [`crate::parcel`],
//! the bytes live inline, so the stack path pays a genuine N-byte copy at
//! every non-inlined boundary while the heap path pays one allocation and
//! then moves a pointer.
//!
//! Monomorphization replaces the original closed type switch: callers that
//! start from a runtime size select the concrete shape through
//! [`with_slab_size!`](crate::with_slab_size), whose fallback arm is a
//! programming-error panic - ladder membership is supposed to have been
//! checked by [`PayloadSize`](crate::size::PayloadSize) already.

/// Fixed-size synthetic payload. `N` must be a ladder size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab<const N: usize> {
    pub fill: [u8; N],
}

impl<const N: usize> Slab<N> {
    /// Zero-filled slab.
    pub fn zeroed() -> Self {
        Self { fill: [0u8; N] }
    }
}

/// Inner constructor: builds the slab in its own frame and marks offset 0.
#[inline(never)]
pub fn fetch_slab<const N: usize>() -> Slab<N> {
    let mut s = Slab::zeroed();
    s.fill[0] = 1;
    s
}

/// Middle level: marks offset 1, returns by value.
#[inline(never)]
pub fn wrap_slab<const N: usize>() -> Slab<N> {
    let mut s = fetch_slab::<N>();
    s.fill[1] = 2;
    s
}

/// Outer level: marks offset 2. This is what the harness times.
#[inline(never)]
pub fn ship_slab<const N: usize>() -> Slab<N> {
    let mut s = wrap_slab::<N>();
    s.fill[2] = 3;
    s
}

/// Inner constructor: one boxed allocation, marks offset 0.
#[inline(never)]
pub fn fetch_slab_boxed<const N: usize>() -> Box<Slab<N>> {
    let mut s = Box::new(Slab::zeroed());
    s.fill[0] = 1;
    s
}

/// Middle level: marks offset 1, moves the pointer.
#[inline(never)]
pub fn wrap_slab_boxed<const N: usize>() -> Box<Slab<N>> {
    let mut s = fetch_slab_boxed::<N>();
    s.fill[1] = 2;
    s
}

/// Outer level: marks offset 2. This is what the harness times.
#[inline(never)]
pub fn ship_slab_boxed<const N: usize>() -> Box<Slab<N>> {
    let mut s = wrap_slab_boxed::<N>();
    s.fill[2] = 3;
    s
}

/// Dispatch a runtime [`PayloadSize`](crate::size::PayloadSize) to the
/// concrete `Slab<N>` monomorphization.
///
/// The caller supplies a local macro that receives the size as a literal:
///
/// ```
/// use callcost_core::{ship_slab, with_slab_size, PayloadSize};
///
/// let size = PayloadSize::new(4096).unwrap();
/// macro_rules! probe_offset_two {
///     ($n:literal) => {
///         ship_slab::<$n>().fill[2]
///     };
/// }
/// assert_eq!(with_slab_size!(size, probe_offset_two), 3);
/// ```
#[macro_export]
macro_rules! with_slab_size {
    ($size:expr, $body:ident) => {
        match $size.bytes() {
            1024 => $body!(1024),
            2048 => $body!(2048),
            4096 => $body!(4096),
            8192 => $body!(8192),
            16384 => $body!(16384),
            32768 => $body!(32768),
            65536 => $body!(65536),
            131072 => $body!(131072),
            262144 => $body!(262144),
            524288 => $body!(524288),
            1048576 => $body!(1048576),
            other => panic!("no Slab shape for {} bytes", other),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::PayloadSize;

    #[test]
    fn test_stack_chain_marks_three_offsets() {
        let s = ship_slab::<1024>();
        assert_eq!(&s.fill[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_heap_chain_marks_three_offsets() {
        let s = ship_slab_boxed::<1024>();
        assert_eq!(&s.fill[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_dispatch_covers_whole_ladder() {
        // Three by-value frames of the 1 MiB shape overflow the default test
        // thread stack, so run the sweep on a thread with room to spare.
        std::thread::Builder::new()
            .stack_size(32 << 20)
            .spawn(|| {
                for size in PayloadSize::ladder() {
                    macro_rules! probe {
                        ($n:literal) => {{
                            let s = ship_slab::<$n>();
                            (s.fill.len(), s.fill[0], s.fill[1], s.fill[2])
                        }};
                    }
                    let (len, a, b, c) = with_slab_size!(size, probe);
                    assert_eq!(len, size.bytes());
                    assert_eq!((a, b, c), (1, 2, 3));
                }
            })
            .unwrap()
            .join()
            .unwrap();
    }
}

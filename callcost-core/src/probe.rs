// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Small fixed-shape payload: two integer fields, 16 bytes.
//!
//! The baseline suite. Copying a `Probe` across a call boundary is almost
//! free, so this pair mostly measures the cost of the heap path's single
//! `Box` allocation.
//!
//! Both chains are three calls deep (`ship` -> `wrap` -> `fetch`) and every
//! level is `#[inline(never)]` so each boundary survives optimization. Each
//! level mutates the payload so no intermediate value is dead.

/// Small synthetic payload with no size variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub seq: u64,
    pub width: u64,
}

/// Inner constructor: builds the probe on the stack path.
#[inline(never)]
pub fn fetch_probe() -> Probe {
    Probe { seq: 50, width: 0 }
}

/// Middle level: bumps `seq`, returns by value.
#[inline(never)]
pub fn wrap_probe() -> Probe {
    let mut p = fetch_probe();
    p.seq += 1;
    p
}

/// Outer level: the entry point the harness times.
#[inline(never)]
pub fn ship_probe() -> Probe {
    let mut p = wrap_probe();
    p.width += 1;
    p
}

/// Inner constructor: allocates the probe once.
#[inline(never)]
pub fn fetch_probe_boxed() -> Box<Probe> {
    Box::new(Probe { seq: 50, width: 0 })
}

/// Middle level: bumps `seq`, moves only the pointer.
#[inline(never)]
pub fn wrap_probe_boxed() -> Box<Probe> {
    let mut p = fetch_probe_boxed();
    p.seq += 1;
    p
}

/// Outer level: the entry point the harness times.
#[inline(never)]
pub fn ship_probe_boxed() -> Box<Probe> {
    let mut p = wrap_probe_boxed();
    p.width += 1;
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_chain_applies_all_levels() {
        let p = ship_probe();
        assert_eq!(p, Probe { seq: 51, width: 1 });
    }

    #[test]
    fn test_both_paths_agree() {
        let stack = ship_probe();
        let heap = ship_probe_boxed();
        assert_eq!(stack, *heap);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Callcost Core Library
//!
//! Synthetic payloads and the non-inlined call chains whose return-path cost
//! the `callcost-benchmark` package measures. Three payload families:
//!
//! - [`probe`]: small fixed-shape struct, no size variation
//! - [`parcel`]: struct wrapping a variable-length heap buffer
//! - [`slab`]: fixed-size inline byte arrays, one shape per ladder size
//!
//! Each family exposes a stack path (by-value returns, a full copy at every
//! boundary) and a heap path (one `Box` allocation, pointer moves after
//! that). Every chain function is `#[inline(never)]`; the benchmarks measure
//! call boundaries, not inlined straight-line code.

pub mod error;
pub mod parcel;
pub mod probe;
pub mod size;
pub mod slab;

// Re-export commonly used types
pub use error::{CallcostError, CallcostResult};
pub use parcel::{ship_parcel, ship_parcel_boxed, Parcel};
pub use probe::{ship_probe, ship_probe_boxed, Probe};
pub use size::{PayloadSize, MAX_PAYLOAD, MIN_PAYLOAD, SIZE_LADDER};
pub use slab::{ship_slab, ship_slab_boxed, Slab};

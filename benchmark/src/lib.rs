// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Callcost Benchmarking Framework
//!
//! Measures the cost of returning payloads by value ("stack path") versus
//! behind a single heap allocation ("heap path") across the non-inlined call
//! chains in `callcost-core`.
//!
//! # Suites
//!
//! - **small_struct**: 16-byte two-field struct, no size sweep
//! - **dynamic_buffer**: heap-buffer-backed struct across the size ladder
//! - **fixed_array**: inline byte arrays across the size ladder
//!
//! The Criterion benches under `benches/` are the interactive surface; the
//! `run_benchmarks` binary produces JSON reports and can verify the
//! stack-vs-heap trend with `--check`.

pub mod harness;
pub mod metrics;
pub mod reporter;
pub mod trend;

pub use harness::Harness;
pub use metrics::{
    BenchmarkReport, BenchmarkResult, LatencyMetrics, ReturnPath, Suite, SystemInfo,
    ThroughputMetrics,
};
pub use reporter::JsonReporter;
pub use trend::{SizePair, TrendCheck, TrendError};

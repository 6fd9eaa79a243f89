// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Relative stack-vs-heap trend check.
//!
//! The suites have no absolute correctness property; the one verifiable
//! claim is relative: once the payload is large enough that copy cost
//! dominates allocation cost, the heap path's mean time per operation must
//! not exceed the stack path's. This is a regression probe for `--check`
//! runs, deliberately not a `#[test]` - it depends on the host.

use callcost_core::PayloadSize;
use thiserror::Error;

use crate::metrics::{BenchmarkReport, ReturnPath, Suite};

/// Default size at which copy cost is assumed to dominate allocation cost.
pub const DEFAULT_CROSSOVER: usize = 64 << 10;
/// Default slack factor applied to the stack mean.
pub const DEFAULT_TOLERANCE: f64 = 1.10;

/// Mean latencies for one payload size, both paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SizePair {
    pub size: PayloadSize,
    pub stack_mean_ns: f64,
    pub heap_mean_ns: f64,
}

impl SizePair {
    /// Heap mean as a fraction of the stack mean.
    pub fn ratio(&self) -> f64 {
        if self.stack_mean_ns > 0.0 {
            self.heap_mean_ns / self.stack_mean_ns
        } else {
            f64::INFINITY
        }
    }
}

/// Trend check failure: every size where the heap path was too slow.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("heap path slower than stack path above {crossover} bytes: {}", format_violations(.violations))]
    HeapSlowerAboveCrossover {
        crossover: usize,
        violations: Vec<SizePair>,
    },

    #[error("report has no stack/heap pair for suite {suite} at {size}")]
    MissingPair { suite: Suite, size: String },
}

fn format_violations(violations: &[SizePair]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({:.2}x)", v.size.label(), v.ratio()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configurable heap-vs-stack trend verification.
#[derive(Debug, Clone)]
pub struct TrendCheck {
    /// Sizes below this many bytes are exempt
    crossover: usize,
    /// Heap mean may be up to tolerance * stack mean
    tolerance: f64,
}

impl TrendCheck {
    pub fn new(crossover: usize, tolerance: f64) -> Self {
        Self {
            crossover,
            tolerance,
        }
    }

    /// Verify the trend over explicit per-size pairs.
    pub fn verify(&self, pairs: &[SizePair]) -> Result<(), TrendError> {
        let violations: Vec<SizePair> = pairs
            .iter()
            .filter(|p| p.size.bytes() >= self.crossover)
            .filter(|p| p.heap_mean_ns > p.stack_mean_ns * self.tolerance)
            .cloned()
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(TrendError::HeapSlowerAboveCrossover {
                crossover: self.crossover,
                violations,
            })
        }
    }

    /// Extract per-size pairs for one suite from a report and verify them.
    pub fn verify_report(&self, report: &BenchmarkReport, suite: Suite) -> Result<(), TrendError> {
        self.verify(&pairs_from_report(report, suite)?)
    }
}

impl Default for TrendCheck {
    fn default() -> Self {
        Self::new(DEFAULT_CROSSOVER, DEFAULT_TOLERANCE)
    }
}

/// Match up stack and heap results by payload size for one suite.
pub fn pairs_from_report(
    report: &BenchmarkReport,
    suite: Suite,
) -> Result<Vec<SizePair>, TrendError> {
    let heap_results = report.results_for(suite, ReturnPath::Heap);
    let mut pairs = Vec::new();

    for stack in report.results_for(suite, ReturnPath::Stack) {
        let Some(size) = stack.payload_size else {
            continue;
        };
        let heap = heap_results
            .iter()
            .find(|r| r.payload_size == Some(size))
            .ok_or_else(|| TrendError::MissingPair {
                suite,
                size: size.label(),
            })?;

        match (stack.mean_ns(), heap.mean_ns()) {
            (Some(stack_mean_ns), Some(heap_mean_ns)) => pairs.push(SizePair {
                size,
                stack_mean_ns,
                heap_mean_ns,
            }),
            _ => {
                return Err(TrendError::MissingPair {
                    suite,
                    size: size.label(),
                })
            }
        }
    }

    Ok(pairs)
}

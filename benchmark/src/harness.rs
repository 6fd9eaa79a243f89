// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Timing harness for the CLI runner.
//!
//! The Criterion suites bring their own harness; this one backs
//! `run_benchmarks`, which wants raw nanosecond samples it can feed into
//! [`crate::metrics::LatencyMetrics`] and the trend check. Quick runs use
//! [`Harness::run_throughput`] instead: a duration-bounded loop that trades
//! per-iteration samples for a fast operations-per-window count.
//!
//! Callers are responsible for sinking whatever the timed closure produces
//! through `std::hint::black_box`; the harness only times.

use std::time::{Duration, Instant};

/// Collects per-iteration latency samples for one operation.
pub struct Harness {
    /// Untimed iterations before measurement begins
    warmup_iterations: u64,
    /// Timed iterations
    measurement_iterations: u64,
    /// Whether raw samples should be attached to results
    keep_raw_samples: bool,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            warmup_iterations: 20,
            measurement_iterations: 200,
            keep_raw_samples: true,
        }
    }

    /// Set the number of warmup iterations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the number of measurement iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    /// Set whether raw sample data is kept on results.
    pub fn keep_samples(mut self, keep: bool) -> Self {
        self.keep_raw_samples = keep;
        self
    }

    pub fn should_keep_samples(&self) -> bool {
        self.keep_raw_samples
    }

    /// Time one operation. Returns one nanosecond sample per iteration.
    pub fn run<F>(&self, mut operation: F) -> Vec<u64>
    where
        F: FnMut(),
    {
        for _ in 0..self.warmup_iterations {
            operation();
        }
        measure_n(self.measurement_iterations, operation)
    }

    /// Time a stack-path and a heap-path operation under identical settings.
    ///
    /// The two closures run back to back in the same process state so the
    /// pair is comparable; returns `(stack_samples, heap_samples)`.
    pub fn run_pair<S, H>(&self, stack_op: S, heap_op: H) -> (Vec<u64>, Vec<u64>)
    where
        S: FnMut(),
        H: FnMut(),
    {
        (self.run(stack_op), self.run(heap_op))
    }

    /// Run an operation repeatedly for (at least) a wall-clock window.
    ///
    /// Returns `(operations, elapsed_ns)`. The warmup setting applies; the
    /// iteration setting does not, since the window decides when to stop.
    pub fn run_throughput<F>(&self, window: Duration, mut operation: F) -> (u64, u64)
    where
        F: FnMut(),
    {
        for _ in 0..self.warmup_iterations {
            operation();
        }

        let start = Instant::now();
        let mut operations = 0u64;
        while start.elapsed() < window {
            operation();
            operations += 1;
        }
        (operations, start.elapsed().as_nanos() as u64)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure a single closure invocation.
pub fn measure<F, T>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_nanos() as u64)
}

/// Measure `iterations` executions and return one sample per run.
pub fn measure_n<F>(iterations: u64, mut f: F) -> Vec<u64>
where
    F: FnMut(),
{
    let mut samples = Vec::with_capacity(iterations as usize);
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        samples.push(start.elapsed().as_nanos() as u64);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_harness_sample_count() {
        let harness = Harness::new().warmup(2).iterations(15);
        let samples = harness.run(|| {
            thread::sleep(Duration::from_micros(100));
        });

        assert_eq!(samples.len(), 15);
        for sample in &samples {
            assert!(*sample >= 100_000, "sample {} < 100us", sample);
        }
    }

    #[test]
    fn test_run_pair_lengths_match() {
        let harness = Harness::new().warmup(0).iterations(8);
        let (stack, heap) = harness.run_pair(|| {}, || {});
        assert_eq!(stack.len(), heap.len());
    }

    #[test]
    fn test_run_throughput_fills_the_window() {
        let harness = Harness::new().warmup(1);
        let (ops, elapsed_ns) = harness.run_throughput(Duration::from_millis(20), || {
            thread::sleep(Duration::from_millis(1));
        });

        assert!(ops >= 1, "window admitted no operations");
        assert!(ops <= 40, "ops {} exceed what 1ms sleeps allow", ops);
        assert!(elapsed_ns >= 20_000_000, "stopped before the window closed");
    }

    #[test]
    fn test_measure_returns_result() {
        let (result, ns) = measure(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(result, 42);
        assert!(ns >= 5_000_000);
    }

    #[test]
    fn test_measure_n_sample_count() {
        let samples = measure_n(10, || {
            thread::sleep(Duration::from_micros(50));
        });
        assert_eq!(samples.len(), 10);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Result and report types for callcost measurements.
//!
//! Every result is tagged with its suite, its return path, and (for the
//! size-swept suites) the payload size, so a report can be regrouped into
//! stack/heap pairs for the trend check and for plotting scaling curves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use sysinfo::System;

use callcost_core::PayloadSize;

/// The three benchmark suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    /// Two-field 16-byte struct, no size sweep
    SmallStruct,
    /// Struct wrapping a variable-length heap buffer
    DynamicBuffer,
    /// Fixed-size inline byte arrays, one shape per ladder size
    FixedArray,
}

impl Suite {
    pub const ALL: [Suite; 3] = [Suite::SmallStruct, Suite::DynamicBuffer, Suite::FixedArray];
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suite::SmallStruct => write!(f, "small_struct"),
            Suite::DynamicBuffer => write!(f, "dynamic_buffer"),
            Suite::FixedArray => write!(f, "fixed_array"),
        }
    }
}

/// Which return convention a result measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnPath {
    /// By-value returns: a full copy at every call boundary
    Stack,
    /// One boxed allocation, pointer moves after that
    Heap,
}

impl std::fmt::Display for ReturnPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnPath::Stack => write!(f, "stack"),
            ReturnPath::Heap => write!(f, "heap"),
        }
    }
}

/// Latency distribution over one timed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyMetrics {
    pub min_ns: u64,
    pub max_ns: u64,
    pub mean_ns: f64,
    pub median_ns: u64,
    pub p95_ns: u64,
    pub p99_ns: u64,
    pub std_dev_ns: f64,
    /// Raw samples for plotting; downsampled when large
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<u64>>,
}

impl LatencyMetrics {
    /// Calculate the distribution from nanosecond samples.
    pub fn from_samples(mut samples: Vec<u64>, keep_raw: bool) -> Self {
        if samples.is_empty() {
            return Self {
                min_ns: 0,
                max_ns: 0,
                mean_ns: 0.0,
                median_ns: 0,
                p95_ns: 0,
                p99_ns: 0,
                std_dev_ns: 0.0,
                samples: None,
            };
        }

        samples.sort_unstable();
        let len = samples.len();
        let percentile = |q: f64| samples[((len as f64 * q) as usize).min(len - 1)];

        let sum: u64 = samples.iter().sum();
        let mean_ns = sum as f64 / len as f64;
        let variance: f64 = samples
            .iter()
            .map(|&x| {
                let diff = x as f64 - mean_ns;
                diff * diff
            })
            .sum::<f64>()
            / len as f64;

        let raw_samples = if keep_raw {
            if len > 10_000 {
                Some(samples.iter().step_by(len / 1000).copied().collect())
            } else {
                Some(samples.clone())
            }
        } else {
            None
        };

        Self {
            min_ns: samples[0],
            max_ns: samples[len - 1],
            mean_ns,
            median_ns: samples[len / 2],
            p95_ns: percentile(0.95),
            p99_ns: percentile(0.99),
            std_dev_ns: variance.sqrt(),
            samples: raw_samples,
        }
    }

    /// Human-readable latency (auto-selects ns/us/ms/s).
    pub fn format_latency(ns: f64) -> String {
        if ns < 1_000.0 {
            format!("{:.0}ns", ns)
        } else if ns < 1_000_000.0 {
            format!("{:.2}us", ns / 1_000.0)
        } else if ns < 1_000_000_000.0 {
            format!("{:.2}ms", ns / 1_000_000.0)
        } else {
            format!("{:.2}s", ns / 1_000_000_000.0)
        }
    }
}

/// Payload bytes moved per unit time, derived from the mean latency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputMetrics {
    /// Payload bytes handled by one chain invocation
    pub bytes_per_op: u64,
    /// Chain invocations per second
    pub ops_per_sec: f64,
    /// Payload bytes per second
    pub bytes_per_sec: f64,
}

impl ThroughputMetrics {
    pub fn from_mean_latency(bytes_per_op: u64, mean_ns: f64) -> Self {
        let ops_per_sec = if mean_ns > 0.0 {
            1_000_000_000.0 / mean_ns
        } else {
            0.0
        };
        Self {
            bytes_per_op,
            ops_per_sec,
            bytes_per_sec: ops_per_sec * bytes_per_op as f64,
        }
    }

    /// Throughput from a duration-bounded run: ops completed in a window.
    pub fn from_ops(bytes_per_op: u64, ops: u64, elapsed_ns: u64) -> Self {
        let secs = elapsed_ns as f64 / 1_000_000_000.0;
        let ops_per_sec = if secs > 0.0 { ops as f64 / secs } else { 0.0 };
        Self {
            bytes_per_op,
            ops_per_sec,
            bytes_per_sec: ops_per_sec * bytes_per_op as f64,
        }
    }

    /// Human-readable byte rate.
    pub fn format_bytes_per_sec(bps: f64) -> String {
        if bps < 1_000.0 {
            format!("{:.2} B/s", bps)
        } else if bps < 1_000_000.0 {
            format!("{:.2} KB/s", bps / 1_000.0)
        } else if bps < 1_000_000_000.0 {
            format!("{:.2} MB/s", bps / 1_000_000.0)
        } else {
            format!("{:.2} GB/s", bps / 1_000_000_000.0)
        }
    }
}

/// Host description captured at report time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub kernel_version: Option<String>,
    pub cpu_model: String,
    pub cpu_cores: usize,
    pub memory_bytes: u64,
    pub hostname: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// One measured (suite, path, size) cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub suite: Suite,
    pub path: ReturnPath,
    /// Payload size for the size-swept suites; absent for `small_struct`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_size: Option<PayloadSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<LatencyMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<ThroughputMetrics>,
    pub iterations: u64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    /// Build a result from raw latency samples.
    pub fn from_samples(
        suite: Suite,
        path: ReturnPath,
        payload_size: Option<PayloadSize>,
        samples: Vec<u64>,
        keep_raw_samples: bool,
    ) -> Self {
        let iterations = samples.len() as u64;
        let latency = LatencyMetrics::from_samples(samples, keep_raw_samples);
        let throughput = payload_size
            .map(|size| ThroughputMetrics::from_mean_latency(size.bytes() as u64, latency.mean_ns));

        let name = match payload_size {
            Some(size) => format!("{}_{}_{}", suite, path, size.label()),
            None => format!("{}_{}", suite, path),
        };

        Self {
            name,
            suite,
            path,
            payload_size,
            latency: Some(latency),
            throughput,
            iterations,
            metadata: HashMap::new(),
        }
    }

    /// Build a result from a duration-bounded throughput run.
    ///
    /// No latency distribution is recorded; the mean is recoverable from the
    /// ops rate via [`BenchmarkResult::mean_ns`].
    pub fn from_throughput(
        suite: Suite,
        path: ReturnPath,
        payload_size: Option<PayloadSize>,
        bytes_per_op: u64,
        ops: u64,
        elapsed_ns: u64,
    ) -> Self {
        let name = match payload_size {
            Some(size) => format!("{}_{}_{}", suite, path, size.label()),
            None => format!("{}_{}", suite, path),
        };

        Self {
            name,
            suite,
            path,
            payload_size,
            latency: None,
            throughput: Some(ThroughputMetrics::from_ops(bytes_per_op, ops, elapsed_ns)),
            iterations: ops,
            metadata: HashMap::new(),
        }
    }

    /// Attach arbitrary metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), value);
        }
        self
    }

    /// Mean latency in nanoseconds: recorded directly, or derived from the
    /// ops rate for duration-bounded results.
    pub fn mean_ns(&self) -> Option<f64> {
        if let Some(latency) = &self.latency {
            return Some(latency.mean_ns);
        }
        self.throughput
            .as_ref()
            .filter(|t| t.ops_per_sec > 0.0)
            .map(|t| 1_000_000_000.0 / t.ops_per_sec)
    }
}

/// Complete run: host info plus every result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub benchmark_suite: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    pub fn new() -> Self {
        Self {
            benchmark_suite: "callcost".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Results belonging to one suite and path, in insertion order.
    pub fn results_for(&self, suite: Suite, path: ReturnPath) -> Vec<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.suite == suite && r.path == path)
            .collect()
    }
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! CLI runner: times every suite, writes a JSON report, and optionally
//! verifies the stack-vs-heap trend.
//!
//! Normal runs collect per-iteration latency samples; `--quick` runs each
//! operation for a short wall-clock window instead and records the ops rate.

use std::hint::black_box;
use std::mem::size_of;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use callcost_benchmark::harness::measure;
use callcost_benchmark::{
    BenchmarkReport, BenchmarkResult, Harness, JsonReporter, LatencyMetrics, ReturnPath, Suite,
    ThroughputMetrics, TrendCheck,
};
use callcost_core::{
    parcel, probe, ship_slab, ship_slab_boxed, with_slab_size, PayloadSize, Probe,
};

/// Wall-clock window per operation in quick mode.
const QUICK_WINDOW: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Run callcost benchmarks and generate JSON reports")]
struct Args {
    /// Output directory for benchmark data (defaults to the package data/ directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of measurement iterations per benchmark
    #[arg(short, long, default_value_t = 200)]
    iterations: u64,

    /// Suites to run (all if not specified): small_struct, dynamic_buffer, fixed_array
    #[arg(short, long)]
    suite: Option<Vec<String>>,

    /// Quick mode: duration-bounded runs instead of per-iteration samples
    #[arg(long)]
    quick: bool,

    /// Verify that the heap path beats the stack path above the crossover size
    #[arg(long)]
    check: bool,

    /// Trend check crossover in KiB
    #[arg(long, default_value_t = 64)]
    crossover_kib: usize,

    /// Trend check tolerance (heap mean may be up to tolerance * stack mean)
    #[arg(long, default_value_t = 1.10)]
    tolerance: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let reporter = match &args.output {
        Some(dir) => JsonReporter::new(dir)?,
        None => JsonReporter::default_location()?,
    };
    let harness = Harness::new()
        .warmup(args.iterations / 10)
        .iterations(args.iterations);
    let window = args.quick.then_some(QUICK_WINDOW);
    let mut report = BenchmarkReport::new();

    let run_all = args.suite.is_none();
    let wanted = args.suite.unwrap_or_default();
    let should_run = |suite: Suite| -> bool {
        run_all || wanted.iter().any(|s| s.eq_ignore_ascii_case(&suite.to_string()))
    };

    tracing::info!(iterations = args.iterations, quick = args.quick, "starting benchmark run");

    for suite in Suite::ALL {
        if !should_run(suite) {
            continue;
        }
        let (_, elapsed_ns) = measure(|| match suite {
            Suite::SmallStruct => run_small_struct(&mut report, &harness, window),
            Suite::DynamicBuffer => run_dynamic_buffer(&mut report, &harness, window),
            Suite::FixedArray => run_fixed_array(&mut report, &harness, window),
        });
        tracing::info!(
            suite = %suite,
            elapsed_ms = elapsed_ns / 1_000_000,
            "suite finished"
        );
    }

    let path = reporter.save(&report)?;
    tracing::info!(path = %path.display(), results = report.results.len(), "report saved");

    print_summary(&report);

    if args.check {
        let check = TrendCheck::new(args.crossover_kib << 10, args.tolerance);
        for suite in [Suite::DynamicBuffer, Suite::FixedArray] {
            if report.results_for(suite, ReturnPath::Stack).is_empty() {
                continue;
            }
            check.verify_report(&report, suite)?;
            tracing::info!(suite = %suite, "trend check passed");
        }
    }

    Ok(())
}

/// Measure one stack/heap operation pair and record both results.
///
/// Sample mode collects per-iteration latencies; with a `window`, each
/// operation instead runs duration-bounded and only the ops rate is kept.
fn record_pair<S, H>(
    report: &mut BenchmarkReport,
    harness: &Harness,
    window: Option<Duration>,
    suite: Suite,
    payload_size: Option<PayloadSize>,
    bytes_per_op: u64,
    stack_op: S,
    heap_op: H,
) where
    S: FnMut(),
    H: FnMut(),
{
    match window {
        None => {
            let (stack, heap) = harness.run_pair(stack_op, heap_op);
            let keep = harness.should_keep_samples();
            report.add_result(BenchmarkResult::from_samples(
                suite,
                ReturnPath::Stack,
                payload_size,
                stack,
                keep,
            ));
            report.add_result(BenchmarkResult::from_samples(
                suite,
                ReturnPath::Heap,
                payload_size,
                heap,
                keep,
            ));
        }
        Some(window) => {
            let (ops, elapsed_ns) = harness.run_throughput(window, stack_op);
            report.add_result(BenchmarkResult::from_throughput(
                suite,
                ReturnPath::Stack,
                payload_size,
                bytes_per_op,
                ops,
                elapsed_ns,
            ));
            let (ops, elapsed_ns) = harness.run_throughput(window, heap_op);
            report.add_result(BenchmarkResult::from_throughput(
                suite,
                ReturnPath::Heap,
                payload_size,
                bytes_per_op,
                ops,
                elapsed_ns,
            ));
        }
    }
}

fn run_small_struct(report: &mut BenchmarkReport, harness: &Harness, window: Option<Duration>) {
    record_pair(
        report,
        harness,
        window,
        Suite::SmallStruct,
        None,
        size_of::<Probe>() as u64,
        || {
            black_box(probe::ship_probe());
        },
        || {
            black_box(probe::ship_probe_boxed());
        },
    );
}

fn run_dynamic_buffer(report: &mut BenchmarkReport, harness: &Harness, window: Option<Duration>) {
    for size in PayloadSize::ladder() {
        record_pair(
            report,
            harness,
            window,
            Suite::DynamicBuffer,
            Some(size),
            size.bytes() as u64,
            || {
                black_box(parcel::ship_parcel(size));
            },
            || {
                black_box(parcel::ship_parcel_boxed(size));
            },
        );
        tracing::debug!(size = %size.label(), "dynamic_buffer pair measured");
    }
}

fn run_fixed_array(report: &mut BenchmarkReport, harness: &Harness, window: Option<Duration>) {
    for size in PayloadSize::ladder() {
        macro_rules! record_slab_pair {
            ($n:literal) => {
                record_pair(
                    report,
                    harness,
                    window,
                    Suite::FixedArray,
                    Some(size),
                    size.bytes() as u64,
                    || {
                        black_box(ship_slab::<$n>());
                    },
                    || {
                        black_box(ship_slab_boxed::<$n>());
                    },
                )
            };
        }
        with_slab_size!(size, record_slab_pair);
        tracing::debug!(size = %size.label(), "fixed_array pair measured");
    }
}

fn print_summary(report: &BenchmarkReport) {
    println!();
    println!("Summary");
    println!("-------");

    for result in &report.results {
        if let Some(latency) = &result.latency {
            println!(
                "{}: mean={}, p99={}",
                result.name,
                LatencyMetrics::format_latency(latency.mean_ns),
                LatencyMetrics::format_latency(latency.p99_ns as f64),
            );
        } else if let Some(throughput) = &result.throughput {
            println!(
                "{}: ops/sec={:.0}, {}",
                result.name,
                throughput.ops_per_sec,
                ThroughputMetrics::format_bytes_per_sec(throughput.bytes_per_sec),
            );
        }
    }
}

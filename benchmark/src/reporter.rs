// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! JSON persistence for benchmark reports.
//!
//! Reports land as timestamped pretty-JSON files so successive runs can be
//! compared or plotted later.

use crate::metrics::BenchmarkReport;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing or reading reports.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to access report directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Writes benchmark reports to an output directory.
pub struct JsonReporter {
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Reporter rooted at the package's `data/` directory.
    pub fn default_location() -> Result<Self, ReporterError> {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        Self::new(Path::new(manifest_dir).join("data"))
    }

    /// Save a report as `callcost_<timestamp>.json`; returns the file path.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%SZ");
        let filename = format!("{}_{}.json", report.benchmark_suite, timestamp);
        let filepath = self.output_dir.join(filename);

        let file = File::create(&filepath)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, report)?;

        Ok(filepath)
    }

    /// All existing report files in the output directory, sorted by name
    /// (which sorts by timestamp given the naming scheme).
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReporterError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load a previously saved report.
    pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReporterError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Custom error types for callcost.
//!
//! Explicit enum error types only - no `Box<dyn Error>`, no `anyhow::Result`
//! in library code.

use thiserror::Error;

/// Top-level error type for the callcost libraries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallcostError {
    #[error("Unsupported payload size: {size} bytes (supported: powers of two from {min} to {max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    #[error("Invalid size label: {label:?}")]
    InvalidSizeLabel { label: String },
}

/// Result type alias using CallcostError.
pub type CallcostResult<T> = Result<T, CallcostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_size_display() {
        let err = CallcostError::UnsupportedSize {
            size: 3000,
            min: 1024,
            max: 1024 * 1024,
        };
        assert!(err.to_string().contains("3000"));
        assert!(err.to_string().contains("1024"));
    }
}

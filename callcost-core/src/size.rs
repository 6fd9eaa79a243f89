// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Callcost Contributors

//! Validated payload sizes.
//!
//! Both size-swept suites share one geometric ladder: 1 KiB to 1 MiB,
//! doubling. `PayloadSize` follows the newtype pattern - ladder membership is
//! checked at construction, so everything downstream can index bytes 0..2 and
//! dispatch over a closed set without re-validating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CallcostError, CallcostResult};

/// Smallest payload in the ladder: 1 KiB.
pub const MIN_PAYLOAD: usize = 1 << 10;
/// Largest payload in the ladder: 1 MiB.
pub const MAX_PAYLOAD: usize = 1 << 20;

/// The geometric size ladder shared by the `Parcel` and `Slab` suites.
pub const SIZE_LADDER: [usize; 11] = [
    1 << 10,  // 1 KiB
    2 << 10,  // 2 KiB
    4 << 10,  // 4 KiB
    8 << 10,  // 8 KiB
    16 << 10, // 16 KiB
    32 << 10, // 32 KiB
    64 << 10, // 64 KiB
    128 << 10,
    256 << 10,
    512 << 10,
    1 << 20, // 1 MiB
];

/// A payload size validated against the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayloadSize(usize);

impl PayloadSize {
    /// Create a new PayloadSize, validating ladder membership.
    pub fn new(size: usize) -> CallcostResult<Self> {
        if SIZE_LADDER.contains(&size) {
            Ok(Self(size))
        } else {
            Err(CallcostError::UnsupportedSize {
                size,
                min: MIN_PAYLOAD,
                max: MAX_PAYLOAD,
            })
        }
    }

    /// Iterate the full ladder, smallest first.
    pub fn ladder() -> impl Iterator<Item = PayloadSize> {
        SIZE_LADDER.into_iter().map(PayloadSize)
    }

    /// Size in bytes.
    pub fn bytes(self) -> usize {
        self.0
    }

    /// Short human label: "1KB" through "1MB".
    pub fn label(self) -> String {
        if self.0 >= 1 << 20 {
            format!("{}MB", self.0 >> 20)
        } else {
            format!("{}KB", self.0 >> 10)
        }
    }

    /// Parse a label produced by [`PayloadSize::label`].
    pub fn from_label(label: &str) -> CallcostResult<Self> {
        let parse = |digits: &str, shift: u32| -> Option<usize> {
            digits.parse::<usize>().ok().map(|n| n << shift)
        };
        let size = if let Some(digits) = label.strip_suffix("MB") {
            parse(digits, 20)
        } else if let Some(digits) = label.strip_suffix("KB") {
            parse(digits, 10)
        } else {
            None
        };
        match size {
            Some(size) => Self::new(size),
            None => Err(CallcostError::InvalidSizeLabel {
                label: label.to_string(),
            }),
        }
    }
}

impl fmt::Display for PayloadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for PayloadSize {
    type Error = CallcostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<PayloadSize> for String {
    fn from(size: PayloadSize) -> Self {
        size.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_doubling() {
        for pair in SIZE_LADDER.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
        assert_eq!(SIZE_LADDER[0], MIN_PAYLOAD);
        assert_eq!(SIZE_LADDER[10], MAX_PAYLOAD);
    }

    #[test]
    fn test_new_rejects_off_ladder_sizes() {
        assert!(PayloadSize::new(1 << 10).is_ok());
        assert!(PayloadSize::new(0).is_err());
        assert!(PayloadSize::new(3000).is_err());
        assert!(PayloadSize::new(2 << 20).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(PayloadSize::new(1 << 10).unwrap().label(), "1KB");
        assert_eq!(PayloadSize::new(512 << 10).unwrap().label(), "512KB");
        assert_eq!(PayloadSize::new(1 << 20).unwrap().label(), "1MB");
    }

    #[test]
    fn test_label_round_trip() {
        for size in PayloadSize::ladder() {
            assert_eq!(PayloadSize::from_label(&size.label()), Ok(size));
        }
        assert!(PayloadSize::from_label("3KB").is_err());
        assert!(PayloadSize::from_label("1GB").is_err());
        assert!(PayloadSize::from_label("fast").is_err());
    }
}

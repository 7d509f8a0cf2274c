//! Error types for array statistics.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while
//! summarizing an array: empty input, accumulator overflow, and
//! builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (e.g., the rejected width).
//! * **Deferred**: Builder errors are recorded during configuration and surfaced by `build()`.
//! * **No-std**: Only `core` formatting is used; `std::error::Error` is implemented when `std` is enabled.
//!
//! ## Invariants
//!
//! * Every reducer reports `EmptyInput` instead of reading past the end of an empty slice.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array statistics operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The array is empty; every reducer needs at least one value.
    EmptyInput,

    /// The running sum no longer fits the widened accumulator.
    SumOverflow {
        /// Number of values being summed.
        len: usize,
    },

    /// Values per line must be at least 1.
    InvalidColumns(usize),

    /// Field width must be between 1 and the maximum supported width.
    InvalidWidth(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::SumOverflow { len } => {
                write!(f, "Sum overflow: {len} values exceed the 64-bit accumulator")
            }
            Self::InvalidColumns(columns) => {
                write!(f, "Invalid columns: {columns} (must be at least 1)")
            }
            Self::InvalidWidth(width) => {
                write!(f, "Invalid width: {width} (must be in [1, 20])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StatsError {}

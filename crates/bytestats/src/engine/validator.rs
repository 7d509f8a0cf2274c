//! Validation for processor configuration and input data.
//!
//! ## Purpose
//!
//! This module checks listing parameters and input arrays before any
//! statistics are computed.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Nothing is sorted or modified here.
//!
//! ## Invariants
//!
//! * A validated listing layout has at least one column and a width in `[1, MAX_WIDTH]`.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

// Internal dependencies
use crate::primitives::errors::StatsError;

/// Widest field a listing may request.
pub const MAX_WIDTH: usize = 20;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for processor configuration and input data.
pub struct Validator;

impl Validator {
    /// Validate that an array holds at least one value.
    pub fn validate_non_empty<T>(values: &[T]) -> Result<(), StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        Ok(())
    }

    /// Validate the number of values printed per listing line.
    pub fn validate_columns(columns: usize) -> Result<(), StatsError> {
        if columns == 0 {
            return Err(StatsError::InvalidColumns(columns));
        }
        Ok(())
    }

    /// Validate the field width of a listing.
    pub fn validate_width(width: usize) -> Result<(), StatsError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(StatsError::InvalidWidth(width));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), StatsError> {
        if let Some(param) = duplicate_param {
            return Err(StatsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

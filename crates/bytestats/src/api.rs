//! High-level API for array statistics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. A fluent
//! builder configures the listing layout and the median policy, and
//! produces an [`ArrayStatsProcessor`] that sorts, lists, and summarizes
//! arrays.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults matching the classic report
//!   (width 3, 10 values per line, median sorts in place).
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Generic**: Reducers accept any unsigned primitive integer.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ArrayStatsBuilder`] via `ArrayStats::new()`.
//! 2. Chain configuration methods (`.width()`, `.columns()`, `.median_policy()`).
//! 3. Call `.build()` to get a validated [`ArrayStatsProcessor`].
//!
//! ### Median side effect
//!
//! The median is read from a sorted array. With [`MedianPolicy::SortInPlace`]
//! (the default) the caller's array is left sorted in non-increasing order.
//! With [`MedianPolicy::PreserveOrder`] a private copy is sorted instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::fmt::Display;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::reducers;

// Publicly re-exported types
pub use crate::engine::output::{ArrayListing, StatsReport, DEFAULT_COLUMNS, DEFAULT_WIDTH};
pub use crate::primitives::errors::StatsError;
pub use crate::primitives::sorting::SortOutcome;

use crate::primitives::sorting::sort_descending;

// ============================================================================
// Median Policy
// ============================================================================

/// Whether computing the median may reorder the caller's array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianPolicy {
    /// Sort the caller's array in place, then read the middle.
    #[default]
    SortInPlace,

    /// Sort a private copy; the caller's array keeps its order.
    PreserveOrder,
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an [`ArrayStatsProcessor`].
#[derive(Debug, Clone, Default)]
pub struct ArrayStatsBuilder {
    /// Field width of listed values (default: 3).
    pub width: Option<usize>,

    /// Values per listing line (default: 10).
    pub columns: Option<usize>,

    /// Median side-effect policy (default: SortInPlace).
    pub median_policy: Option<MedianPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ArrayStatsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field width of listed values.
    pub fn width(mut self, width: usize) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Set the number of values per listing line.
    pub fn columns(mut self, columns: usize) -> Self {
        if self.columns.is_some() {
            self.duplicate_param = Some("columns");
        }
        self.columns = Some(columns);
        self
    }

    /// Set whether the median may reorder the caller's array.
    pub fn median_policy(mut self, policy: MedianPolicy) -> Self {
        if self.median_policy.is_some() {
            self.duplicate_param = Some("median_policy");
        }
        self.median_policy = Some(policy);
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<ArrayStatsProcessor, StatsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        Validator::validate_width(width)?;

        let columns = self.columns.unwrap_or(DEFAULT_COLUMNS);
        Validator::validate_columns(columns)?;

        Ok(ArrayStatsProcessor {
            width,
            columns,
            median_policy: self.median_policy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Sorts, lists, and summarizes unsigned integer arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayStatsProcessor {
    width: usize,
    columns: usize,
    median_policy: MedianPolicy,
}

impl Default for ArrayStatsProcessor {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            columns: DEFAULT_COLUMNS,
            median_policy: MedianPolicy::default(),
        }
    }
}

impl ArrayStatsProcessor {
    /// Field width of listed values.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Values per listing line.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Configured median policy.
    pub fn median_policy(&self) -> MedianPolicy {
        self.median_policy
    }

    /// Sort `values` in place into non-increasing order.
    pub fn sort<T: Ord>(&self, values: &mut [T]) -> SortOutcome {
        sort_descending(values)
    }

    /// Printable listing of `values` using the configured layout.
    pub fn listing<'a, T>(&self, values: &'a [T]) -> ArrayListing<'a, T> {
        ArrayListing::new(values, self.width, self.columns)
    }

    /// Print the listing of `values` to standard output.
    #[cfg(feature = "std")]
    pub fn print<T: Display>(&self, values: &[T]) {
        println!("{}", self.listing(values));
    }

    /// Largest value.
    pub fn maximum<T: PrimInt + Unsigned>(&self, values: &[T]) -> Result<T, StatsError> {
        reducers::maximum(values)
    }

    /// Smallest value.
    pub fn minimum<T: PrimInt + Unsigned>(&self, values: &[T]) -> Result<T, StatsError> {
        reducers::minimum(values)
    }

    /// Mean, rounded half up.
    pub fn mean<T: PrimInt + Unsigned>(&self, values: &[T]) -> Result<T, StatsError> {
        reducers::mean(values)
    }

    /// Median, rounded half up for even lengths.
    ///
    /// Under [`MedianPolicy::SortInPlace`] `values` is left sorted in
    /// non-increasing order.
    pub fn median<T: PrimInt + Unsigned>(&self, values: &mut [T]) -> Result<T, StatsError> {
        match self.median_policy {
            MedianPolicy::SortInPlace => reducers::median(values),
            MedianPolicy::PreserveOrder => {
                Validator::validate_non_empty(values)?;
                let mut sorted: Vec<T> = values.to_vec();
                sort_descending(&mut sorted);
                reducers::median_of_sorted(&sorted)
            }
        }
    }

    /// Compute mean, median, maximum, and minimum, in that order.
    pub fn summarize<T: PrimInt + Unsigned>(
        &self,
        values: &mut [T],
    ) -> Result<StatsReport<T>, StatsError> {
        Validator::validate_non_empty(values)?;

        let mean = self.mean(values)?;
        let median = self.median(values)?;
        let maximum = self.maximum(values)?;
        let minimum = self.minimum(values)?;

        Ok(StatsReport {
            mean,
            median,
            maximum,
            minimum,
        })
    }
}

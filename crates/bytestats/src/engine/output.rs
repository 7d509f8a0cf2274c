//! Output types: array listings and statistics reports.
//!
//! ## Purpose
//!
//! This module defines the printable views of an array and of its
//! summary statistics.
//!
//! ## Design notes
//!
//! * **Borrowing**: [`ArrayListing`] borrows the slice; nothing is copied.
//! * **Ergonomics**: Both types implement `Display`, so they work with `print!`,
//!   `format!`, and any `core::fmt::Write` sink.
//!
//! ## Key concepts
//!
//! ### Listing layout
//! ```text
//! [ 34, 201, 190, 154,   8, 194,   2,   6, 114,  88,
//!   45,  76, 123,  87,  25,  23, 200, 122, 150,  90]
//! ```
//! Every value but the last is right-aligned in `width` columns and followed
//! by `", "`. After every `columns` values a newline and a single space are
//! emitted so rows line up under the opening bracket. The last value is
//! followed by `]`.
//!
//! ### Report layout
//! A header line followed by mean, median, maximum, and minimum, each label
//! left-aligned in 8 columns.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics; it only stores and formats them.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Default number of values per listing line.
pub const DEFAULT_COLUMNS: usize = 10;

/// Default field width of a listed value.
pub const DEFAULT_WIDTH: usize = 3;

// ============================================================================
// Array Listing
// ============================================================================

/// Bracketed, fixed-width view of a slice.
#[derive(Debug, Clone, Copy)]
pub struct ArrayListing<'a, T> {
    values: &'a [T],
    width: usize,
    columns: usize,
}

impl<'a, T> ArrayListing<'a, T> {
    /// Listing with the given layout. `columns` must be at least 1.
    pub fn new(values: &'a [T], width: usize, columns: usize) -> Self {
        Self {
            values,
            width,
            columns: columns.max(1),
        }
    }

    /// Number of listed values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Display> Display for ArrayListing<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let Some((last, head)) = self.values.split_last() else {
            return write!(f, "[]");
        };

        write!(f, "[")?;
        for (i, value) in head.iter().enumerate() {
            write!(f, "{:>width$}, ", value, width = self.width)?;
            if (i + 1) % self.columns == 0 {
                write!(f, "\n ")?;
            }
        }
        write!(f, "{:>width$}]", last, width = self.width)
    }
}

// ============================================================================
// Statistics Report
// ============================================================================

/// Summary statistics of one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport<T> {
    /// Mean, rounded half up.
    pub mean: T,

    /// Median, rounded half up for even lengths.
    pub median: T,

    /// Largest value.
    pub maximum: T,

    /// Smallest value.
    pub minimum: T,
}

impl<T: PartialEq> StatsReport<T> {
    /// True when every value in the array was equal.
    pub fn is_constant(&self) -> bool {
        self.minimum == self.maximum
    }
}

impl<T: Display> Display for StatsReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Here is a summary of statistics for the array:")?;
        writeln!(f, "{:<8} {}", "Mean:", self.mean)?;
        writeln!(f, "{:<8} {}", "Median:", self.median)?;
        writeln!(f, "{:<8} {}", "Maximum:", self.maximum)?;
        writeln!(f, "{:<8} {}", "Minimum:", self.minimum)
    }
}

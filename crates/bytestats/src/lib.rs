//! # bytestats — sorting, listing and summary statistics for unsigned arrays
//!
//! A small, `no_std`-capable library that takes an array of unsigned
//! integers, sorts it in non-increasing order in place, prints it as a
//! fixed-width bracketed listing, and summarizes it with four reducers:
//! mean, median, maximum, and minimum.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytestats::prelude::*;
//!
//! let mut data: Vec<u8> = vec![34, 201, 190, 154, 8, 194, 2, 6, 114, 88];
//!
//! let stats = ArrayStats::new().build()?;
//!
//! println!("{}", stats.listing(&data));
//! stats.sort(&mut data);
//! println!("{}", stats.listing(&data));
//!
//! let report = stats.summarize(&mut data)?;
//! assert_eq!(report.maximum, 201);
//! assert_eq!(report.minimum, 2);
//! print!("{}", report);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ```text
//! [ 34, 201, 190, 154,   8, 194,   2,   6, 114,  88]
//! [201, 194, 190, 154, 114,  88,  34,   8,   6,   2]
//! Here is a summary of statistics for the array:
//! Mean:    99
//! Median:  101
//! Maximum: 201
//! Minimum: 2
//! ```
//!
//! ## Rounding
//!
//! The mean is `(sum + n/2) / n` and the even-length median is
//! `(a + b + 1) / 2`: exact halves round up. The sum is accumulated in a
//! `u64`, so `u8` and `u16` arrays cannot overflow in practice; an overflow
//! is reported as [`StatsError::SumOverflow`](prelude::StatsError).
//!
//! ## Median side effect
//!
//! The median is read from the array sorted in non-increasing order. By
//! default the caller's array is sorted in place as part of computing it;
//! select `PreserveOrder` to sort a private copy instead:
//!
//! ```rust
//! use bytestats::prelude::*;
//!
//! let mut data = vec![1u8, 2, 3];
//! let stats = ArrayStats::new().median_policy(PreserveOrder).build()?;
//!
//! assert_eq!(stats.median(&mut data)?, 2);
//! assert_eq!(data, vec![1, 2, 3]);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every reducer returns `Result<T, StatsError>`; an empty array yields
//! `StatsError::EmptyInput` rather than reading out of bounds.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! bytestats = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the crate still sorts, formats through `core::fmt`, and
//! computes all statistics; only `ArrayStatsProcessor::print` is unavailable.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and sorting.
mod primitives;

// Layer 2: Math - rounding and reducers.
mod math;

// Layer 3: Engine - validation and output types.
mod engine;

// High-level fluent API.
mod api;

// Standard bytestats prelude.
pub mod prelude {
    pub use crate::api::{
        ArrayListing, ArrayStatsBuilder as ArrayStats, ArrayStatsProcessor,
        MedianPolicy::{self, PreserveOrder, SortInPlace},
        SortOutcome, StatsError, StatsReport,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

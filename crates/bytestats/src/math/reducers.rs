//! Reducers: maximum, minimum, mean, and median.
//!
//! ## Purpose
//!
//! This module folds a slice of unsigned integers into a single summary
//! value. All reducers are generic over unsigned primitive integers.
//!
//! ## Design notes
//!
//! * **Guarded**: Every reducer returns [`StatsError::EmptyInput`] for an empty slice.
//! * **Widened sum**: The mean accumulates in `u64` with checked addition.
//! * **Round-half-up**: Mean and even-length median round exact halves up.
//!
//! ## Key concepts
//!
//! ### Median ordering
//! The median is read from a slice sorted in non-increasing order. For odd
//! `n` it is `a[n/2]`; for even `n` it is the rounded average of
//! `a[n/2 - 1]` and `a[n/2]`. [`median`] sorts its argument in place first,
//! so the caller observes the slice reordered.
//!
//! ## Invariants
//!
//! * `minimum <= median <= maximum` and `minimum <= mean <= maximum`.
//!
//! ## Non-goals
//!
//! * This module does not format results.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::math::rounding::{div_round_half_up, midpoint_round_half_up};
use crate::primitives::errors::StatsError;
use crate::primitives::sorting::sort_descending;

// ============================================================================
// Extremes
// ============================================================================

/// Largest value, scanning left to right from the first element.
pub fn maximum<T: PrimInt + Unsigned>(values: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = values.split_first().ok_or(StatsError::EmptyInput)?;
    let mut max = first;
    for &v in rest {
        if v > max {
            max = v;
        }
    }
    Ok(max)
}

/// Smallest value, scanning left to right from the first element.
pub fn minimum<T: PrimInt + Unsigned>(values: &[T]) -> Result<T, StatsError> {
    let (&first, rest) = values.split_first().ok_or(StatsError::EmptyInput)?;
    let mut min = first;
    for &v in rest {
        if v < min {
            min = v;
        }
    }
    Ok(min)
}

// ============================================================================
// Central Tendency
// ============================================================================

/// Sum of all values in a `u64` accumulator.
pub fn sum<T: PrimInt + Unsigned>(values: &[T]) -> Result<u64, StatsError> {
    let overflow = StatsError::SumOverflow { len: values.len() };
    values.iter().try_fold(0u64, |acc, v| {
        let v = v.to_u64().ok_or(overflow)?;
        acc.checked_add(v).ok_or(overflow)
    })
}

/// Arithmetic mean, rounded half up: `(sum + n/2) / n`.
pub fn mean<T: PrimInt + Unsigned>(values: &[T]) -> Result<T, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = values.len() as u64;
    let total = sum(values)?;
    let rounded = div_round_half_up(total, n).ok_or(StatsError::SumOverflow {
        len: values.len(),
    })?;

    // The rounded mean never exceeds the largest element, so it fits `T`.
    Ok(T::from(rounded).unwrap_or_else(T::max_value))
}

/// Median of a slice already sorted in non-increasing order.
pub fn median_of_sorted<T: PrimInt + Unsigned>(sorted: &[T]) -> Result<T, StatsError> {
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let mid = n / 2;
    if n.is_multiple_of(2) {
        Ok(midpoint_round_half_up(sorted[mid], sorted[mid - 1]))
    } else {
        Ok(sorted[mid])
    }
}

/// Sort `values` in place (non-increasing) and return its median.
pub fn median<T: PrimInt + Unsigned>(values: &mut [T]) -> Result<T, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    sort_descending(values);
    median_of_sorted(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_overflow_is_reported() {
        let values = [u64::MAX, 1];
        assert_eq!(sum(&values), Err(StatsError::SumOverflow { len: 2 }));
        assert_eq!(mean(&values), Err(StatsError::SumOverflow { len: 2 }));
    }

    #[test]
    fn wide_elements_keep_their_width() {
        let values = [u32::MAX, u32::MAX - 1];
        assert_eq!(mean(&values), Ok(u32::MAX));
        assert_eq!(maximum(&values), Ok(u32::MAX));
    }
}

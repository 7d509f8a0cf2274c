//! In-place descending bubble sort.
//!
//! ## Purpose
//!
//! This module rearranges a slice into non-increasing order in place and
//! reports how much work the sort performed.
//!
//! ## Design notes
//!
//! * **In-place**: Values are exchanged with `slice::swap`; nothing is allocated.
//! * **Early exit**: A pass without any swap ends the sort.
//! * **Shrinking window**: Pass `k` only scans the first `n - 1 - k` pairs,
//!   since the smallest `k` values have already settled at the tail.
//!
//! ## Key concepts
//!
//! ### Pass accounting
//! The returned [`SortOutcome`] records the number of passes and swaps.
//! An already non-increasing slice of length >= 2 costs exactly one pass
//! and zero swaps; slices of length 0 or 1 cost nothing.
//!
//! ## Invariants
//!
//! * After sorting, `values[i] >= values[i + 1]` for every adjacent pair.
//! * The output is a permutation of the input.
//! * At most `n - 1` passes are performed.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics or validate input.

// ============================================================================
// Data Structures
// ============================================================================

/// Work performed by [`sort_descending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOutcome {
    /// Number of scans over the unsettled prefix.
    pub passes: usize,

    /// Number of adjacent exchanges.
    pub swaps: usize,
}

impl SortOutcome {
    /// True when the input was already in non-increasing order.
    pub fn was_sorted(&self) -> bool {
        self.swaps == 0
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort `values` into non-increasing order using bubble sort.
///
/// 1. Runs at most `n - 1` passes.
/// 2. Each pass swaps adjacent pairs where the left value is smaller.
/// 3. Stops after the first pass that performs no swap.
pub fn sort_descending<T: Ord>(values: &mut [T]) -> SortOutcome {
    let n = values.len();
    let mut outcome = SortOutcome::default();

    for pass in 0..n.saturating_sub(1) {
        outcome.passes += 1;
        let mut swapped = false;

        for i in 0..n - 1 - pass {
            if values[i] < values[i + 1] {
                values.swap(i, i + 1);
                outcome.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    outcome
}

/// Check whether `values` is in non-increasing order.
#[inline]
pub fn is_sorted_descending<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_sorted_input_takes_n_minus_one_passes() {
        let mut values = [1u8, 2, 3, 4, 5];
        let outcome = sort_descending(&mut values);

        assert_eq!(values, [5, 4, 3, 2, 1]);
        assert_eq!(outcome.passes, 4);
        assert_eq!(outcome.swaps, 10);
    }

    #[test]
    fn short_slices_take_no_passes() {
        let mut empty: [u8; 0] = [];
        assert_eq!(sort_descending(&mut empty), SortOutcome::default());

        let mut single = [9u8];
        assert_eq!(sort_descending(&mut single).passes, 0);
    }
}

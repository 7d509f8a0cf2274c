//! Round-half-up integer arithmetic.
//!
//! Both helpers round exact halves toward positive infinity using only
//! integer operations: `(numerator + divisor / 2) / divisor`.

// External dependencies
use num_traits::{PrimInt, Unsigned};

/// Divide `numerator` by `divisor`, rounding halves up.
///
/// Returns `None` when `divisor` is zero or the biased numerator overflows.
#[inline]
pub fn div_round_half_up(numerator: u64, divisor: u64) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    numerator
        .checked_add(divisor / 2)
        .map(|biased| biased / divisor)
}

/// Average two values, rounding halves up: `(a + b + 1) / 2`.
///
/// Evaluated as `a/2 + b/2 + (a%2 + b%2 + 1)/2`, which never exceeds
/// `max(a, b)` and therefore cannot overflow `T`.
#[inline]
pub fn midpoint_round_half_up<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let carry = (a % two + b % two + T::one()) / two;
    a / two + b / two + carry
}

//! Numerically stable log-sum-exp kernels.
//!
//! ## Purpose
//!
//! This module computes `ln(sum(exp(x_i)))` for log-domain values without the
//! overflow (large `x_i`) or underflow (very negative `x_i`) that direct
//! exponentiation would cause.
//!
//! ## Design notes
//!
//! * **Max shift**: Every term is exponentiated relative to the maximum, so the
//!   largest exponent is `exp(0) = 1` and nothing overflows.
//! * **Ordered accumulation**: The buffer is sorted first, so the maximum sits at
//!   the last index and the remaining terms are summed smallest first.
//! * **Pair fast path**: Two values need a single comparison instead of a sort.
//!
//! ## Key concepts
//!
//! With `m = max(x)`:
//!
//! ```text
//! ln(sum(exp(x_i))) = m + ln(1 + sum_{i != argmax} exp(x_i - m))
//! ```
//!
//! The `1` is the maximum's own contribution, added without calling `exp(0)`.
//!
//! ## Invariants
//!
//! * A buffer whose maximum is `-inf` (all zero probability) yields `-inf`, never NaN.
//! * The result does not depend on the input order.
//! * No allocation; the buffer is left sorted.
//!
//! ## Non-goals
//!
//! * NaN inputs are not rejected here (see the checked API); they propagate per IEEE rules.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::sort;

/// Log-sum-exp of a buffer of log-domain values.
///
/// Sorts `array` ascending in place, then accumulates relative to the
/// maximum. An empty buffer is the log of an empty sum, `-inf`.
///
/// ```
/// use lse::prelude::*;
///
/// let mut terms = [0.5_f64.ln(), 0.25_f64.ln(), 0.25_f64.ln()];
/// let total = logsumexp(&mut terms);
/// assert!(total.abs() < 1e-12);
/// ```
pub fn logsumexp<T: Float>(array: &mut [T]) -> T {
    let Some(last) = array.len().checked_sub(1) else {
        return T::neg_infinity();
    };

    sort(array);

    let max = array[last];
    if max == T::neg_infinity() {
        return max;
    }

    let sum = array[..last]
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - max).exp());

    max + (sum + T::one()).ln()
}

/// Log-sum-exp of exactly two log-domain values.
///
/// Equivalent to `logsumexp(&mut [a, b])` without the sort.
#[inline]
pub fn logsumexp_pair<T: Float>(a: T, b: T) -> T {
    if a == T::neg_infinity() && b == T::neg_infinity() {
        return T::neg_infinity();
    }

    let (hi, lo) = if b > a { (b, a) } else { (a, b) };
    hi + (T::one() + (lo - hi).exp()).ln()
}

//! High-level API for log-sum-exp.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It re-exports the raw
//! kernels and adds checked variants that validate their preconditions and
//! report violations as [`LseError`] instead of panicking or returning NaN.
//!
//! ## Design notes
//!
//! * **Raw kernels**: `logsumexp`, `logsumexp_pair`, `sort`, `sort_range` are
//!   re-exported unchanged for hot loops where the caller upholds the contract.
//! * **Checked variants**: `try_*` functions run the [`Validator`] first.
//!
//! ### Choosing a variant
//!
//! | Need                                  | Use                         |
//! |---------------------------------------|-----------------------------|
//! | Fastest path, inputs known good       | `logsumexp`, `sort_range`   |
//! | Inputs from outside, want an error    | `try_logsumexp`, `try_sort_range` |
//! | Values arrive one at a time           | `OnlineLse`                 |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::online::OnlineLse;
pub use crate::math::logsumexp::{logsumexp, logsumexp_pair};
pub use crate::primitives::errors::LseError;
pub use crate::primitives::sorting::{INSERTION_SORT_THRESHOLD, sort, sort_range};

/// Checked log-sum-exp of a buffer.
///
/// Rejects empty buffers and buffers containing NaN, then behaves like
/// [`logsumexp`] (the buffer is left sorted).
pub fn try_logsumexp<T: Float>(array: &mut [T]) -> Result<T, LseError> {
    Validator::validate_non_empty(array.len())?;
    Validator::validate_no_nan(array)?;
    Ok(logsumexp(array))
}

/// Checked log-sum-exp of two values.
///
/// A NaN in `a` is reported at index 0, in `b` at index 1.
pub fn try_logsumexp_pair<T: Float>(a: T, b: T) -> Result<T, LseError> {
    Validator::validate_scalar(a, 0)?;
    Validator::validate_scalar(b, 1)?;
    Ok(logsumexp_pair(a, b))
}

/// Checked in-place sort of the inclusive range `[low, high]`.
///
/// Out-of-bounds or inverted ranges are reported instead of panicking.
pub fn try_sort_range<T: Float>(
    array: &mut [T],
    low: usize,
    high: usize,
) -> Result<(), LseError> {
    Validator::validate_range(array.len(), low, high)?;
    sort_range(array, low, high);
    Ok(())
}

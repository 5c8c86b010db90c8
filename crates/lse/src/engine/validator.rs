//! Input validation for the checked log-sum-exp entry points.
//!
//! ## Purpose
//!
//! This module checks the preconditions the raw kernels leave to the caller:
//! a non-empty buffer, no NaN values, and an in-bounds sort range.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Log-domain values**: Infinities are valid (`-inf` is zero probability);
//!   only NaN is rejected.
//! * **Inclusive ranges**: Sort ranges are `[low, high]`, so `high` must be a valid index.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or transform input data.
//! * This module does not repair invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LseError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for log-sum-exp inputs.
///
/// All methods return `Result<(), LseError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a buffer holds at least one value.
    #[inline]
    pub fn validate_non_empty(len: usize) -> Result<(), LseError> {
        if len == 0 {
            return Err(LseError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that no value is NaN.
    pub fn validate_no_nan<T: Float>(values: &[T]) -> Result<(), LseError> {
        match values.iter().position(|v| v.is_nan()) {
            Some(index) => Err(LseError::InvalidNumericValue { index }),
            None => Ok(()),
        }
    }

    /// Validate a single scalar input.
    #[inline]
    pub fn validate_scalar<T: Float>(value: T, index: usize) -> Result<(), LseError> {
        if value.is_nan() {
            return Err(LseError::InvalidNumericValue { index });
        }
        Ok(())
    }

    /// Validate an inclusive sort range against a buffer length.
    pub fn validate_range(len: usize, low: usize, high: usize) -> Result<(), LseError> {
        if low > high || high >= len {
            return Err(LseError::InvalidRange { low, high, len });
        }
        Ok(())
    }
}

//! Error types for log-sum-exp operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the checked entry
//! points (`try_logsumexp`, `try_sort_range`) and by the batch front-end.
//! The raw kernels never return errors.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index, range, or length.
//! * **Allocation-free**: All payloads are `Copy`, so the type works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is
//!   enabled).
//!
//! ## Invariants
//!
//! * Every variant provides enough context to locate the bad input.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for log-sum-exp operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LseError {
    /// Input buffer is empty; at least one log-domain value is required.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(&'static str),

    /// Input contains a NaN, which is not a valid log-domain value.
    InvalidNumericValue {
        /// Position of the first NaN.
        index: usize,
    },

    /// Sort range is empty or extends past the end of the buffer.
    InvalidRange {
        /// Requested lower bound (inclusive).
        low: usize,
        /// Requested upper bound (inclusive).
        high: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// Paired inputs must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the first input.
        a_len: usize,
        /// Number of elements in the second input.
        b_len: usize,
    },

    /// Parallel dispatch threshold must be at least one row.
    InvalidMinParallelRows(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidNumericValue { index } => {
                write!(f, "Invalid numeric value: NaN at index {index}")
            }
            Self::InvalidRange { low, high, len } => {
                write!(
                    f,
                    "Invalid range: [{low}, {high}] (must satisfy low <= high < {len})"
                )
            }
            Self::MismatchedInputs { a_len, b_len } => {
                write!(f, "Length mismatch: a has {a_len} values, b has {b_len}")
            }
            Self::InvalidMinParallelRows(rows) => {
                write!(f, "Invalid min_parallel_rows: {rows} (must be >= 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LseError {}

//! Tests for the checked API.
//!
//! These tests verify that the `try_*` entry points:
//! - Agree with the raw kernels on valid input
//! - Report empty input, NaN, and bad ranges with context
//! - Leave the buffer untouched when validation fails
//!
//! ## Test Organization
//!
//! 1. **try_logsumexp**
//! 2. **try_logsumexp_pair**
//! 3. **try_sort_range**
//! 4. **Error Display**

use approx::assert_relative_eq;

use lse::prelude::*;

// ============================================================================
// try_logsumexp Tests
// ============================================================================

/// Test valid input.
#[test]
fn test_try_logsumexp_ok() {
    let mut checked = vec![0.3, -1.2, 4.0, 2.2];
    let mut raw = checked.clone();

    let result = try_logsumexp(&mut checked).unwrap();

    assert_eq!(result, logsumexp(&mut raw));
    assert_eq!(checked, raw, "Both paths should leave the buffer sorted");
}

/// Test that infinities are accepted.
///
/// `-inf` is zero probability, a valid log-domain value.
#[test]
fn test_try_logsumexp_accepts_infinities() {
    let mut zero = vec![f64::NEG_INFINITY; 3];
    assert_eq!(try_logsumexp(&mut zero), Ok(f64::NEG_INFINITY));

    let mut mixed = vec![f64::NEG_INFINITY, 0.0];
    assert_eq!(try_logsumexp(&mut mixed), Ok(0.0));
}

/// Test empty input.
#[test]
fn test_try_logsumexp_empty() {
    let mut empty: Vec<f64> = vec![];

    assert_eq!(try_logsumexp(&mut empty), Err(LseError::EmptyInput));
}

/// Test NaN input.
///
/// Verifies the index of the first NaN is reported and the buffer is untouched.
#[test]
fn test_try_logsumexp_nan() {
    let mut buf = vec![3.0, 1.0, f64::NAN, 2.0, f64::NAN];

    let result = try_logsumexp(&mut buf);

    assert_eq!(result, Err(LseError::InvalidNumericValue { index: 2 }));
    assert_eq!(buf[..2], [3.0, 1.0]);
    assert_eq!(buf[3], 2.0);
}

// ============================================================================
// try_logsumexp_pair Tests
// ============================================================================

/// Test valid pairs.
#[test]
fn test_try_logsumexp_pair_ok() {
    let result = try_logsumexp_pair(-1.0, 1.0).unwrap();

    assert_relative_eq!(result, logsumexp_pair(-1.0, 1.0), max_relative = 1e-15);
    assert_eq!(
        try_logsumexp_pair(f64::NEG_INFINITY, f64::NEG_INFINITY),
        Ok(f64::NEG_INFINITY)
    );
}

/// Test NaN in either position.
#[test]
fn test_try_logsumexp_pair_nan() {
    assert_eq!(
        try_logsumexp_pair(f64::NAN, 1.0),
        Err(LseError::InvalidNumericValue { index: 0 })
    );
    assert_eq!(
        try_logsumexp_pair(1.0, f64::NAN),
        Err(LseError::InvalidNumericValue { index: 1 })
    );
}

// ============================================================================
// try_sort_range Tests
// ============================================================================

/// Test a valid range.
#[test]
fn test_try_sort_range_ok() {
    let mut buf = vec![5.0, 4.0, 3.0, 2.0, 1.0];

    try_sort_range(&mut buf, 1, 3).unwrap();

    assert_eq!(buf, vec![5.0, 2.0, 3.0, 4.0, 1.0]);
}

/// Test an out-of-bounds range.
#[test]
fn test_try_sort_range_out_of_bounds() {
    let mut buf = vec![2.0, 1.0];

    let result = try_sort_range(&mut buf, 0, 2);

    assert_eq!(
        result,
        Err(LseError::InvalidRange {
            low: 0,
            high: 2,
            len: 2
        })
    );
    assert_eq!(buf, vec![2.0, 1.0]);
}

/// Test an inverted range.
#[test]
fn test_try_sort_range_inverted() {
    let mut buf = vec![2.0, 1.0, 0.0];

    assert_eq!(
        try_sort_range(&mut buf, 2, 1),
        Err(LseError::InvalidRange {
            low: 2,
            high: 1,
            len: 3
        })
    );
}

/// Test an empty buffer.
#[test]
fn test_try_sort_range_empty_buffer() {
    let mut buf: Vec<f64> = vec![];

    assert!(try_sort_range(&mut buf, 0, 0).is_err());
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(LseError::EmptyInput.to_string(), "Input is empty");
    assert_eq!(
        LseError::InvalidNumericValue { index: 4 }.to_string(),
        "Invalid numeric value: NaN at index 4"
    );
    assert_eq!(
        LseError::InvalidRange {
            low: 1,
            high: 9,
            len: 5
        }
        .to_string(),
        "Invalid range: [1, 9] (must satisfy low <= high < 5)"
    );
    assert_eq!(
        LseError::DuplicateParameter {
            parameter: "parallel"
        }
        .to_string(),
        "Parameter 'parallel' was set multiple times. Each parameter can only be configured once."
    );
}

/// Test that the error converts into a boxed std error.
#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(LseError::EmptyInput);

    assert_eq!(err.to_string(), "Input is empty");
}

#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the validator used by the checked entry points:
//! - Empty input detection
//! - NaN detection (infinities allowed)
//! - Inclusive range bounds
//!
//! ## Test Organization
//!
//! 1. **Length Validation**
//! 2. **Numeric Validation**
//! 3. **Range Validation**

use lse::internals::engine::validator::Validator;
use lse::internals::primitives::errors::LseError;

// ============================================================================
// Length Validation Tests
// ============================================================================

/// Test non-empty validation.
#[test]
fn test_validate_non_empty() {
    assert_eq!(Validator::validate_non_empty(0), Err(LseError::EmptyInput));
    assert!(Validator::validate_non_empty(1).is_ok());
}

// ============================================================================
// Numeric Validation Tests
// ============================================================================

/// Test finite and infinite values pass.
#[test]
fn test_validate_no_nan_accepts_infinities() {
    let values = [0.0, f64::INFINITY, f64::NEG_INFINITY, -1e308];

    assert!(Validator::validate_no_nan(&values).is_ok());
    assert!(Validator::validate_no_nan::<f64>(&[]).is_ok());
}

/// Test the first NaN is reported.
#[test]
fn test_validate_no_nan_first_index() {
    let values = [1.0_f32, 2.0, f32::NAN, f32::NAN];

    assert_eq!(
        Validator::validate_no_nan(&values),
        Err(LseError::InvalidNumericValue { index: 2 })
    );
}

/// Test scalar validation.
#[test]
fn test_validate_scalar() {
    assert!(Validator::validate_scalar(f64::NEG_INFINITY, 0).is_ok());
    assert_eq!(
        Validator::validate_scalar(f64::NAN, 7),
        Err(LseError::InvalidNumericValue { index: 7 })
    );
}

// ============================================================================
// Range Validation Tests
// ============================================================================

/// Test valid ranges.
#[test]
fn test_validate_range_ok() {
    assert!(Validator::validate_range(5, 0, 4).is_ok());
    assert!(Validator::validate_range(5, 2, 2).is_ok());
}

/// Test invalid ranges.
#[test]
fn test_validate_range_invalid() {
    assert_eq!(
        Validator::validate_range(5, 0, 5),
        Err(LseError::InvalidRange {
            low: 0,
            high: 5,
            len: 5
        })
    );
    assert_eq!(
        Validator::validate_range(5, 3, 2),
        Err(LseError::InvalidRange {
            low: 3,
            high: 2,
            len: 5
        })
    );
    assert!(Validator::validate_range(0, 0, 0).is_err());
}

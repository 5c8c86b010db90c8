//! # lse — Numerically stable log-sum-exp for Rust
//!
//! Sum probabilities that are stored as logarithms without overflow or
//! underflow. `lse` provides the array kernel, a closed-form two-value kernel,
//! the in-place hybrid sort the array kernel is built on, checked variants of
//! each, and an online accumulator for streaming input.
//!
//! ## What is log-sum-exp?
//!
//! Given log-domain values `x_i = ln(p_i)`, log-sum-exp is `ln(sum(p_i))`.
//! Computing `exp` first overflows for large `x_i` and underflows to zero for
//! very negative ones. Shifting every term by the maximum keeps the
//! computation in range:
//!
//! ```text
//! ln(sum(exp(x_i))) = m + ln(sum(exp(x_i - m))),   m = max(x)
//! ```
//!
//! Negative infinity is zero probability; a buffer of nothing but `-inf`
//! sums to `-inf`, not NaN.
//!
//! ## Quick Start
//!
//! ```rust
//! use lse::prelude::*;
//!
//! // Three branches with probabilities 0.2, 0.3 and 0.5
//! let mut log_p = vec![0.2_f64.ln(), 0.3_f64.ln(), 0.5_f64.ln()];
//!
//! let total = logsumexp(&mut log_p);
//! assert!(total.abs() < 1e-12);
//!
//! // The buffer is left sorted ascending
//! assert!(log_p.windows(2).all(|w| w[0] <= w[1]));
//!
//! // Two-term fast path, no sort
//! let both = logsumexp_pair(0.5_f64.ln(), 0.5_f64.ln());
//! assert!(both.abs() < 1e-12);
//! ```
//!
//! ### Values that would overflow naively
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut huge = [1000.0_f64, 1000.0];
//! let total = logsumexp(&mut huge);
//! assert!((total - (1000.0 + 2.0_f64.ln())).abs() < 1e-9);
//! ```
//!
//! ### Result and Error Handling
//!
//! The raw kernels have no error channel: an empty buffer yields `-inf` and
//! NaN propagates. The `try_*` variants validate first:
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut bad = [0.0_f64, f64::NAN];
//! assert_eq!(
//!     try_logsumexp(&mut bad),
//!     Err(LseError::InvalidNumericValue { index: 1 })
//! );
//!
//! let mut empty: [f64; 0] = [];
//! assert_eq!(try_logsumexp(&mut empty), Err(LseError::EmptyInput));
//! ```
//!
//! ### Streaming input
//!
//! ```rust
//! use lse::prelude::*;
//!
//! let mut acc = OnlineLse::new();
//! for log_w in [-1.0_f64, -2.0, -3.0] {
//!     acc.push(log_w);
//! }
//! let expected = ((-1.0_f64).exp() + (-2.0_f64).exp() + (-3.0_f64).exp()).ln();
//! assert!((acc.value() - expected).abs() < 1e-12);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The kernels never allocate. Disable default features to drop the standard
//! library dependency (`num-traits` falls back to `libm`):
//!
//! ```toml
//! [dependencies]
//! lse = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - error type and sorting.
mod primitives;

// Layer 2: Math - log-sum-exp kernels.
mod math;

// Layer 3: Engine - precondition checks.
mod engine;

// Layer 4: Adapters - online accumulation.
mod adapters;

// High-level API with checked variants.
mod api;

// Standard lse prelude.
pub mod prelude {
    pub use crate::api::{
        INSERTION_SORT_THRESHOLD, LseError, OnlineLse, logsumexp, logsumexp_pair, sort,
        sort_range, try_logsumexp, try_logsumexp_pair, try_sort_range,
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
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

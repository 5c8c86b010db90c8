//! # fastLse — Parallel batch log-sum-exp for Rust
//!
//! Batch front-end for the [`lse`] kernels: log-sum-exp of every row of an
//! `ndarray` matrix, of a collection of owned buffers, of elementwise pairs,
//! or of one large read-only input, spread across CPU cores with `rayon`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastLse::prelude::*;
//! use ndarray::array;
//!
//! // Each row holds log-probabilities of one distribution
//! let mut log_p = array![
//!     [0.5_f64.ln(), 0.5_f64.ln()],
//!     [0.1_f64.ln(), 0.9_f64.ln()],
//! ];
//!
//! let runner = Lse::new().parallel(true).build()?;
//! let totals = runner.rows(&mut log_p)?;
//!
//! assert!(totals.iter().all(|t| t.abs() < 1e-12));
//! # Result::<(), LseError>::Ok(())
//! ```
//!
//! ### Read-only reduction
//!
//! ```rust
//! use fastLse::prelude::*;
//!
//! let log_w: Vec<f64> = (0..10_000).map(|i| -(i as f64) * 1e-3).collect();
//! let total = Lse::new().build()?.reduce(&log_w)?;
//! assert!(total.is_finite());
//! # Result::<(), LseError>::Ok(())
//! ```
//!
//! ## Execution
//!
//! Work runs in parallel only when `.parallel(true)` (the default) and the
//! batch holds at least `.min_parallel_rows(n)` independent units (default 64).
//! Dispatch decisions are reported through `tracing` at debug level.

#![allow(non_snake_case)]

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for batch log-sum-exp.
mod api;

// Input data handling.
mod input;

// Standard fastLse prelude.
pub mod prelude {
    pub use crate::api::{BatchConfig, BatchLse, LseBuilder as Lse, LseError};
    pub use crate::input::LseInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}

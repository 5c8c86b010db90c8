//! High-level API for batch log-sum-exp.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for fastLse: a
//! fluent builder that configures execution and produces a [`BatchLse`]
//! runner for matrices, buffer collections, paired slices, and large
//! read-only inputs.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Deferred errors**: Setting a parameter twice is reported at `.build()`.
//! * **Parallel Support**: Uses `rayon` for data-parallel execution across rows.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LseBuilder`] via `Lse::new()`.
//! 2. Chain configuration methods (`.parallel()`, `.validate()`, `.min_parallel_rows()`).
//! 3. Call `.build()` to get a [`BatchLse`].

// External dependencies
use ndarray::{Array1, ArrayBase, DataMut, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::BatchExecutor;
use crate::input::LseInput;

// Publicly re-exported types
pub use crate::engine::executor::BatchConfig;
pub use lse::internals::primitives::errors::LseError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for batch log-sum-exp execution.
#[derive(Debug, Clone, Default)]
pub struct LseBuilder {
    /// Whether parallel execution is allowed.
    parallel: Option<bool>,

    /// Whether each reduction is validated.
    validate: Option<bool>,

    /// Minimum independent units before going parallel.
    min_parallel_rows: Option<usize>,

    /// First parameter that was set more than once.
    duplicate_param: Option<&'static str>,
}

impl LseBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel execution (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param.get_or_insert("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Enable or disable per-reduction checks for empty input and NaN (default: enabled).
    pub fn validate(mut self, validate: bool) -> Self {
        if self.validate.is_some() {
            self.duplicate_param.get_or_insert("validate");
        }
        self.validate = Some(validate);
        self
    }

    /// Minimum number of rows (or chunks) before work is spread across threads.
    pub fn min_parallel_rows(mut self, rows: usize) -> Self {
        if self.min_parallel_rows.is_some() {
            self.duplicate_param.get_or_insert("min_parallel_rows");
        }
        self.min_parallel_rows = Some(rows);
        self
    }

    /// Validate the configuration and build the runner.
    pub fn build(self) -> Result<BatchLse, LseError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(LseError::DuplicateParameter { parameter });
        }

        let defaults = BatchConfig::default();
        let min_parallel_rows = self.min_parallel_rows.unwrap_or(defaults.min_parallel_rows);
        if min_parallel_rows == 0 {
            return Err(LseError::InvalidMinParallelRows(min_parallel_rows));
        }

        Ok(BatchLse {
            config: BatchConfig {
                parallel: self.parallel.unwrap_or(defaults.parallel),
                validate: self.validate.unwrap_or(defaults.validate),
                min_parallel_rows,
            },
        })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Configured batch log-sum-exp runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLse {
    config: BatchConfig,
}

impl BatchLse {
    /// Execution settings in effect.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Log-sum-exp of every row of a matrix.
    ///
    /// Each row is sorted in place. The matrix must be in standard
    /// (row-major, contiguous) layout.
    pub fn rows<T, S>(&self, matrix: &mut ArrayBase<S, Ix2>) -> Result<Array1<T>, LseError>
    where
        T: Float + Send + Sync,
        S: DataMut<Elem = T>,
    {
        let (nrows, ncols) = matrix.dim();
        if nrows == 0 {
            return Ok(Array1::from_vec(Vec::new()));
        }
        if ncols == 0 {
            return Err(LseError::EmptyInput);
        }

        let data = matrix.as_slice_mut().ok_or(LseError::InvalidInput(
            "matrix must be in standard (row-major) layout",
        ))?;

        BatchExecutor::reduce_rows(data, ncols, &self.config).map(Array1::from_vec)
    }

    /// Log-sum-exp of each buffer; every buffer is sorted in place.
    pub fn buffers<T>(&self, buffers: &mut [Vec<T>]) -> Result<Vec<T>, LseError>
    where
        T: Float + Send + Sync,
    {
        BatchExecutor::reduce_buffers(buffers, &self.config)
    }

    /// Elementwise `logsumexp_pair(a[i], b[i])`.
    pub fn pairs<T>(&self, a: &[T], b: &[T]) -> Result<Vec<T>, LseError>
    where
        T: Float + Send + Sync,
    {
        BatchExecutor::reduce_pairs(a, b, &self.config)
    }

    /// Log-sum-exp of one read-only input without reordering it.
    pub fn reduce<T, I>(&self, values: &I) -> Result<T, LseError>
    where
        T: Float + Send + Sync,
        I: LseInput<T> + ?Sized,
    {
        BatchExecutor::reduce_values(values.as_lse_slice()?, &self.config)
    }
}

//! Batch execution engine for log-sum-exp.
//!
//! ## Purpose
//!
//! This module runs many independent log-sum-exp reductions (matrix rows,
//! owned buffers, elementwise pairs) and single large reductions, either
//! sequentially or in parallel.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Disjoint buffers**: Each task owns a distinct `&mut` row, so no locking is needed.
//! * **Dispatch threshold**: Small batches run sequentially to avoid scheduling overhead.
//! * **Delegation**: Every reduction is the `lse` kernel; this module only schedules.
//!
//! ## Key concepts
//!
//! * **Rows**: A flat row-major buffer split into `row_len` sized chunks.
//! * **Chunked reduction**: One large read-only slice is reduced as
//!   [`REDUCE_CHUNK_SIZE`] chunks of [`OnlineLse`] accumulators merged together.
//!
//! ## Invariants
//!
//! * Output order matches input row order.
//! * Sequential and parallel execution return identical per-row results.
//!
//! ## Non-goals
//!
//! * This module does not reshape or copy input matrices.

// External dependencies
use num_traits::Float;
use rayon::prelude::*;
use tracing::{debug, warn};

// Export dependencies from lse crate
use lse::internals::adapters::online::OnlineLse;
use lse::internals::engine::validator::Validator;
use lse::internals::math::logsumexp::{logsumexp, logsumexp_pair};
use lse::internals::primitives::errors::LseError;

// ============================================================================
// Constants
// ============================================================================

/// Number of values folded into one accumulator by [`BatchExecutor::reduce_values`].
pub const REDUCE_CHUNK_SIZE: usize = 4096;

/// Default number of rows (or chunks) below which execution stays sequential.
pub const DEFAULT_MIN_PARALLEL_ROWS: usize = 64;

// ============================================================================
// Configuration
// ============================================================================

/// Execution settings for batch reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Whether parallel execution is allowed.
    pub parallel: bool,

    /// Whether each reduction is checked for empty input and NaN.
    pub validate: bool,

    /// Minimum number of independent units before going parallel.
    pub min_parallel_rows: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            validate: true,
            min_parallel_rows: DEFAULT_MIN_PARALLEL_ROWS,
        }
    }
}

impl BatchConfig {
    /// Whether `units` independent reductions should run in parallel.
    #[inline]
    pub fn use_parallel(&self, units: usize) -> bool {
        self.parallel && units >= self.min_parallel_rows
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Scheduler for batch log-sum-exp reductions.
pub struct BatchExecutor;

impl BatchExecutor {
    /// Reduce one buffer, validating it first when requested.
    #[inline]
    pub fn reduce_row<T: Float>(row: &mut [T], validate: bool) -> Result<T, LseError> {
        if validate {
            Validator::validate_non_empty(row.len())?;
            Validator::validate_no_nan(row)?;
        }
        Ok(logsumexp(row))
    }

    /// Reduce each `row_len` sized row of a flat row-major buffer.
    pub fn reduce_rows<T>(
        data: &mut [T],
        row_len: usize,
        config: &BatchConfig,
    ) -> Result<Vec<T>, LseError>
    where
        T: Float + Send + Sync,
    {
        if row_len == 0 {
            return Err(LseError::EmptyInput);
        }
        if data.len() % row_len != 0 {
            return Err(LseError::InvalidInput(
                "buffer length must be a multiple of the row length",
            ));
        }

        let rows = data.len() / row_len;
        let parallel = config.use_parallel(rows);
        debug!(rows, row_len, parallel, "reducing rows");

        let reduce = |(i, row): (usize, &mut [T])| {
            Self::reduce_row(row, config.validate).inspect_err(|err| {
                warn!(row = i, %err, "rejected row");
            })
        };

        if parallel {
            data.par_chunks_mut(row_len).enumerate().map(reduce).collect()
        } else {
            data.chunks_mut(row_len).enumerate().map(reduce).collect()
        }
    }

    /// Reduce each owned buffer independently.
    pub fn reduce_buffers<T>(
        buffers: &mut [Vec<T>],
        config: &BatchConfig,
    ) -> Result<Vec<T>, LseError>
    where
        T: Float + Send + Sync,
    {
        let parallel = config.use_parallel(buffers.len());
        debug!(buffers = buffers.len(), parallel, "reducing buffers");

        let reduce = |(i, buffer): (usize, &mut Vec<T>)| {
            Self::reduce_row(buffer.as_mut_slice(), config.validate).inspect_err(|err| {
                warn!(buffer = i, %err, "rejected buffer");
            })
        };

        if parallel {
            buffers.par_iter_mut().enumerate().map(reduce).collect()
        } else {
            buffers.iter_mut().enumerate().map(reduce).collect()
        }
    }

    /// Elementwise pairwise log-sum-exp of two equal-length slices.
    pub fn reduce_pairs<T>(a: &[T], b: &[T], config: &BatchConfig) -> Result<Vec<T>, LseError>
    where
        T: Float + Send + Sync,
    {
        if a.len() != b.len() {
            return Err(LseError::MismatchedInputs {
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        if config.validate {
            Validator::validate_no_nan(a)?;
            Validator::validate_no_nan(b)?;
        }

        let parallel = config.use_parallel(a.len());
        debug!(pairs = a.len(), parallel, "reducing pairs");

        let out: Vec<T> = if parallel {
            a.par_iter()
                .zip(b.par_iter())
                .map(|(&x, &y)| logsumexp_pair(x, y))
                .collect()
        } else {
            a.iter()
                .zip(b.iter())
                .map(|(&x, &y)| logsumexp_pair(x, y))
                .collect()
        };

        Ok(out)
    }

    /// Log-sum-exp of one read-only slice via merged chunk accumulators.
    ///
    /// Unlike [`Self::reduce_row`], the input is not sorted, so the result
    /// agrees with the sorted kernel to rounding rather than bit for bit.
    pub fn reduce_values<T>(values: &[T], config: &BatchConfig) -> Result<T, LseError>
    where
        T: Float + Send + Sync,
    {
        if config.validate {
            Validator::validate_non_empty(values.len())?;
            Validator::validate_no_nan(values)?;
        }

        let chunks = values.len().div_ceil(REDUCE_CHUNK_SIZE);
        let parallel = config.use_parallel(chunks);
        debug!(len = values.len(), chunks, parallel, "reducing values");

        let acc = if parallel {
            values
                .par_chunks(REDUCE_CHUNK_SIZE)
                .map(|chunk| chunk.iter().collect::<OnlineLse<T>>())
                .reduce(OnlineLse::new, |mut left, right| {
                    left.merge(&right);
                    left
                })
        } else {
            values.iter().collect::<OnlineLse<T>>()
        };

        Ok(acc.value())
    }
}

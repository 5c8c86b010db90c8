//! Input abstractions for batch log-sum-exp.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for read-only log-domain
//! inputs, allowing [`BatchLse::reduce`](crate::api::BatchLse::reduce) to accept
//! slices, vectors, and ndarray arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Rejects non-contiguous ndarray views before processing.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy or reshape inputs.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from lse crate
use lse::internals::primitives::errors::LseError;

/// Trait for types that can be used as read-only log-sum-exp input.
pub trait LseInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_lse_slice(&self) -> Result<&[T], LseError>;
}

impl<T: Float> LseInput<T> for [T] {
    fn as_lse_slice(&self) -> Result<&[T], LseError> {
        Ok(self)
    }
}

impl<T: Float> LseInput<T> for Vec<T> {
    fn as_lse_slice(&self) -> Result<&[T], LseError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> LseInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_lse_slice(&self) -> Result<&[T], LseError> {
        self.as_slice()
            .ok_or(LseError::InvalidInput("ndarray input must be contiguous in memory"))
    }
}

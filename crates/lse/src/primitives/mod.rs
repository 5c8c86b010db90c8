//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the in-place sort used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Hybrid quicksort / insertion sort.
pub mod sorting;

/// Shared error types.
pub mod errors;

//! Layer 5: Engine (fastLse extension)
//!
//! # Purpose
//!
//! This layer schedules batch log-sum-exp reductions onto the `lse` kernels,
//! sequentially or across CPU cores with `rayon`.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! lse (Layers 1-4)
//! ```

/// Parallel batch executor.
pub mod executor;

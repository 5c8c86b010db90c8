//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides execution modes beyond a single buffer reduction.
//! Currently the online (streaming, bufferless) accumulator.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Incremental log-sum-exp.
pub mod online;

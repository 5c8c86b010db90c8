//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the log-sum-exp kernels. They are pure functions over
//! caller-owned buffers with no validation and no allocation.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Array and pairwise log-sum-exp.
pub mod logsumexp;

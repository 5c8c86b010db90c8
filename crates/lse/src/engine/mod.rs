//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer guards the raw kernels with precondition checks for the
//! checked entry points and the batch front-end.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared low-level operations, the metrics
//! accumulator, and the error type used throughout the crate. It has zero
//! internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API (registry)
//!   ↓
//! Layer 5: Algorithms
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Trace
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Comparison, swap, and shift primitives.
pub mod ops;

/// Per-run operation counters.
pub mod metrics;

/// Shared error types.
pub mod errors;

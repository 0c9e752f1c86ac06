//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure arithmetic helpers used by the distribution
//! sorts:
//! - Digit counting and extraction in an arbitrary base (radix sort)
//! - Bucket sizing and index computation (bucket sort)
//!
//! These are reusable building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Digit counting and extraction for radix operations.
pub mod digits;

/// Bucket sizing and index computation.
pub mod buckets;

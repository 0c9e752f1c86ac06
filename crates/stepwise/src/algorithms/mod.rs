//! Layer 5: Algorithms
//!
//! # Purpose
//!
//! One module per algorithm family. Each family implements its logic once,
//! generic over a step sink, and exposes thin entry points:
//!
//! - `sort` / `sort_traced` (plus `_with` variants taking options) for the
//!   sorts
//! - `iterative` / `recursive` (plus `_traced`) for binary search
//! - `generate` / `generate_traced` for count-and-say
//!
//! Entry points validate through the engine layer, run the shared core
//! against [`crate::trace::sink::NullSink`] or
//! [`crate::trace::sink::TraceSink`], and wrap the outcome in a
//! [`crate::engine::report::RunReport`]. Fast and step-tracked variants
//! therefore agree on output by construction.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API (registry)
//!   ↓
//! Layer 5: Algorithms ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Trace
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sort with early termination.
pub mod bubble;

/// Selection sort with leftmost tie-break.
pub mod selection;

/// Insertion sort (linear and binary insertion-point modes).
pub mod insertion;

/// Quicksort: Lomuto partition, pivot strategies, recursive and iterative.
pub mod quick;

/// Top-down stable merge sort with a reused auxiliary buffer.
pub mod merge;

/// Heap sort in max-heap (ascending) or min-heap (descending) mode.
pub mod heap;

/// Stable counting sort over non-negative keys.
pub mod counting;

/// Bucket sort over floats with insertion-sorted buckets.
pub mod bucket;

/// Least-significant-digit radix sort.
pub mod radix;

/// Binary search, iterative and recursive.
pub mod search;

/// Count-and-say sequence generator.
pub mod sequence;

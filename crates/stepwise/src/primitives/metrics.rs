//! Operation counters for a single algorithm run.
//!
//! ## Purpose
//!
//! This module defines the [`Metrics`] accumulator: one counter per
//! operation class, created zeroed for every run and returned by value with
//! the result. Each algorithm family touches only its documented subset.
//!
//! ## Design notes
//!
//! * **Per-run**: counters are never shared or carried across invocations;
//!   every entry point builds a fresh `Metrics`.
//! * **Snapshots**: the struct is `Copy`, so step records embed the counter
//!   state at the instant the step occurred.
//! * **Monotone**: the `record_*` methods only ever increase values.
//!
//! ## Key concepts
//!
//! * **Decision points**: one comparison is recorded per logical three-way
//!   decision, regardless of how the comparison is computed.
//! * **Depth watermark**: `max_depth` tracks the deepest recursion (or
//!   explicit-stack height) seen so far, not the current depth.
//!
//! ## Invariants
//!
//! * All counters start at zero and are non-decreasing during a run.
//! * A returned `Metrics` is a plain value; nothing can mutate it later.
//!
//! ## Non-goals
//!
//! * This module does not decide which operations an algorithm performs.
//! * This module does not provide cross-thread aggregation; runs are
//!   single-threaded and independent.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Metrics
// ============================================================================

/// Operation counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Three-way comparisons (one per logical decision point).
    pub comparisons: u64,

    /// Position exchanges.
    pub swaps: u64,

    /// Single-element copies (insertion/merge style movement).
    pub shifts: u64,

    /// Key placements performed by insertion sort.
    pub insertions: u64,

    /// Completed merge operations (merge sort).
    pub merges: u64,

    /// Completed partitions (quicksort).
    pub partitions: u64,

    /// Bucket/count-array operations (counting, bucket, and radix sorts).
    pub bucket_ops: u64,

    /// Heap maintenance operations (build and extract phases).
    pub heap_ops: u64,

    /// Deepest recursion or explicit-stack height observed.
    pub max_depth: u64,

    /// Full passes over the data (bubble and radix sorts, sequence rows).
    pub passes: u64,

    /// Loop iterations (binary search probes, sequence runs encoded).
    pub iterations: u64,
}

impl Metrics {
    /// Create a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Record one swap.
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Record one shift.
    #[inline]
    pub fn record_shift(&mut self) {
        self.shifts += 1;
    }

    /// Record one key placement.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Record one completed merge.
    #[inline]
    pub fn record_merge(&mut self) {
        self.merges += 1;
    }

    /// Record one completed partition.
    #[inline]
    pub fn record_partition(&mut self) {
        self.partitions += 1;
    }

    /// Record one bucket or count-array operation.
    #[inline]
    pub fn record_bucket_op(&mut self) {
        self.bucket_ops += 1;
    }

    /// Record one heap maintenance operation.
    #[inline]
    pub fn record_heap_op(&mut self) {
        self.heap_ops += 1;
    }

    /// Raise the depth watermark to `depth` if it is deeper than anything
    /// seen so far.
    #[inline]
    pub fn record_depth(&mut self, depth: u64) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Record one full pass over the data.
    #[inline]
    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    /// Record one loop iteration.
    #[inline]
    pub fn record_iteration(&mut self) {
        self.iterations += 1;
    }

    /// Sum of all data-movement and decision counters.
    ///
    /// `max_depth` is a watermark, not an operation count, and is excluded.
    pub fn total_ops(&self) -> u64 {
        self.comparisons
            + self.swaps
            + self.shifts
            + self.insertions
            + self.merges
            + self.partitions
            + self.bucket_ops
            + self.heap_ops
            + self.passes
            + self.iterations
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Metrics {
    /// List the non-zero counters, one per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let rows = [
            ("comparisons", self.comparisons),
            ("swaps", self.swaps),
            ("shifts", self.shifts),
            ("insertions", self.insertions),
            ("merges", self.merges),
            ("partitions", self.partitions),
            ("bucket ops", self.bucket_ops),
            ("heap ops", self.heap_ops),
            ("max depth", self.max_depth),
            ("passes", self.passes),
            ("iterations", self.iterations),
        ];

        writeln!(f, "Metrics:")?;
        for (name, value) in rows {
            if value > 0 {
                writeln!(f, "  {name:<12} {value}")?;
            }
        }
        Ok(())
    }
}

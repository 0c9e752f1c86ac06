//! Result envelope returned by every entry point.
//!
//! ## Purpose
//!
//! This module defines [`RunReport`], the uniform `{ output, metrics,
//! steps? }` shape every fast and step-tracked entry point returns, plus
//! the per-family aliases.
//!
//! ## Design notes
//!
//! * **Uniform**: rendering layers handle one shape for all families; only
//!   the `output` type varies.
//! * **By value**: a report owns everything it carries; nothing refers back
//!   into engine state and nothing can mutate it after return.
//! * **Ergonomics**: implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `steps` is `Some` exactly when a step-tracked entry point produced the
//!   report.
//! * The `output` of the fast and step-tracked variants of the same
//!   algorithm on the same input is identical (both run the same
//!   sink-generic core).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::primitives::metrics::Metrics;
use crate::trace::record::StepRecord;

// ============================================================================
// Result Envelope
// ============================================================================

/// Uniform result envelope: primary output, aggregated metrics, and the
/// step trace when the step-tracked variant produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<P, T> {
    /// The primary result: sorted array, found index, or generated string.
    pub output: P,

    /// Aggregated operation counters for the run.
    pub metrics: Metrics,

    /// Ordered trace of state transitions (step-tracked variants only).
    pub steps: Option<Vec<StepRecord<T>>>,
}

/// Report from a sort: the sorted array plus metrics and optional trace.
pub type SortReport<T> = RunReport<Vec<T>, T>;

/// Report from binary search: the matching index (`None` when absent).
pub type SearchReport<T> = RunReport<Option<usize>, T>;

/// Report from the count-and-say generator: the final digit string; step
/// snapshots carry the digit characters of each row.
pub type SayReport = RunReport<String, char>;

impl<P, T> RunReport<P, T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// True when this report carries a step trace.
    pub fn is_traced(&self) -> bool {
        self.steps.is_some()
    }

    /// Number of recorded steps (0 for fast-variant reports).
    pub fn step_count(&self) -> usize {
        self.steps.as_ref().map_or(0, Vec::len)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<P: Debug, T> Display for RunReport<P, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Output: {:?}", self.output)?;
        if let Some(steps) = &self.steps {
            writeln!(f, "  Steps:  {} recorded", steps.len())?;
        }
        write!(f, "{}", self.metrics)
    }
}

//! Step records: one observable state transition per entry.
//!
//! ## Purpose
//!
//! This module defines the [`StepRecord`] log entry produced by the
//! step-tracked variants, and the closed [`StepKind`] vocabulary that tags
//! each entry. A renderer replays a run by drawing `array` and flashing
//! `highlights` for each record in order.
//!
//! ## Design notes
//!
//! * **Snapshots, not references**: every record owns a full copy of the
//!   working array at the instant of the step, so later mutation cannot
//!   corrupt history.
//! * **Closed vocabulary**: `StepKind` is a plain enum; each family uses
//!   its documented subset and renderers can match exhaustively.
//! * **Metrics at that instant**: the embedded [`Metrics`] value is the
//!   counter state when the step was appended, enabling per-step counter
//!   displays without recomputation.
//!
//! ## Invariants
//!
//! * Records are immutable once appended; the sequence is append-only.
//! * `highlights` indexes are valid positions in `array`.
//! * Trace length is proportional to the run's operation count.
//!
//! ## Non-goals
//!
//! * This module does not decide when steps are emitted.
//! * This module does not render anything.

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
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::metrics::Metrics;

// ============================================================================
// Step Vocabulary
// ============================================================================

/// Tag identifying what a step describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Run begins; the snapshot is the unmodified working array.
    Start,
    /// One three-way comparison between the highlighted positions.
    Compare,
    /// Two positions were exchanged.
    Swap,
    /// A swap was considered and skipped (element already in place).
    NoSwap,
    /// One element was copied one position over.
    Shift,
    /// A key was placed at its insertion point.
    Insert,
    /// A pass (or merge/radix range) begins.
    PassStart,
    /// A pass ends.
    PassEnd,
    /// A new running-minimum (or key) candidate was selected.
    Select,
    /// A pivot was chosen.
    Pivot,
    /// A partition completed; the highlight is the pivot's final slot.
    Partition,
    /// A merge of two adjacent runs completed.
    Merge,
    /// A subtree was restored to heap order.
    Heapify,
    /// An element was routed to its bucket or counted.
    Distribute,
    /// Bucketed elements were written back in order.
    Collect,
    /// One binary-search iteration; highlights are `[low, mid, high]`.
    Probe,
    /// The search target was located at the highlighted position.
    Found,
    /// The search window emptied without locating the target.
    NotFound,
    /// A sequence row was produced from the previous row.
    Expand,
    /// Run finished; the snapshot is the final state.
    Complete,
}

impl StepKind {
    /// Stable kebab-case name, suitable for renderer lookup tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::NoSwap => "no-swap",
            Self::Shift => "shift",
            Self::Insert => "insert",
            Self::PassStart => "pass-start",
            Self::PassEnd => "pass-end",
            Self::Select => "select",
            Self::Pivot => "pivot",
            Self::Partition => "partition",
            Self::Merge => "merge",
            Self::Heapify => "heapify",
            Self::Distribute => "distribute",
            Self::Collect => "collect",
            Self::Probe => "probe",
            Self::Found => "found",
            Self::NotFound => "not-found",
            Self::Expand => "expand",
            Self::Complete => "complete",
        }
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Step Record
// ============================================================================

/// One observable state transition in a step-tracked run.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord<T> {
    /// What this step describes.
    pub kind: StepKind,

    /// Full snapshot of the working array at this point.
    pub array: Vec<T>,

    /// Human-readable description of the step.
    pub message: String,

    /// Positions this step concerns (for highlighting).
    pub highlights: Vec<usize>,

    /// Counter state at the instant the step was appended.
    pub metrics: Metrics,
}

//! Step sinks: the capability that selects fast or step-tracked execution.
//!
//! ## Purpose
//!
//! This module defines the [`StepSink`] trait through which algorithms emit
//! step records, plus its two implementations: [`NullSink`] for the fast
//! variants and [`TraceSink`] for the step-tracked variants.
//!
//! ## Design notes
//!
//! * **One implementation per algorithm**: the sink replaces the
//!   copy/paste "fast vs. tracked" duplication; each algorithm is written
//!   once against the trait and the entry points choose the sink.
//! * **Lazy construction**: `record` receives a closure. `NullSink` never
//!   invokes it, so fast runs build no snapshots, format no messages, and
//!   allocate no step storage. Both sinks are zero-cost at the call site
//!   after monomorphization.
//!
//! ## Invariants
//!
//! * `TraceSink` is append-only; records are never reordered or mutated.
//! * `NullSink` keeps nothing and its `record` has no side effects.
//!
//! ## Non-goals
//!
//! * This module does not define the step vocabulary (see `record`).
//! * This module does not bound trace length; callers bound input size for
//!   step-tracked runs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::trace::record::StepRecord;

// ============================================================================
// Sink Capability
// ============================================================================

/// Receiver for step records emitted during a run.
pub trait StepSink<T> {
    /// True when records are actually being kept.
    fn is_recording(&self) -> bool;

    /// Offer a step. Implementations that keep records invoke `make` and
    /// append the result; the no-op sink drops the closure unevaluated.
    fn record<F>(&mut self, make: F)
    where
        F: FnOnce() -> StepRecord<T>;
}

// ============================================================================
// Null Sink (fast mode)
// ============================================================================

/// Sink that discards everything; the fast variants run against this.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<T> StepSink<T> for NullSink {
    #[inline]
    fn is_recording(&self) -> bool {
        false
    }

    #[inline]
    fn record<F>(&mut self, _make: F)
    where
        F: FnOnce() -> StepRecord<T>,
    {
    }
}

// ============================================================================
// Trace Sink (step-tracked mode)
// ============================================================================

/// Append-only sink backing the step-tracked variants.
#[derive(Debug, Clone)]
pub struct TraceSink<T> {
    steps: Vec<StepRecord<T>>,
}

impl<T> TraceSink<T> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no records have been appended.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// View the records appended so far.
    pub fn steps(&self) -> &[StepRecord<T>] {
        &self.steps
    }

    /// Consume the sink, yielding the ordered trace.
    pub fn into_steps(self) -> Vec<StepRecord<T>> {
        self.steps
    }
}

impl<T> Default for TraceSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StepSink<T> for TraceSink<T> {
    #[inline]
    fn is_recording(&self) -> bool {
        true
    }

    #[inline]
    fn record<F>(&mut self, make: F)
    where
        F: FnOnce() -> StepRecord<T>,
    {
        self.steps.push(make());
    }
}

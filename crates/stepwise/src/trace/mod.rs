//! Layer 3: Trace
//!
//! # Purpose
//!
//! This layer defines the step-record data model and the step-sink
//! capability that unifies the fast and step-tracked execution modes. Each
//! algorithm is written once against [`sink::StepSink`]; the fast entry
//! point plugs in [`sink::NullSink`] (records nothing, allocates nothing)
//! and the traced entry point plugs in [`sink::TraceSink`] (appends every
//! record).
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
//! Layer 3: Trace ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Step records and the step vocabulary.
pub mod record;

/// Step sinks: the no-op fast path and the appending trace.
pub mod sink;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::primitives::metrics::Metrics;
use crate::trace::record::{StepKind, StepRecord};
use crate::trace::sink::StepSink;

/// Build a step record lazily and hand it to the sink.
///
/// The snapshot clone and message formatting happen inside the closure, so
/// a [`sink::NullSink`] run never pays for either.
#[inline]
pub(crate) fn emit<T, S, M>(
    sink: &mut S,
    kind: StepKind,
    array: &[T],
    highlights: &[usize],
    metrics: &Metrics,
    message: M,
) where
    T: Clone,
    S: StepSink<T>,
    M: FnOnce() -> String,
{
    sink.record(|| StepRecord {
        kind,
        array: array.to_vec(),
        message: message(),
        highlights: highlights.to_vec(),
        metrics: *metrics,
    });
}

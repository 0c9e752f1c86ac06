//! Insertion sort with linear and binary insertion-point modes.
//!
//! ## Purpose
//!
//! Grow a sorted prefix by taking each key in turn, shifting greater
//! elements one position right, and placing the key at its insertion point.
//! [`InsertionMode::Binary`] locates the insertion point by binary search
//! over the sorted prefix — fewer comparisons on large prefixes, exactly
//! the same shifts.
//!
//! ## Design notes
//!
//! * **Stable**: the binary mode searches for the upper bound (first
//!   element strictly greater than the key), so equal keys keep their
//!   original order, matching the linear scan.
//! * **Shared core**: bucket sort reuses the slice-level routine for its
//!   per-bucket sorts, feeding the same metrics accumulator.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, shifts, insertions.
//! * **Steps**: `start`, `select`, `compare`, `shift`, `insert`,
//!   `complete`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::report::SortReport;
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::primitives::ops::{compare, shift, SortItem};
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Options
// ============================================================================

/// How the insertion point is located within the sorted prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionMode {
    /// Scan left from the key, one comparison per visited element.
    #[default]
    Linear,

    /// Binary search the sorted prefix for the upper bound of the key.
    Binary,
}

/// Configuration for insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOptions {
    /// Insertion-point location mode.
    pub mode: InsertionMode,
}

impl InsertionOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the insertion-point location mode.
    pub fn mode(mut self, mode: InsertionMode) -> Self {
        self.mode = mode;
        self
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending with the linear mode.
pub fn sort<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_with(input, &InsertionOptions::default())
}

/// Sort ascending with the linear mode, returning the full step trace.
pub fn sort_traced<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_traced_with(input, &InsertionOptions::default())
}

/// Sort ascending with explicit options.
pub fn sort_with<T: SortItem>(
    input: &[T],
    options: &InsertionOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut arr = input.to_vec();
    sort_slice(&mut arr, options.mode, &mut metrics, &mut NullSink);
    Ok(SortReport {
        output: arr,
        metrics,
        steps: None,
    })
}

/// Sort ascending with explicit options, returning the full step trace.
pub fn sort_traced_with<T: SortItem>(
    input: &[T],
    options: &InsertionOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let mut arr = input.to_vec();
    sort_slice(&mut arr, options.mode, &mut metrics, &mut sink);
    Ok(SortReport {
        output: arr,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

/// Insertion-sort a slice in place. Shared with bucket sort, whose
/// per-bucket sorts feed the same metrics accumulator.
pub(crate) fn sort_slice<T, S>(arr: &mut [T], mode: InsertionMode, metrics: &mut Metrics, sink: &mut S)
where
    T: SortItem,
    S: StepSink<T>,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    emit(sink, StepKind::Start, arr, &[], metrics, || {
        format!("insertion sort over {n} elements")
    });

    for i in 1..n {
        let key = arr[i];
        emit(sink, StepKind::Select, arr, &[i], metrics, || {
            format!("take key {key} from position {i}")
        });

        let pos = match mode {
            InsertionMode::Linear => locate_linear(arr, i, &key, metrics, sink),
            InsertionMode::Binary => locate_binary(arr, i, &key, metrics, sink),
        };

        // Shift the gap from i down to pos, one element at a time.
        for j in (pos..i).rev() {
            shift(arr, j, j + 1, metrics);
            emit(sink, StepKind::Shift, arr, &[j, j + 1], metrics, || {
                format!("shift position {} right", j)
            });
        }

        arr[pos] = key;
        metrics.record_insertion();
        emit(sink, StepKind::Insert, arr, &[pos], metrics, || {
            format!("insert {key} at position {pos}")
        });
    }

    emit(sink, StepKind::Complete, arr, &[], metrics, || {
        String::from("array sorted")
    });
}

/// Scan left from the key until a non-greater element appears.
fn locate_linear<T, S>(
    arr: &[T],
    i: usize,
    key: &T,
    metrics: &mut Metrics,
    sink: &mut S,
) -> usize
where
    T: SortItem,
    S: StepSink<T>,
{
    let mut pos = i;
    while pos > 0 {
        metrics.record_comparison();
        emit(sink, StepKind::Compare, arr, &[pos - 1, i], metrics, || {
            format!("compare {} with key {}", arr[pos - 1], key)
        });

        if compare(&arr[pos - 1], key) == Ordering::Greater {
            pos -= 1;
        } else {
            break;
        }
    }
    pos
}

/// Binary search the sorted prefix `arr[..i]` for the upper bound of the
/// key: the first position holding an element strictly greater than it.
fn locate_binary<T, S>(
    arr: &[T],
    i: usize,
    key: &T,
    metrics: &mut Metrics,
    sink: &mut S,
) -> usize
where
    T: SortItem,
    S: StepSink<T>,
{
    let mut lo = 0;
    let mut hi = i;
    while lo < hi {
        let mid = (lo + hi) / 2;
        metrics.record_comparison();
        emit(sink, StepKind::Compare, arr, &[mid, i], metrics, || {
            format!("probe {} against key {}", arr[mid], key)
        });

        if compare(&arr[mid], key) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

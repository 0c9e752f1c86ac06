//! Top-down stable merge sort.
//!
//! ## Purpose
//!
//! Recursive midpoint split followed by a stable merge of the two sorted
//! halves: when the heads compare equal, the left element is placed first,
//! so equal keys keep their original relative order.
//!
//! ## Design notes
//!
//! * **One auxiliary buffer**: a single scratch vector sized to the input
//!   is allocated up front and reused by every merge, never reallocated
//!   per call.
//! * **Half-open ranges**: internal ranges are `[lo, hi)`; a range of
//!   fewer than two elements is already sorted.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, shifts (one per element placed), merges.
//! * **Steps**: `start`, `pass-start` (per merge range), `compare`,
//!   `shift`, `merge`, `complete`.
//!
//! ## Invariants
//!
//! * Each merge reads only `aux[lo..hi]` and writes only `arr[lo..hi]`.
//! * Total shifts equal `n ⌈log2 n⌉` up to the uneven final level.

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
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::report::SortReport;
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::primitives::ops::{compare, SortItem};
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending, returning the result and aggregated metrics.
pub fn sort<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let output = run(input, &mut metrics, &mut NullSink);
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending, additionally returning the full step trace.
pub fn sort_traced<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run(input, &mut metrics, &mut sink);
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

fn run<T, S>(input: &[T], metrics: &mut Metrics, sink: &mut S) -> Vec<T>
where
    T: SortItem,
    S: StepSink<T>,
{
    let mut arr = input.to_vec();
    let n = arr.len();
    if n < 2 {
        return arr;
    }

    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("merge sort over {n} elements")
    });

    // Single scratch buffer, reused by every merge.
    let mut aux = arr.clone();
    sort_range(&mut arr, &mut aux, 0, n, metrics, sink);

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

fn sort_range<T, S>(
    arr: &mut [T],
    aux: &mut [T],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
    sink: &mut S,
) where
    T: SortItem,
    S: StepSink<T>,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, aux, lo, mid, metrics, sink);
    sort_range(arr, aux, mid, hi, metrics, sink);
    merge_range(arr, aux, lo, mid, hi, metrics, sink);
}

/// Merge the sorted runs `arr[lo..mid]` and `arr[mid..hi]`.
fn merge_range<T, S>(
    arr: &mut [T],
    aux: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    metrics: &mut Metrics,
    sink: &mut S,
) where
    T: SortItem,
    S: StepSink<T>,
{
    emit(sink, StepKind::PassStart, arr, &[lo, mid, hi - 1], metrics, || {
        format!("merge [{lo}, {mid}) with [{mid}, {hi})")
    });

    aux[lo..hi].copy_from_slice(&arr[lo..hi]);

    let mut i = lo;
    let mut j = mid;
    for k in lo..hi {
        let take_right = if i >= mid {
            true
        } else if j >= hi {
            false
        } else {
            metrics.record_comparison();
            emit(sink, StepKind::Compare, arr, &[k], metrics, || {
                format!("compare {} with {}", aux[i], aux[j])
            });
            // Stable: the right element wins only when strictly less.
            compare(&aux[j], &aux[i]) == Ordering::Less
        };

        if take_right {
            arr[k] = aux[j];
            j += 1;
        } else {
            arr[k] = aux[i];
            i += 1;
        }
        metrics.record_shift();
        emit(sink, StepKind::Shift, arr, &[k], metrics, || {
            format!("place {} at position {}", arr[k], k)
        });
    }

    metrics.record_merge();
    emit(sink, StepKind::Merge, arr, &[lo, hi - 1], metrics, || {
        format!("range [{lo}, {hi}) merged")
    });
}

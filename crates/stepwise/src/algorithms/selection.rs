//! Selection sort with leftmost tie-break.
//!
//! ## Purpose
//!
//! For each position `i`, scan the unsorted suffix for its minimum and swap
//! it into place. Ties break to the first occurrence (strict `<` while
//! scanning), and when the minimum already sits at `i` the swap is skipped
//! and a `no-swap` step records the decision.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, swaps.
//! * **Steps**: `start`, `compare`, `select`, `swap`/`no-swap`, `complete`.
//!
//! ## Invariants
//!
//! * Exactly `n(n-1)/2` comparisons for an input of `n` elements.
//! * At most `n-1` swaps; a swap is only performed when it changes the
//!   array.

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
use crate::primitives::ops::{compare, swap, SortItem};
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
        format!("selection sort over {n} elements")
    });

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            metrics.record_comparison();
            emit(sink, StepKind::Compare, &arr, &[j, min_idx], metrics, || {
                format!("compare {} with current minimum {}", arr[j], arr[min_idx])
            });

            // Strict less-than keeps the leftmost of equal minimums.
            if compare(&arr[j], &arr[min_idx]) == Ordering::Less {
                min_idx = j;
                emit(sink, StepKind::Select, &arr, &[j], metrics, || {
                    format!("new minimum {} at position {}", arr[j], j)
                });
            }
        }

        if min_idx != i {
            swap(&mut arr, i, min_idx, metrics);
            emit(sink, StepKind::Swap, &arr, &[i, min_idx], metrics, || {
                format!("swap minimum into position {i}")
            });
        } else {
            emit(sink, StepKind::NoSwap, &arr, &[i], metrics, || {
                format!("position {i} already holds its minimum")
            });
        }
    }

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

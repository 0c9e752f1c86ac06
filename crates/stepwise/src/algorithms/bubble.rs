//! Bubble sort with early termination.
//!
//! ## Purpose
//!
//! Adjacent-pair comparison sort: each pass walks the unsorted prefix left
//! to right and swaps out-of-order neighbors. A pass that performs zero
//! swaps proves the array sorted and ends the run, so already-sorted input
//! costs exactly one pass — O(n) comparisons and no swaps.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, swaps, passes.
//! * **Steps**: `start`, `pass-start`, `compare`, `swap`, `pass-end`,
//!   `complete`.
//!
//! ## Invariants
//!
//! * After pass `p`, the last `p` positions hold their final values and are
//!   excluded from later passes.
//! * Empty and single-element inputs return immediately with zero counters
//!   and an empty trace.

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
        format!("bubble sort over {n} elements")
    });

    let mut pass = 0;
    loop {
        pass += 1;
        metrics.record_pass();
        emit(sink, StepKind::PassStart, &arr, &[], metrics, || {
            format!("pass {pass}")
        });

        // Positions beyond n - pass already hold their final values.
        let limit = n - pass;
        let mut swapped = false;
        for i in 0..limit {
            metrics.record_comparison();
            emit(sink, StepKind::Compare, &arr, &[i, i + 1], metrics, || {
                format!("compare {} and {}", arr[i], arr[i + 1])
            });

            if compare(&arr[i], &arr[i + 1]) == Ordering::Greater {
                swap(&mut arr, i, i + 1, metrics);
                swapped = true;
                emit(sink, StepKind::Swap, &arr, &[i, i + 1], metrics, || {
                    format!("swap positions {} and {}", i, i + 1)
                });
            }
        }

        emit(sink, StepKind::PassEnd, &arr, &[], metrics, || {
            if swapped {
                format!("pass {pass} finished")
            } else {
                format!("pass {pass} performed no swaps")
            }
        });

        if !swapped || limit <= 1 {
            break;
        }
    }

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

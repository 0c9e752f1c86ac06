//! Binary search over a sorted ascending slice.
//!
//! ## Purpose
//!
//! Locate a target in `⌈log2(n)⌉ + 1` probes at most, in an iterative and
//! a recursive form that narrow identically (`mid = ⌊(low + high) / 2⌋`,
//! three-way comparison) and therefore always return the same index.
//!
//! ## Design notes
//!
//! * **Validation first**: an empty slice and out-of-order input are
//!   rejected before any probing.
//! * **`None` for absent**: the engine reports a missing target as `None`
//!   rather than a sentinel index.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons (one per probe), iterations.
//! * **Steps**: `start`, one `probe` per iteration carrying the current
//!   `[low, mid, high]` window in its highlights, then `found` or
//!   `not-found`.
//!
//! ## Invariants
//!
//! * The target, if present, is always inside `[low, high]`.
//! * The window shrinks on every iteration; termination is guaranteed.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::report::SearchReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::primitives::ops::{compare, SortItem};
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Entry Points
// ============================================================================

/// Search iteratively, returning the matching index and metrics.
pub fn iterative<T: SortItem>(
    haystack: &[T],
    target: T,
) -> Result<SearchReport<T>, StepwiseError> {
    Validator::validate_search_input(haystack)?;
    let mut metrics = Metrics::new();
    let output = run_iterative(haystack, target, &mut metrics, &mut NullSink);
    Ok(SearchReport {
        output,
        metrics,
        steps: None,
    })
}

/// Search iteratively, additionally returning the probe trace.
pub fn iterative_traced<T: SortItem>(
    haystack: &[T],
    target: T,
) -> Result<SearchReport<T>, StepwiseError> {
    Validator::validate_search_input(haystack)?;
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run_iterative(haystack, target, &mut metrics, &mut sink);
    Ok(SearchReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

/// Search recursively; returns the same index as [`iterative`] for the
/// same input.
pub fn recursive<T: SortItem>(
    haystack: &[T],
    target: T,
) -> Result<SearchReport<T>, StepwiseError> {
    Validator::validate_search_input(haystack)?;
    let mut metrics = Metrics::new();
    let output = run_recursive_entry(haystack, target, &mut metrics, &mut NullSink);
    Ok(SearchReport {
        output,
        metrics,
        steps: None,
    })
}

/// Search recursively, additionally returning the probe trace.
pub fn recursive_traced<T: SortItem>(
    haystack: &[T],
    target: T,
) -> Result<SearchReport<T>, StepwiseError> {
    Validator::validate_search_input(haystack)?;
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run_recursive_entry(haystack, target, &mut metrics, &mut sink);
    Ok(SearchReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Iterative Core
// ============================================================================

fn run_iterative<T, S>(
    haystack: &[T],
    target: T,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Option<usize>
where
    T: SortItem,
    S: StepSink<T>,
{
    let arr = haystack.to_vec();

    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("binary search for {} in {} elements", target, arr.len())
    });

    let mut lo: i64 = 0;
    let mut hi: i64 = arr.len() as i64 - 1;

    while lo <= hi {
        metrics.record_iteration();
        let mid = (lo + hi) / 2;
        metrics.record_comparison();
        emit(
            sink,
            StepKind::Probe,
            &arr,
            &[lo as usize, mid as usize, hi as usize],
            metrics,
            || format!("window [{lo}, {hi}], probe {} at {mid}", arr[mid as usize]),
        );

        match compare(&arr[mid as usize], &target) {
            Ordering::Equal => {
                emit(sink, StepKind::Found, &arr, &[mid as usize], metrics, || {
                    format!("{target} found at index {mid}")
                });
                return Some(mid as usize);
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid - 1,
        }
    }

    emit(sink, StepKind::NotFound, &arr, &[], metrics, || {
        format!("{target} is not present")
    });
    None
}

// ============================================================================
// Recursive Core
// ============================================================================

fn run_recursive_entry<T, S>(
    haystack: &[T],
    target: T,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Option<usize>
where
    T: SortItem,
    S: StepSink<T>,
{
    let arr = haystack.to_vec();

    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("binary search (recursive) for {} in {} elements", target, arr.len())
    });

    let hi = arr.len() as i64 - 1;
    let found = run_recursive(&arr, target, 0, hi, metrics, sink);

    if found.is_none() {
        emit(sink, StepKind::NotFound, &arr, &[], metrics, || {
            format!("{target} is not present")
        });
    }
    found
}

fn run_recursive<T, S>(
    arr: &[T],
    target: T,
    lo: i64,
    hi: i64,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Option<usize>
where
    T: SortItem,
    S: StepSink<T>,
{
    if lo > hi {
        return None;
    }

    metrics.record_iteration();
    let mid = (lo + hi) / 2;
    metrics.record_comparison();
    emit(
        sink,
        StepKind::Probe,
        arr,
        &[lo as usize, mid as usize, hi as usize],
        metrics,
        || format!("window [{lo}, {hi}], probe {} at {mid}", arr[mid as usize]),
    );

    match compare(&arr[mid as usize], &target) {
        Ordering::Equal => {
            emit(sink, StepKind::Found, arr, &[mid as usize], metrics, || {
                format!("{target} found at index {mid}")
            });
            Some(mid as usize)
        }
        Ordering::Less => run_recursive(arr, target, mid + 1, hi, metrics, sink),
        Ordering::Greater => run_recursive(arr, target, lo, mid - 1, metrics, sink),
    }
}

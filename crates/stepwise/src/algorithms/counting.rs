//! Stable counting sort over non-negative integer keys.
//!
//! ## Purpose
//!
//! Count occurrences of every key, turn the counts into cumulative
//! positions, then place elements by scanning the input right to left so
//! equal keys keep their original relative order.
//!
//! ## Design notes
//!
//! * **Validation first**: negative keys are rejected, with the offending
//!   value and index, before anything is counted or copied.
//! * **Stability**: the placement scan runs right to left and decrements
//!   the cumulative count before placing, the textbook stable formulation.
//!
//! ## Key concepts
//!
//! * **Counters**: bucket_ops (count increments and placements), passes
//!   (count scan, offset transform, placement scan).
//! * **Steps**: `start`, `distribute` (counting), `collect` (placement;
//!   highlights are `[input_index, output_slot]`), `complete`.
//!
//! ## Invariants
//!
//! * The count array is sized `max + 1`.
//! * For equal keys, a smaller input index is placed at a smaller output
//!   slot.

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
use core::fmt::Display;
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::report::SortReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending, returning the result and aggregated metrics.
pub fn sort<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    let mut metrics = Metrics::new();
    let output = run(input, &mut metrics, &mut NullSink)?;
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending, additionally returning the full step trace.
pub fn sort_traced<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run(input, &mut metrics, &mut sink)?;
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

fn run<T, S>(input: &[T], metrics: &mut Metrics, sink: &mut S) -> Result<Vec<T>, StepwiseError>
where
    T: PrimInt + Display,
    S: StepSink<T>,
{
    Validator::validate_non_negative(input)?;

    let arr = input.to_vec();
    let n = arr.len();
    if n < 2 {
        return Ok(arr);
    }

    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("counting sort over {n} elements")
    });

    let max = arr.iter().copied().fold(T::zero(), |m, v| if v > m { v } else { m });
    let mut counts = vec![0usize; max.to_usize().unwrap() + 1];

    // Count every key.
    for (i, &v) in arr.iter().enumerate() {
        counts[v.to_usize().unwrap()] += 1;
        metrics.record_bucket_op();
        emit(sink, StepKind::Distribute, &arr, &[i], metrics, || {
            format!("count key {v}")
        });
    }
    metrics.record_pass();

    // Cumulative counts: counts[k] becomes the number of keys <= k.
    let mut total = 0usize;
    for c in counts.iter_mut() {
        total += *c;
        *c = total;
    }
    metrics.record_pass();

    // Right-to-left placement keeps equal keys in input order.
    let mut out = vec![T::zero(); n];
    for i in (0..n).rev() {
        let key = arr[i].to_usize().unwrap();
        counts[key] -= 1;
        let slot = counts[key];
        out[slot] = arr[i];
        metrics.record_bucket_op();
        emit(sink, StepKind::Collect, &out, &[i, slot], metrics, || {
            format!("place {} from input {} at slot {}", arr[i], i, slot)
        });
    }
    metrics.record_pass();

    emit(sink, StepKind::Complete, &out, &[], metrics, || {
        String::from("array sorted")
    });

    Ok(out)
}

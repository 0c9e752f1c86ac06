//! Least-significant-digit radix sort.
//!
//! ## Purpose
//!
//! Sort non-negative integers digit by digit, least significant first: each
//! pass routes every element to the bucket for its digit at the current
//! place and rebuilds the array in bucket order. Appending to buckets in
//! scan order makes every pass stable, which is what makes the whole sort
//! correct.
//!
//! ## Design notes
//!
//! * **Pass count**: exactly the digit count of the maximum value in the
//!   configured base; a single-digit input is done in one pass.
//! * **Validation first**: the base and the non-negativity of every key
//!   are checked before any copying or bucketing.
//!
//! ## Key concepts
//!
//! * **Counters**: bucket_ops (one per routing and per write-back),
//!   passes.
//! * **Steps**: `pass-start`, `distribute`, `collect`, `pass-end` per
//!   pass, bracketed by `start` and `complete`.
//!
//! ## Invariants
//!
//! * After pass `p`, the array is sorted by its `p` least significant
//!   digits.

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
use crate::math::digits::{digit_at, digit_count};
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Options
// ============================================================================

/// Configuration for radix sort.
#[derive(Debug, Clone, Copy)]
pub struct RadixOptions {
    /// Digit base; 10 by default.
    pub base: u32,
}

impl Default for RadixOptions {
    fn default() -> Self {
        Self { base: 10 }
    }
}

impl RadixOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digit base.
    pub fn base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending in base 10.
pub fn sort<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    sort_with(input, &RadixOptions::default())
}

/// Sort ascending in base 10, returning the full step trace.
pub fn sort_traced<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    sort_traced_with(input, &RadixOptions::default())
}

/// Sort ascending with an explicit base.
pub fn sort_with<T>(input: &[T], options: &RadixOptions) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    let mut metrics = Metrics::new();
    let output = run(input, options, &mut metrics, &mut NullSink)?;
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending with an explicit base, returning the full step trace.
pub fn sort_traced_with<T>(
    input: &[T],
    options: &RadixOptions,
) -> Result<SortReport<T>, StepwiseError>
where
    T: PrimInt + Display,
{
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run(input, options, &mut metrics, &mut sink)?;
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

fn run<T, S>(
    input: &[T],
    options: &RadixOptions,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Result<Vec<T>, StepwiseError>
where
    T: PrimInt + Display,
    S: StepSink<T>,
{
    Validator::validate_base(options.base)?;
    Validator::validate_non_negative(input)?;

    let mut arr = input.to_vec();
    let n = arr.len();
    if n < 2 {
        return Ok(arr);
    }

    let base = options.base;
    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("radix sort (base {base}) over {n} elements")
    });

    let max = arr.iter().copied().fold(T::zero(), |m, v| if v > m { v } else { m });
    let passes = digit_count(max, base);

    for place in 0..passes {
        metrics.record_pass();
        emit(sink, StepKind::PassStart, &arr, &[], metrics, || {
            format!("pass {} of {passes}: digit place {place}", place + 1)
        });

        // Stable within the pass: buckets are appended in scan order.
        let mut buckets: Vec<Vec<T>> = vec![Vec::new(); base as usize];
        for (i, &v) in arr.iter().enumerate() {
            let d = digit_at(v, place, base);
            buckets[d].push(v);
            metrics.record_bucket_op();
            emit(sink, StepKind::Distribute, &arr, &[i], metrics, || {
                format!("digit {d} of {v} routes to bucket {d}")
            });
        }

        let mut k = 0;
        for bucket in &buckets {
            for &v in bucket {
                arr[k] = v;
                k += 1;
                metrics.record_bucket_op();
            }
        }
        emit(sink, StepKind::Collect, &arr, &[], metrics, || {
            String::from("array rebuilt in bucket order")
        });
        emit(sink, StepKind::PassEnd, &arr, &[], metrics, || {
            format!("pass {} finished", place + 1)
        });
    }

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    Ok(arr)
}

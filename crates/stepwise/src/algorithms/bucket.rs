//! Bucket sort over floats with insertion-sorted buckets.
//!
//! ## Purpose
//!
//! Split the value range `[min, max]` into equal-width buckets (⌊√n⌋ of
//! them unless configured), route every element to its bucket, sort each
//! bucket with the shared insertion-sort core, and concatenate the buckets
//! in ascending index order.
//!
//! ## Design notes
//!
//! * **Clamped index**: `⌊(v − min) / width⌋` clamped to the last bucket,
//!   so `v = max` stays in range; a zero width (all elements equal) maps
//!   everything to bucket 0.
//! * **Shared accounting**: the per-bucket insertion sorts feed the same
//!   metrics accumulator, so the report's comparisons and shifts include
//!   the inner sorting work. Inner sorts emit no steps of their own —
//!   bucket-local indexes would not map onto full-array snapshots — the
//!   traced variant speaks the distribution vocabulary (`distribute`,
//!   `collect`).
//!
//! ## Key concepts
//!
//! * **Counters**: bucket_ops, comparisons, shifts, insertions.
//! * **Steps**: `start`, `distribute`, `collect` (one per non-empty
//!   bucket, snapshotting the output built so far), `complete`.

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
use num_traits::Float;

// Internal dependencies
use crate::algorithms::insertion::{self, InsertionMode};
use crate::engine::report::SortReport;
use crate::engine::validator::Validator;
use crate::math::buckets::{bucket_index, default_bucket_count};
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Options
// ============================================================================

/// Configuration for bucket sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketOptions {
    /// Number of buckets; ⌊√n⌋ when unset.
    pub bucket_count: Option<usize>,
}

impl BucketOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit bucket count.
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = Some(count);
        self
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending with ⌊√n⌋ buckets.
pub fn sort<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: Float + Display,
{
    sort_with(input, &BucketOptions::default())
}

/// Sort ascending with ⌊√n⌋ buckets, returning the full step trace.
pub fn sort_traced<T>(input: &[T]) -> Result<SortReport<T>, StepwiseError>
where
    T: Float + Display,
{
    sort_traced_with(input, &BucketOptions::default())
}

/// Sort ascending with explicit options.
pub fn sort_with<T>(input: &[T], options: &BucketOptions) -> Result<SortReport<T>, StepwiseError>
where
    T: Float + Display,
{
    let mut metrics = Metrics::new();
    let output = run(input, options, &mut metrics, &mut NullSink)?;
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending with explicit options, returning the full step trace.
pub fn sort_traced_with<T>(
    input: &[T],
    options: &BucketOptions,
) -> Result<SortReport<T>, StepwiseError>
where
    T: Float + Display,
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
    options: &BucketOptions,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Result<Vec<T>, StepwiseError>
where
    T: Float + Display,
    S: StepSink<T>,
{
    if let Some(count) = options.bucket_count {
        Validator::validate_bucket_count(count)?;
    }

    let arr = input.to_vec();
    let n = arr.len();
    if n < 2 {
        return Ok(arr);
    }

    let count = options.bucket_count.unwrap_or_else(|| default_bucket_count(n));

    emit(sink, StepKind::Start, &arr, &[], metrics, || {
        format!("bucket sort over {n} elements into {count} buckets")
    });

    let mut min = arr[0];
    let mut max = arr[0];
    for &v in &arr[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let width = (max - min) / T::from(count).unwrap();

    // Distribute every element to its bucket.
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); count];
    for (i, &v) in arr.iter().enumerate() {
        let b = bucket_index(v, min, width, count);
        buckets[b].push(v);
        metrics.record_bucket_op();
        emit(sink, StepKind::Distribute, &arr, &[i], metrics, || {
            format!("{v} routed to bucket {b}")
        });
    }

    // Sort each bucket in place, then concatenate in index order.
    let mut out: Vec<T> = Vec::with_capacity(n);
    for (b, bucket) in buckets.iter_mut().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        insertion::sort_slice(bucket, InsertionMode::Linear, metrics, &mut NullSink);

        let lo = out.len();
        out.extend_from_slice(bucket);
        metrics.record_bucket_op();
        emit(sink, StepKind::Collect, &out, &[lo, out.len() - 1], metrics, || {
            format!("bucket {b} collected into positions [{}, {}]", lo, out.len() - 1)
        });
    }

    emit(sink, StepKind::Complete, &out, &[], metrics, || {
        String::from("array sorted")
    });

    Ok(out)
}

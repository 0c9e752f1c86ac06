//! Tests for the counting, bucket, and radix sort families.
//!
//! These tests verify:
//! - Sorting correctness for each distribution family
//! - Counting sort's stability (via the step trace) and negative-key
//!   rejection
//! - Bucket sort's default ⌊√n⌋ bucket count and clamped indexing
//! - Radix sort's pass count and per-pass stability
//! - Option validation (base, bucket count)
//!
//! ## Test Organization
//!
//! 1. **Counting Sort** - Correctness, stability, rejection
//! 2. **Bucket Sort** - Floats, options, degenerate ranges
//! 3. **Radix Sort** - Pass counts, bases, stability
//! 4. **Boundaries** - Trivial inputs

use approx::assert_relative_eq;

use stepwise::prelude::*;

// ============================================================================
// Counting Sort Tests
// ============================================================================

/// The reference scenario sorts correctly.
#[test]
fn test_counting_sorts_scenario() {
    let report = counting::sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap();

    assert_eq!(report.output, vec![1, 2, 2, 3, 3, 4, 8]);
    assert!(report.metrics.bucket_ops > 0);
}

/// Equal keys keep their input order: for every pair of equal keys, the
/// one with the smaller input index lands in the smaller output slot.
///
/// Each `collect` step's highlights are `[input_index, output_slot]`.
#[test]
fn test_counting_stable_via_trace() {
    let input = [4, 2, 2, 8, 3, 3, 1];
    let report = counting::sort_traced(&input).unwrap();
    let steps = report.steps.unwrap();

    let placements: Vec<(usize, usize)> = steps
        .iter()
        .filter(|s| s.kind == StepKind::Collect)
        .map(|s| (s.highlights[0], s.highlights[1]))
        .collect();
    assert_eq!(placements.len(), input.len());

    let slot_of = |input_index: usize| {
        placements
            .iter()
            .find(|(i, _)| *i == input_index)
            .map(|(_, slot)| *slot)
            .unwrap()
    };

    // The two 2s (inputs 1 and 2) and the two 3s (inputs 4 and 5).
    assert!(slot_of(1) < slot_of(2));
    assert!(slot_of(4) < slot_of(5));
}

/// A negative key is rejected with its value and position, before any
/// work.
#[test]
fn test_counting_rejects_negative() {
    let err = counting::sort(&[3, -7, 2]).unwrap_err();
    assert_eq!(err, StepwiseError::NegativeValue { value: -7, index: 1 });

    let traced = counting::sort_traced(&[-1]).unwrap_err();
    assert_eq!(traced, StepwiseError::NegativeValue { value: -1, index: 0 });
}

/// Zero keys are valid.
#[test]
fn test_counting_accepts_zero() {
    let report = counting::sort(&[0, 5, 0, 3]).unwrap();
    assert_eq!(report.output, vec![0, 0, 3, 5]);
}

// ============================================================================
// Bucket Sort Tests
// ============================================================================

/// Bucket sort orders floats ascending.
#[test]
fn test_bucket_sorts_floats() {
    let report = bucket::sort(&[0.42, 4.21, 0.33, 2.12, 10.52, 4.0]).unwrap();

    assert_eq!(report.output, vec![0.33, 0.42, 2.12, 4.0, 4.21, 10.52]);
    assert_relative_eq!(report.output[0], 0.33);
    // Inner insertion sorts flow into the same accumulator.
    assert!(report.metrics.comparisons > 0);
    assert!(report.metrics.bucket_ops > 0);
}

/// An explicit bucket count is honored; one bucket degenerates into a
/// single insertion sort.
#[test]
fn test_bucket_explicit_count() {
    let options = BucketOptions::new().bucket_count(1);
    let report = bucket::sort_with(&[3.5, 1.25, 2.75], &options).unwrap();

    assert_eq!(report.output, vec![1.25, 2.75, 3.5]);
}

/// A zero bucket count is rejected.
#[test]
fn test_bucket_rejects_zero_count() {
    let options = BucketOptions::new().bucket_count(0);
    let err = bucket::sort_with(&[1.0, 2.0], &options).unwrap_err();
    assert_eq!(err, StepwiseError::InvalidBucketCount(0));
}

/// All-equal input has a zero-width range; everything lands in bucket 0.
#[test]
fn test_bucket_all_equal() {
    let report = bucket::sort(&[2.5, 2.5, 2.5, 2.5]).unwrap();
    assert_eq!(report.output, vec![2.5, 2.5, 2.5, 2.5]);
}

/// The traced variant routes every element before collecting any bucket.
#[test]
fn test_bucket_trace_distributes_then_collects() {
    let report = bucket::sort_traced(&[0.9, 0.1, 0.5, 0.7]).unwrap();
    let steps = report.steps.unwrap();

    let distributes = steps.iter().filter(|s| s.kind == StepKind::Distribute).count();
    assert_eq!(distributes, 4);

    let first_collect = steps.iter().position(|s| s.kind == StepKind::Collect).unwrap();
    let last_distribute = steps
        .iter()
        .rposition(|s| s.kind == StepKind::Distribute)
        .unwrap();
    assert!(last_distribute < first_collect);
}

// ============================================================================
// Radix Sort Tests
// ============================================================================

/// Radix sort orders a classic multi-digit input; the pass count equals
/// the digit count of the maximum.
#[test]
fn test_radix_sorts_with_expected_passes() {
    let report = radix::sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap();

    assert_eq!(report.output, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    // max = 802 has three digits in base 10.
    assert_eq!(report.metrics.passes, 3);
}

/// A non-default base still sorts; fewer digits mean fewer passes.
#[test]
fn test_radix_custom_base() {
    let options = RadixOptions::new().base(256);
    let report = radix::sort_with(&[70_000, 255, 65_536, 1], &options).unwrap();

    assert_eq!(report.output, vec![1, 255, 65_536, 70_000]);
    // max = 70000 has three base-256 digits.
    assert_eq!(report.metrics.passes, 3);
}

/// Base 0 and 1 are rejected.
#[test]
fn test_radix_rejects_bad_base() {
    for base in [0, 1] {
        let options = RadixOptions::new().base(base);
        let err = radix::sort_with(&[1, 2], &options).unwrap_err();
        assert_eq!(err, StepwiseError::InvalidBase(base));
    }
}

/// Negative keys are rejected like counting sort.
#[test]
fn test_radix_rejects_negative() {
    let err = radix::sort(&[5, 1, -2]).unwrap_err();
    assert_eq!(err, StepwiseError::NegativeValue { value: -2, index: 2 });
}

/// Each pass is stable: elements with equal current digits keep their
/// order, visible in the first pass-end snapshot.
#[test]
fn test_radix_pass_stability() {
    // Both share the units digit 1; the first pass must not reorder them.
    let report = radix::sort_traced(&[21, 11]).unwrap();
    let steps = report.steps.unwrap();

    let first_pass_end = steps.iter().find(|s| s.kind == StepKind::PassEnd).unwrap();
    assert_eq!(first_pass_end.array, vec![21, 11]);

    // The second pass orders them by the tens digit.
    assert_eq!(report.output, vec![11, 21]);
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Distribution families return trivial inputs unchanged with zero
/// counters.
#[test]
fn test_distribution_trivial_inputs() {
    assert!(counting::sort::<i64>(&[]).unwrap().output.is_empty());
    assert!(radix::sort::<i64>(&[]).unwrap().output.is_empty());
    assert!(bucket::sort::<f64>(&[]).unwrap().output.is_empty());

    assert_eq!(counting::sort(&[7]).unwrap().output, vec![7]);
    assert_eq!(radix::sort(&[7]).unwrap().output, vec![7]);
    assert_eq!(bucket::sort(&[7.0]).unwrap().output, vec![7.0]);

    let single = counting::sort(&[7]).unwrap();
    assert_eq!(single.metrics, Metrics::new());
}

//! Tests for binary search.
//!
//! These tests verify:
//! - The reference lookup scenario
//! - Agreement between the iterative and recursive variants
//! - Precondition rejection (empty, unsorted)
//! - The worst-case iteration bound
//! - Probe windows in the step trace
//!
//! ## Test Organization
//!
//! 1. **Lookup** - Present and absent targets
//! 2. **Variant Agreement** - Same index from both forms
//! 3. **Preconditions** - Rejection before any probing
//! 4. **Iteration Bound** - ⌈log2(n)⌉ + 1 worst case
//! 5. **Trace** - Probe windows and outcomes

use stepwise::prelude::*;

const HAYSTACK: [i32; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

// ============================================================================
// Lookup Tests
// ============================================================================

/// The reference scenario finds index 3 in a single probe.
#[test]
fn test_search_finds_scenario_target() {
    let report = search::iterative(&HAYSTACK, 7).unwrap();

    assert_eq!(report.output, Some(3));
    // 7 sits exactly at the first midpoint.
    assert_eq!(report.metrics.iterations, 1);
}

/// Every present element is found at its own index.
#[test]
fn test_search_finds_every_element() {
    for (i, &target) in HAYSTACK.iter().enumerate() {
        let report = search::iterative(&HAYSTACK, target).unwrap();
        assert_eq!(report.output, Some(i));
    }
}

/// Absent targets report `None`.
#[test]
fn test_search_absent_targets() {
    for target in [0, 2, 8, 16] {
        let report = search::iterative(&HAYSTACK, target).unwrap();
        assert_eq!(report.output, None);
    }
}

// ============================================================================
// Variant Agreement Tests
// ============================================================================

/// Both variants narrow identically and return the same index for every
/// target, present or absent.
#[test]
fn test_search_recursive_matches_iterative() {
    for target in -1..=17 {
        let a = search::iterative(&HAYSTACK, target).unwrap();
        let b = search::recursive(&HAYSTACK, target).unwrap();

        assert_eq!(a.output, b.output, "variants disagree for target {target}");
        assert_eq!(a.metrics.iterations, b.metrics.iterations);
        assert_eq!(a.metrics.comparisons, b.metrics.comparisons);
    }
}

// ============================================================================
// Precondition Tests
// ============================================================================

/// An empty haystack is rejected.
#[test]
fn test_search_rejects_empty() {
    let err = search::iterative::<i32>(&[], 5).unwrap_err();
    assert_eq!(err, StepwiseError::EmptyInput);

    let err = search::recursive::<i32>(&[], 5).unwrap_err();
    assert_eq!(err, StepwiseError::EmptyInput);
}

/// Unsorted input is rejected with the first offending position.
#[test]
fn test_search_rejects_unsorted() {
    let err = search::iterative(&[3, 1, 2], 2).unwrap_err();
    assert_eq!(err, StepwiseError::UnsortedInput { index: 1 });

    let err = search::iterative(&[1, 2, 5, 4], 4).unwrap_err();
    assert_eq!(err, StepwiseError::UnsortedInput { index: 3 });
}

/// Equal neighbors are still ascending.
#[test]
fn test_search_accepts_duplicates() {
    let report = search::iterative(&[1, 2, 2, 3], 3).unwrap();
    assert_eq!(report.output, Some(3));
}

// ============================================================================
// Iteration Bound Tests
// ============================================================================

/// No lookup exceeds ⌈log2(n)⌉ + 1 iterations.
#[test]
fn test_search_iteration_bound() {
    let haystack: Vec<i32> = (0..100).map(|i| i * 2).collect();
    // ⌈log2(100)⌉ + 1 = 8.
    let bound = 8;

    for target in -1..=200 {
        let report = search::iterative(&haystack, target).unwrap();
        assert!(
            report.metrics.iterations <= bound,
            "target {target} took {} iterations",
            report.metrics.iterations
        );
    }
}

// ============================================================================
// Trace Tests
// ============================================================================

/// Probe steps carry the `[low, mid, high]` window; the first probe spans
/// the whole array.
#[test]
fn test_search_trace_windows() {
    let report = search::iterative_traced(&HAYSTACK, 11).unwrap();
    let steps = report.steps.unwrap();

    let probes: Vec<_> = steps.iter().filter(|s| s.kind == StepKind::Probe).collect();
    assert_eq!(probes[0].highlights, vec![0, 3, 7]);

    // Windows narrow monotonically.
    for pair in probes.windows(2) {
        let (prev, next) = (&pair[0].highlights, &pair[1].highlights);
        assert!(next[2] - next[0] < prev[2] - prev[0]);
    }

    assert_eq!(steps.last().unwrap().kind, StepKind::Found);
}

/// A miss ends the trace with a not-found step.
#[test]
fn test_search_trace_not_found() {
    let report = search::iterative_traced(&HAYSTACK, 6).unwrap();
    let steps = report.steps.unwrap();

    assert_eq!(report.output, None);
    assert_eq!(steps.last().unwrap().kind, StepKind::NotFound);
}

//! Cross-family agreement tests for the fast and step-tracked variants.
//!
//! These tests verify the core engine contract: the fast and step-tracked
//! entry points of every family run the same sink-generic implementation,
//! so their primary results and aggregated metrics are identical, and only
//! the traced variant carries steps.
//!
//! ## Test Organization
//!
//! 1. **Sort Agreement** - All nine sorts over shared fixtures
//! 2. **Trace Shape** - Presence, final snapshot, bracketing
//! 3. **Snapshot Integrity** - Traces are copies, not references

use stepwise::prelude::*;

const INT_FIXTURES: [&[i32]; 5] = [
    &[],
    &[1],
    &[5, 1, 4, 2, 8],
    &[9, 9, 9, 1, 1, 0],
    &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
];

// ============================================================================
// Sort Agreement Tests
// ============================================================================

/// Fast and traced variants of every integer-capable sort agree on output
/// and metrics for every fixture.
#[test]
fn test_integer_sorts_fast_traced_agree() {
    let registry = integer_registry::<i32>();

    for entry in registry.entries() {
        for input in INT_FIXTURES {
            let fast = (entry.fast)(input).unwrap();
            let traced = (entry.traced)(input).unwrap();

            assert_eq!(
                fast.output,
                traced.output,
                "{} outputs diverge on {input:?}",
                entry.algorithm.name()
            );
            assert_eq!(
                fast.metrics,
                traced.metrics,
                "{} metrics diverge on {input:?}",
                entry.algorithm.name()
            );
            assert!(fast.steps.is_none());
            assert!(traced.steps.is_some());
        }
    }
}

/// The float registry (comparison sorts plus bucket) agrees the same way.
#[test]
fn test_float_sorts_fast_traced_agree() {
    let registry = float_registry::<f64>();
    let input = [2.5, -1.0, 3.75, 0.0, 2.5];

    for entry in registry.entries() {
        let fast = (entry.fast)(&input).unwrap();
        let traced = (entry.traced)(&input).unwrap();

        assert_eq!(fast.output, traced.output, "{}", entry.algorithm.name());
        assert_eq!(fast.metrics, traced.metrics, "{}", entry.algorithm.name());
    }
}

/// Binary search variants agree between execution modes as well.
#[test]
fn test_search_fast_traced_agree() {
    let haystack = [2, 4, 6, 8, 10];

    for target in 0..12 {
        let fast = search::iterative(&haystack, target).unwrap();
        let traced = search::iterative_traced(&haystack, target).unwrap();

        assert_eq!(fast.output, traced.output);
        assert_eq!(fast.metrics, traced.metrics);
        assert!(traced.step_count() > 0);
        assert_eq!(fast.step_count(), 0);
    }
}

// ============================================================================
// Trace Shape Tests
// ============================================================================

/// For non-trivial input, every sort's trace starts with `start`, ends
/// with `complete`, and its final snapshot equals the output.
#[test]
fn test_sort_traces_bracket_the_run() {
    let registry = integer_registry::<i32>();
    let input = [5, 3, 8, 1, 9, 2, 7];

    for entry in registry.entries() {
        let report = (entry.traced)(&input).unwrap();
        let steps = report.steps.as_ref().unwrap();

        assert!(!steps.is_empty(), "{}", entry.algorithm.name());
        assert_eq!(steps.first().unwrap().kind, StepKind::Start);
        assert_eq!(steps.last().unwrap().kind, StepKind::Complete);
        assert_eq!(
            steps.last().unwrap().array,
            report.output,
            "{} final snapshot diverges",
            entry.algorithm.name()
        );
    }
}

/// Trivial inputs produce empty traces: the run returns before anything
/// is worth recording.
#[test]
fn test_trivial_inputs_produce_empty_traces() {
    let registry = integer_registry::<i32>();

    for entry in registry.entries() {
        for input in [&[][..], &[42][..]] {
            let report = (entry.traced)(input).unwrap();
            assert_eq!(report.step_count(), 0, "{}", entry.algorithm.name());
        }
    }
}

// ============================================================================
// Snapshot Integrity Tests
// ============================================================================

/// Snapshots are owned copies: records taken early in the run are not
/// altered by later mutation.
#[test]
fn test_snapshots_are_copies() {
    let input = [4, 3, 2, 1];
    let report = bubble::sort_traced(&input).unwrap();
    let steps = report.steps.unwrap();

    // The start snapshot still shows the unsorted input even though the
    // working array finished fully sorted.
    assert_eq!(steps[0].array, input.to_vec());
    assert_eq!(steps.last().unwrap().array, vec![1, 2, 3, 4]);
}

/// The caller's input is never mutated.
#[test]
fn test_caller_input_untouched() {
    let input = vec![3, 1, 2];
    let _ = bubble::sort(&input).unwrap();
    let _ = quick::sort(&input).unwrap();
    let _ = merge::sort_traced(&input).unwrap();

    assert_eq!(input, vec![3, 1, 2]);
}

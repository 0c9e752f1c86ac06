//! Tests for the selection, insertion, merge, and heap sort families.
//!
//! These tests verify:
//! - Sorting correctness and family-specific counter contracts
//! - Selection sort's leftmost tie-break and no-swap steps
//! - Insertion sort's linear vs. binary comparison trade-off
//! - Merge sort's stability and single reused buffer behavior
//! - Heap sort's ascending (max-heap) and descending (min-heap) modes
//!
//! ## Test Organization
//!
//! 1. **Selection Sort** - Tie-break, swap discipline
//! 2. **Insertion Sort** - Modes, counter comparison
//! 3. **Merge Sort** - Stability, merge counts
//! 4. **Heap Sort** - Orientation modes
//! 5. **Boundaries** - Trivial inputs across families

use core::cmp::Ordering;
use core::fmt;

use stepwise::prelude::*;

/// Key-only ordering with an identity tag, for stability checks.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    id: usize,
}

impl Tagged {
    fn new(key: i32, id: usize) -> Self {
        Self { key, id }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.key, self.id)
    }
}

// ============================================================================
// Selection Sort Tests
// ============================================================================

/// Selection sort produces the ascending order.
#[test]
fn test_selection_sorts() {
    let report = selection::sort(&[64, 25, 12, 22, 11]).unwrap();

    assert_eq!(report.output, vec![11, 12, 22, 25, 64]);
    // Always n(n-1)/2 comparisons.
    assert_eq!(report.metrics.comparisons, 10);
}

/// Equal minimums resolve to the leftmost occurrence.
#[test]
fn test_selection_leftmost_tiebreak() {
    let input = [Tagged::new(2, 0), Tagged::new(1, 1), Tagged::new(1, 2)];
    let report = selection::sort(&input).unwrap();

    // The leftmost 1 (id 1) is chosen first.
    assert_eq!(report.output[0].id, 1);
    assert_eq!(report.output[1].id, 2);
}

/// A position already holding its minimum records a no-swap step instead
/// of swapping.
#[test]
fn test_selection_no_swap_step() {
    let report = selection::sort_traced(&[1, 3, 2]).unwrap();
    let steps = report.steps.unwrap();

    assert!(steps.iter().any(|s| s.kind == StepKind::NoSwap));
    // Only one real swap is needed (positions 1 and 2).
    assert_eq!(report.metrics.swaps, 1);
}

// ============================================================================
// Insertion Sort Tests
// ============================================================================

/// Both modes sort and agree on the output.
#[test]
fn test_insertion_modes_agree() {
    let input = [5, 2, 4, 6, 1, 3];

    let linear = insertion::sort_with(&input, &InsertionOptions::new().mode(InsertionMode::Linear))
        .unwrap();
    let binary = insertion::sort_with(&input, &InsertionOptions::new().mode(InsertionMode::Binary))
        .unwrap();

    assert_eq!(linear.output, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(linear.output, binary.output);
}

/// Binary insertion reduces comparisons but performs identical shifts.
#[test]
fn test_insertion_binary_fewer_comparisons_same_shifts() {
    let input = [9, 8, 7, 6, 5, 4, 3, 2, 1];

    let linear = insertion::sort(&input).unwrap();
    let binary = insertion::sort_with(&input, &InsertionOptions::new().mode(InsertionMode::Binary))
        .unwrap();

    assert!(binary.metrics.comparisons < linear.metrics.comparisons);
    assert_eq!(binary.metrics.shifts, linear.metrics.shifts);
    assert_eq!(binary.metrics.insertions, linear.metrics.insertions);
}

/// Insertion sort is stable in both modes.
#[test]
fn test_insertion_stable() {
    let input = [
        Tagged::new(2, 0),
        Tagged::new(1, 1),
        Tagged::new(2, 2),
        Tagged::new(1, 3),
    ];

    for mode in [InsertionMode::Linear, InsertionMode::Binary] {
        let report = insertion::sort_with(&input, &InsertionOptions::new().mode(mode)).unwrap();
        let ids: Vec<usize> = report.output.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2], "mode {mode:?} broke stability");
    }
}

// ============================================================================
// Merge Sort Tests
// ============================================================================

/// Merge sort produces the ascending order and counts its merges.
#[test]
fn test_merge_sorts() {
    let report = merge::sort(&[5, 1, 4, 2, 8]).unwrap();

    assert_eq!(report.output, vec![1, 2, 4, 5, 8]);
    // Five elements split into four merge ranges.
    assert_eq!(report.metrics.merges, 4);
    // Every merge places each element of its range exactly once.
    assert!(report.metrics.shifts > 0);
}

/// Equal keys keep their original relative order.
#[test]
fn test_merge_stable() {
    let input = [
        Tagged::new(3, 0),
        Tagged::new(1, 1),
        Tagged::new(3, 2),
        Tagged::new(1, 3),
        Tagged::new(3, 4),
    ];
    let report = merge::sort(&input).unwrap();

    let ids: Vec<usize> = report.output.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 0, 2, 4]);
}

/// The traced variant brackets every merge with a pass-start and a merge
/// step.
#[test]
fn test_merge_trace_structure() {
    let report = merge::sort_traced(&[4, 3, 2, 1]).unwrap();
    let steps = report.steps.unwrap();

    let merge_steps = steps.iter().filter(|s| s.kind == StepKind::Merge).count();
    let pass_starts = steps.iter().filter(|s| s.kind == StepKind::PassStart).count();
    assert_eq!(merge_steps as u64, report.metrics.merges);
    assert_eq!(pass_starts, merge_steps);
}

// ============================================================================
// Heap Sort Tests
// ============================================================================

/// Max-heap mode sorts ascending.
#[test]
fn test_heap_max_ascending() {
    let report = heap::sort(&[5, 1, 4, 2, 8]).unwrap();

    assert_eq!(report.output, vec![1, 2, 4, 5, 8]);
    assert!(report.metrics.heap_ops > 0);
}

/// Min-heap mode sorts descending.
#[test]
fn test_heap_min_descending() {
    let options = HeapOptions::new().order(HeapOrder::MinHeap);
    let report = heap::sort_with(&[5, 1, 4, 2, 8], &options).unwrap();

    assert_eq!(report.output, vec![8, 5, 4, 2, 1]);
}

/// The traced variant records heapify steps for the build phase.
#[test]
fn test_heap_trace_has_heapify() {
    let report = heap::sort_traced(&[7, 3, 9, 1, 5]).unwrap();
    let steps = report.steps.unwrap();

    let heapify = steps.iter().filter(|s| s.kind == StepKind::Heapify).count();
    // Build phase heapifies every parent: ⌊n/2⌋ subtrees.
    assert_eq!(heapify, 2);
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Every comparison family returns trivial input unchanged with zero
/// counters.
#[test]
fn test_comparison_families_trivial_inputs() {
    let empty: [i32; 0] = [];

    assert!(selection::sort(&empty).unwrap().output.is_empty());
    assert!(insertion::sort(&empty).unwrap().output.is_empty());
    assert!(merge::sort(&empty).unwrap().output.is_empty());
    assert!(heap::sort(&empty).unwrap().output.is_empty());

    for report in [
        selection::sort(&[9]).unwrap(),
        insertion::sort(&[9]).unwrap(),
        merge::sort(&[9]).unwrap(),
        heap::sort(&[9]).unwrap(),
    ] {
        assert_eq!(report.output, vec![9]);
        assert_eq!(report.metrics, Metrics::new());
    }
}

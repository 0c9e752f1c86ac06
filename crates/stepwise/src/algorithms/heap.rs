//! Heap sort in max-heap or min-heap mode.
//!
//! ## Purpose
//!
//! Build a binary heap bottom-up from index ⌊n/2⌋−1, then repeatedly swap
//! the root with the last unsorted slot and sift the new root down through
//! the reduced heap. [`HeapOrder::MaxHeap`] yields an ascending result,
//! [`HeapOrder::MinHeap`] a descending one.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, swaps, heap_ops (one per heapify during
//!   build, one per extraction).
//! * **Steps**: `start`, `heapify`, `compare`, `swap`, `complete`.
//!
//! ## Invariants
//!
//! * After the build phase, every parent dominates its children under the
//!   selected order.
//! * After extraction `k`, the last `k` positions hold their final values.

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
// Options
// ============================================================================

/// Heap orientation, which fixes the output direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Max-heap: repeatedly extracting the maximum sorts ascending.
    #[default]
    MaxHeap,

    /// Min-heap: repeatedly extracting the minimum sorts descending.
    MinHeap,
}

/// Configuration for heap sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapOptions {
    /// Heap orientation.
    pub order: HeapOrder,
}

impl HeapOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heap orientation.
    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending via a max-heap.
pub fn sort<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_with(input, &HeapOptions::default())
}

/// Sort ascending via a max-heap, returning the full step trace.
pub fn sort_traced<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_traced_with(input, &HeapOptions::default())
}

/// Sort with an explicit heap orientation.
pub fn sort_with<T: SortItem>(
    input: &[T],
    options: &HeapOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let output = run(input, options.order, &mut metrics, &mut NullSink);
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort with an explicit heap orientation, returning the full step trace.
pub fn sort_traced_with<T: SortItem>(
    input: &[T],
    options: &HeapOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run(input, options.order, &mut metrics, &mut sink);
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

fn run<T, S>(input: &[T], order: HeapOrder, metrics: &mut Metrics, sink: &mut S) -> Vec<T>
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
        let mode = match order {
            HeapOrder::MaxHeap => "max-heap",
            HeapOrder::MinHeap => "min-heap",
        };
        format!("heap sort ({mode}) over {n} elements")
    });

    // Build phase: heapify bottom-up from the last parent.
    for i in (0..n / 2).rev() {
        sift_down(&mut arr, i, n, order, metrics, sink);
        metrics.record_heap_op();
        emit(sink, StepKind::Heapify, &arr, &[i], metrics, || {
            format!("subtree at {i} restored to heap order")
        });
    }

    // Extraction phase: root to the end, re-heapify the rest.
    for end in (1..n).rev() {
        swap(&mut arr, 0, end, metrics);
        metrics.record_heap_op();
        emit(sink, StepKind::Swap, &arr, &[0, end], metrics, || {
            format!("extract root into position {end}")
        });
        sift_down(&mut arr, 0, end, order, metrics, sink);
    }

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

/// Sift `arr[root]` down within the heap `arr[..len]` until both children
/// are dominated.
fn sift_down<T, S>(
    arr: &mut [T],
    mut root: usize,
    len: usize,
    order: HeapOrder,
    metrics: &mut Metrics,
    sink: &mut S,
) where
    T: SortItem,
    S: StepSink<T>,
{
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }

        let mut candidate = left;
        let right = left + 1;
        if right < len {
            metrics.record_comparison();
            emit(sink, StepKind::Compare, arr, &[left, right], metrics, || {
                format!("compare children {} and {}", arr[left], arr[right])
            });
            if dominates(&arr[right], &arr[left], order) {
                candidate = right;
            }
        }

        metrics.record_comparison();
        emit(sink, StepKind::Compare, arr, &[candidate, root], metrics, || {
            format!("compare child {} with parent {}", arr[candidate], arr[root])
        });

        if dominates(&arr[candidate], &arr[root], order) {
            swap(arr, root, candidate, metrics);
            emit(sink, StepKind::Swap, arr, &[root, candidate], metrics, || {
                format!("swap parent {root} with child {candidate}")
            });
            root = candidate;
        } else {
            break;
        }
    }
}

/// True when `a` belongs above `b` in a heap of the given orientation.
#[inline]
fn dominates<T: SortItem>(a: &T, b: &T, order: HeapOrder) -> bool {
    match order {
        HeapOrder::MaxHeap => compare(a, b) == Ordering::Greater,
        HeapOrder::MinHeap => compare(a, b) == Ordering::Less,
    }
}

//! Quicksort: Lomuto partition with selectable pivot strategy.
//!
//! ## Purpose
//!
//! Partition-exchange sort in two forms sharing one partition routine: a
//! recursive form that tracks recursion depth, and an iterative form that
//! drives an explicit range stack and always pushes the larger partition
//! first, bounding the stack to O(log n) even on adversarial input.
//!
//! ## Design notes
//!
//! * **Lomuto**: the pivot is moved to the end of the range, elements
//!   strictly less than it are grown from the left, and the pivot is
//!   swapped into the boundary slot.
//! * **Pivot strategies**: first, last, seeded random, and median-of-three
//!   (each of the three candidate comparisons is counted).
//! * **Reproducible**: the random strategy draws from a `StdRng` seeded
//!   from [`QuickOptions::seed`], so identical inputs and options always
//!   produce identical runs and traces.
//!
//! ## Key concepts
//!
//! * **Counters**: comparisons, swaps, partitions, max_depth.
//! * **Steps**: `start`, `pivot`, `compare`, `swap`, `partition`,
//!   `complete`.
//!
//! ## Invariants
//!
//! * After `partition` returns `p`, every element left of `p` is strictly
//!   less than `arr[p]` and no element right of `p` is.
//! * The iterative form's stack never holds more than ⌈log2(n)⌉ + 1
//!   ranges.

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
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

/// Pivot-selection policy for the Lomuto partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// First element of the range.
    First,

    /// Last element of the range (classic Lomuto).
    #[default]
    Last,

    /// Uniformly random element of the range, drawn from the seeded RNG.
    Random,

    /// Median of the first, middle, and last elements.
    MedianOfThree,
}

impl PivotStrategy {
    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Random => "random",
            Self::MedianOfThree => "median-of-three",
        }
    }
}

/// Default seed for the random pivot strategy.
///
/// A fixed seed keeps runs reproducible; callers wanting variety pass their
/// own through [`QuickOptions::seed`].
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for quicksort.
#[derive(Debug, Clone, Copy)]
pub struct QuickOptions {
    /// Pivot-selection policy.
    pub pivot_strategy: PivotStrategy,

    /// Seed for the random pivot strategy.
    pub seed: u64,
}

impl Default for QuickOptions {
    fn default() -> Self {
        Self {
            pivot_strategy: PivotStrategy::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl QuickOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot-selection policy.
    pub fn pivot_strategy(mut self, strategy: PivotStrategy) -> Self {
        self.pivot_strategy = strategy;
        self
    }

    /// Set the seed for the random pivot strategy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Sort ascending (recursive form, default options).
pub fn sort<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_with(input, &QuickOptions::default())
}

/// Sort ascending (recursive form, default options), returning the trace.
pub fn sort_traced<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_traced_with(input, &QuickOptions::default())
}

/// Sort ascending (recursive form) with explicit options.
pub fn sort_with<T: SortItem>(
    input: &[T],
    options: &QuickOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let output = run_recursive(input, options, &mut metrics, &mut NullSink);
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending (recursive form) with explicit options, returning the
/// trace.
pub fn sort_traced_with<T: SortItem>(
    input: &[T],
    options: &QuickOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run_recursive(input, options, &mut metrics, &mut sink);
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

/// Sort ascending with the explicit-stack iterative form.
pub fn sort_iterative<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_iterative_with(input, &QuickOptions::default())
}

/// Sort ascending with the iterative form, returning the trace.
pub fn sort_iterative_traced<T: SortItem>(input: &[T]) -> Result<SortReport<T>, StepwiseError> {
    sort_iterative_traced_with(input, &QuickOptions::default())
}

/// Sort ascending with the iterative form and explicit options.
pub fn sort_iterative_with<T: SortItem>(
    input: &[T],
    options: &QuickOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let output = run_iterative(input, options, &mut metrics, &mut NullSink);
    Ok(SortReport {
        output,
        metrics,
        steps: None,
    })
}

/// Sort ascending with the iterative form and explicit options, returning
/// the trace.
pub fn sort_iterative_traced_with<T: SortItem>(
    input: &[T],
    options: &QuickOptions,
) -> Result<SortReport<T>, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run_iterative(input, options, &mut metrics, &mut sink);
    Ok(SortReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Recursive Core
// ============================================================================

fn run_recursive<T, S>(
    input: &[T],
    options: &QuickOptions,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Vec<T>
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
        format!("quicksort ({} pivot) over {n} elements", options.pivot_strategy.name())
    });

    let mut rng = StdRng::seed_from_u64(options.seed);
    recurse(&mut arr, 0, n - 1, 1, options.pivot_strategy, &mut rng, metrics, sink);

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

#[allow(clippy::too_many_arguments)]
fn recurse<T, S>(
    arr: &mut [T],
    lo: usize,
    hi: usize,
    depth: u64,
    strategy: PivotStrategy,
    rng: &mut StdRng,
    metrics: &mut Metrics,
    sink: &mut S,
) where
    T: SortItem,
    S: StepSink<T>,
{
    if lo >= hi {
        return;
    }
    metrics.record_depth(depth);

    let p = partition(arr, lo, hi, strategy, rng, metrics, sink);
    if p > lo {
        recurse(arr, lo, p - 1, depth + 1, strategy, rng, metrics, sink);
    }
    if p < hi {
        recurse(arr, p + 1, hi, depth + 1, strategy, rng, metrics, sink);
    }
}

// ============================================================================
// Iterative Core
// ============================================================================

fn run_iterative<T, S>(
    input: &[T],
    options: &QuickOptions,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Vec<T>
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
        format!(
            "iterative quicksort ({} pivot) over {n} elements",
            options.pivot_strategy.name()
        )
    });

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((0, n - 1));

    while let Some((lo, hi)) = stack.pop() {
        if lo >= hi {
            continue;
        }
        metrics.record_depth(stack.len() as u64 + 1);

        let p = partition(&mut arr, lo, hi, options.pivot_strategy, &mut rng, metrics, sink);

        let left = if p > lo { Some((lo, p - 1)) } else { None };
        let right = if p < hi { Some((p + 1, hi)) } else { None };

        // Larger partition goes on first so the smaller is handled next;
        // the stack can then never exceed O(log n) ranges.
        match (left, right) {
            (Some(l), Some(r)) => {
                if l.1 - l.0 >= r.1 - r.0 {
                    stack.push(l);
                    stack.push(r);
                } else {
                    stack.push(r);
                    stack.push(l);
                }
            }
            (Some(l), None) => stack.push(l),
            (None, Some(r)) => stack.push(r),
            (None, None) => {}
        }
    }

    emit(sink, StepKind::Complete, &arr, &[], metrics, || {
        String::from("array sorted")
    });

    arr
}

// ============================================================================
// Partition
// ============================================================================

/// Lomuto partition of `arr[lo..=hi]`; returns the pivot's final slot.
fn partition<T, S>(
    arr: &mut [T],
    lo: usize,
    hi: usize,
    strategy: PivotStrategy,
    rng: &mut StdRng,
    metrics: &mut Metrics,
    sink: &mut S,
) -> usize
where
    T: SortItem,
    S: StepSink<T>,
{
    let pivot_idx = select_pivot(arr, lo, hi, strategy, rng, metrics);
    if pivot_idx != hi {
        swap(arr, pivot_idx, hi, metrics);
        emit(sink, StepKind::Swap, arr, &[pivot_idx, hi], metrics, || {
            format!("move pivot from {pivot_idx} to {hi}")
        });
    }

    let pivot = arr[hi];
    emit(sink, StepKind::Pivot, arr, &[hi], metrics, || {
        format!("pivot {pivot} for range [{lo}, {hi}]")
    });

    let mut store = lo;
    for j in lo..hi {
        metrics.record_comparison();
        emit(sink, StepKind::Compare, arr, &[j, hi], metrics, || {
            format!("compare {} with pivot {}", arr[j], pivot)
        });

        if compare(&arr[j], &pivot) == Ordering::Less {
            if store != j {
                swap(arr, store, j, metrics);
                emit(sink, StepKind::Swap, arr, &[store, j], metrics, || {
                    format!("swap positions {store} and {j}")
                });
            }
            store += 1;
        }
    }

    if store != hi {
        swap(arr, store, hi, metrics);
        emit(sink, StepKind::Swap, arr, &[store, hi], metrics, || {
            format!("move pivot into final slot {store}")
        });
    }

    metrics.record_partition();
    emit(sink, StepKind::Partition, arr, &[store], metrics, || {
        format!("range [{lo}, {hi}] partitioned at {store}")
    });

    store
}

/// Choose the pivot index for `arr[lo..=hi]` under the given strategy.
///
/// Median-of-three performs (and counts) three comparisons among the first,
/// middle, and last elements.
fn select_pivot<T: SortItem>(
    arr: &[T],
    lo: usize,
    hi: usize,
    strategy: PivotStrategy,
    rng: &mut StdRng,
    metrics: &mut Metrics,
) -> usize {
    match strategy {
        PivotStrategy::First => lo,
        PivotStrategy::Last => hi,
        PivotStrategy::Random => rng.gen_range(lo..=hi),
        PivotStrategy::MedianOfThree => {
            let mid = lo + (hi - lo) / 2;

            metrics.record_comparison();
            let a_le_b = compare(&arr[lo], &arr[mid]) != Ordering::Greater;
            metrics.record_comparison();
            let a_le_c = compare(&arr[lo], &arr[hi]) != Ordering::Greater;
            metrics.record_comparison();
            let b_le_c = compare(&arr[mid], &arr[hi]) != Ordering::Greater;

            if a_le_b {
                if b_le_c {
                    mid
                } else if a_le_c {
                    hi
                } else {
                    lo
                }
            } else if a_le_c {
                lo
            } else if b_le_c {
                hi
            } else {
                mid
            }
        }
    }
}

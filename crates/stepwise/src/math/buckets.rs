//! Bucket sizing and index computation for bucket sort.
//!
//! ## Purpose
//!
//! This module provides the default bucket count (⌊√n⌋) and the clamped
//! bucket-index formula `⌊(v − min) / width⌋`, shared by the fast and
//! step-tracked bucket sort variants.
//!
//! ## Invariants
//!
//! * The returned bucket index is always in `0..bucket_count`.
//! * A non-positive width (all elements equal) maps everything to bucket 0.
//! * `v = max` lands in the last bucket via the clamp, never out of range.
//!
//! ## Non-goals
//!
//! * This module does not allocate or fill buckets.

// External dependencies
use num_traits::Float;

// ============================================================================
// Bucket Functions
// ============================================================================

/// Default bucket count for an input of `n` elements: ⌊√n⌋, at least 1.
#[inline]
pub fn default_bucket_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let root = Float::sqrt(n as f64) as usize;
    root.max(1)
}

/// Bucket index of `value` within `[min, max]` split into `bucket_count`
/// buckets of the given width, clamped to the last bucket so the maximum
/// value stays in range.
#[inline]
pub fn bucket_index<T: Float>(value: T, min: T, width: T, bucket_count: usize) -> usize {
    if width <= T::zero() {
        return 0;
    }
    let idx = ((value - min) / width).floor().to_usize().unwrap_or(0);
    idx.min(bucket_count - 1)
}

//! Input validation for engine entry points.
//!
//! ## Purpose
//!
//! This module provides the precondition checks performed before any
//! mutation: required non-empty input, ascending order for binary search,
//! non-negative keys for the integer distribution sorts, and parameter
//! bounds for options and the count-and-say generator.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first violation; nothing has
//!   been copied or mutated when an error is returned.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Generics**: data checks are generic over the element bounds the
//!   algorithms themselves use.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A passing input satisfies every precondition its algorithm states.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or copy input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use core::cmp::Ordering;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::StepwiseError;
use crate::primitives::ops::compare;

/// Safety ceiling for count-and-say row numbers.
///
/// Row length grows roughly geometrically (Conway's constant ≈ 1.304), so
/// rows past 40 produce strings in the hundred-thousand-character range.
pub const MAX_SEQUENCE_ROWS: usize = 40;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine inputs and options.
///
/// All methods return `Result<(), StepwiseError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate input for binary search: non-empty and sorted ascending.
    pub fn validate_search_input<T: PartialOrd>(haystack: &[T]) -> Result<(), StepwiseError> {
        if haystack.is_empty() {
            return Err(StepwiseError::EmptyInput);
        }

        for i in 1..haystack.len() {
            if compare(&haystack[i - 1], &haystack[i]) == Ordering::Greater {
                #[cfg(feature = "logging")]
                tracing::debug!(index = i, "search input rejected: not ascending");
                return Err(StepwiseError::UnsortedInput { index: i });
            }
        }

        Ok(())
    }

    /// Validate keys for counting and radix sort: all non-negative.
    pub fn validate_non_negative<T: PrimInt>(keys: &[T]) -> Result<(), StepwiseError> {
        for (index, &value) in keys.iter().enumerate() {
            if value < T::zero() {
                #[cfg(feature = "logging")]
                tracing::debug!(index, "distribution-sort input rejected: negative key");
                return Err(StepwiseError::NegativeValue {
                    value: value.to_i64().unwrap_or(i64::MIN),
                    index,
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Option Validation
    // ========================================================================

    /// Validate the radix base.
    pub fn validate_base(base: u32) -> Result<(), StepwiseError> {
        if base < 2 {
            return Err(StepwiseError::InvalidBase(base));
        }
        Ok(())
    }

    /// Validate an explicit bucket count.
    pub fn validate_bucket_count(count: usize) -> Result<(), StepwiseError> {
        if count == 0 {
            return Err(StepwiseError::InvalidBucketCount(count));
        }
        Ok(())
    }

    /// Validate count-and-say parameters: positive start, row number within
    /// the [`MAX_SEQUENCE_ROWS`] ceiling.
    pub fn validate_sequence_params(start: i64, rows: usize) -> Result<(), StepwiseError> {
        if start <= 0 {
            return Err(StepwiseError::NonPositiveStart(start));
        }
        if rows > MAX_SEQUENCE_ROWS {
            return Err(StepwiseError::RowLimitExceeded {
                got: rows,
                max: MAX_SEQUENCE_ROWS,
            });
        }
        Ok(())
    }
}

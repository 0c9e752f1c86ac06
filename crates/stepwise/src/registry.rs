//! Layer 6: API — name-keyed algorithm registry.
//!
//! ## Purpose
//!
//! This module gives rendering layers name-keyed access to the sort
//! families without reaching for globals: an [`Algorithm`] enum, and a
//! [`Registry`] mapping each algorithm to its fast and step-tracked entry
//! points as plain function pointers.
//!
//! ## Design notes
//!
//! * **Per element class**: the distribution sorts constrain their element
//!   types (integers for counting/radix, floats for bucket), so the
//!   registry comes in three builds: [`comparison_registry`] (the six
//!   comparison sorts, any [`SortItem`]), [`integer_registry`] (plus
//!   counting and radix), and [`float_registry`] (plus bucket).
//! * **Default options**: registered entry points run with each family's
//!   default options; callers needing a pivot strategy or bucket count use
//!   the family modules directly.
//!
//! ## Invariants
//!
//! * Registered names are unique and match [`Algorithm::name`].
//! * Both function pointers of an entry run the same core; their outputs
//!   agree on every input.
//!
//! ## Non-goals
//!
//! * This module does not register binary search or the sequence
//!   generator; their signatures differ and callers use those modules
//!   directly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;
use num_traits::{Float, PrimInt};

// Internal dependencies
use crate::algorithms::{bubble, bucket, counting, heap, insertion, merge, quick, radix, selection};
use crate::engine::report::SortReport;
use crate::primitives::errors::StepwiseError;
use crate::primitives::ops::SortItem;

// ============================================================================
// Algorithm Names
// ============================================================================

/// The sort families the registry can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Bubble sort.
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Quicksort.
    Quick,
    /// Merge sort.
    Merge,
    /// Heap sort.
    Heap,
    /// Counting sort (integer keys).
    Counting,
    /// Bucket sort (float keys).
    Bucket,
    /// Radix sort (integer keys).
    Radix,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 9] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
        Self::Heap,
        Self::Counting,
        Self::Bucket,
        Self::Radix,
    ];

    /// Stable lookup name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Bucket => "bucket",
            Self::Radix => "radix",
        }
    }

    /// Parse a lookup name.
    pub fn from_name(name: &str) -> Result<Self, StepwiseError> {
        match name {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "quick" => Ok(Self::Quick),
            "merge" => Ok(Self::Merge),
            "heap" => Ok(Self::Heap),
            "counting" => Ok(Self::Counting),
            "bucket" => Ok(Self::Bucket),
            "radix" => Ok(Self::Radix),
            other => Err(StepwiseError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// True for the comparison-based families.
    pub fn is_comparison(&self) -> bool {
        !matches!(self, Self::Counting | Self::Bucket | Self::Radix)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Entry-point signature shared by every registered sort.
pub type SortFn<T> = fn(&[T]) -> Result<SortReport<T>, StepwiseError>;

/// One registered sort family.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry<T> {
    /// Which family this entry dispatches to.
    pub algorithm: Algorithm,

    /// Fast entry point (metrics only).
    pub fast: SortFn<T>,

    /// Step-tracked entry point (metrics plus trace).
    pub traced: SortFn<T>,
}

/// Name-keyed lookup table over sort entry points.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<RegistryEntry<T>>,
}

impl<T> Registry<T> {
    /// All entries, in registration order.
    pub fn entries(&self) -> &[RegistryEntry<T>] {
        &self.entries
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<&RegistryEntry<T>> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Look up an entry by name.
    ///
    /// Fails with [`StepwiseError::UnknownAlgorithm`] when the name does
    /// not parse or the family is not registered for this element class
    /// (e.g. `"counting"` in a [`comparison_registry`]).
    pub fn lookup(&self, name: &str) -> Result<&RegistryEntry<T>, StepwiseError> {
        #[cfg(feature = "logging")]
        tracing::debug!(name, "registry lookup");

        let algorithm = Algorithm::from_name(name)?;
        self.get(algorithm)
            .ok_or_else(|| StepwiseError::UnknownAlgorithm(name.to_string()))
    }
}

// ============================================================================
// Registry Builders
// ============================================================================

/// The six comparison sorts, available for any [`SortItem`] element.
pub fn comparison_registry<T: SortItem>() -> Registry<T> {
    Registry {
        entries: vec![
            RegistryEntry {
                algorithm: Algorithm::Bubble,
                fast: bubble::sort,
                traced: bubble::sort_traced,
            },
            RegistryEntry {
                algorithm: Algorithm::Selection,
                fast: selection::sort,
                traced: selection::sort_traced,
            },
            RegistryEntry {
                algorithm: Algorithm::Insertion,
                fast: insertion::sort,
                traced: insertion::sort_traced,
            },
            RegistryEntry {
                algorithm: Algorithm::Quick,
                fast: quick::sort,
                traced: quick::sort_traced,
            },
            RegistryEntry {
                algorithm: Algorithm::Merge,
                fast: merge::sort,
                traced: merge::sort_traced,
            },
            RegistryEntry {
                algorithm: Algorithm::Heap,
                fast: heap::sort,
                traced: heap::sort_traced,
            },
        ],
    }
}

/// Comparison sorts plus counting and radix, for integer elements.
pub fn integer_registry<T: PrimInt + Display>() -> Registry<T> {
    let mut registry = comparison_registry::<T>();
    registry.entries.push(RegistryEntry {
        algorithm: Algorithm::Counting,
        fast: counting::sort,
        traced: counting::sort_traced,
    });
    registry.entries.push(RegistryEntry {
        algorithm: Algorithm::Radix,
        fast: radix::sort,
        traced: radix::sort_traced,
    });
    registry
}

/// Comparison sorts plus bucket, for float elements.
pub fn float_registry<T: Float + Display>() -> Registry<T> {
    let mut registry = comparison_registry::<T>();
    registry.entries.push(RegistryEntry {
        algorithm: Algorithm::Bucket,
        fast: bucket::sort,
        traced: bucket::sort_traced,
    });
    registry
}

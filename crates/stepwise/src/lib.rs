//! # Stepwise — Instrumented Classical-Algorithm Engine
//!
//! Every algorithm in this crate runs in two modes that share a single
//! implementation: a **fast** mode that returns the final result plus
//! aggregated operation metrics, and a **step-tracked** mode that
//! additionally returns a deterministic, replayable trace of every observable
//! state transition, suitable for driving animations.
//!
//! The engine covers nine sorts (bubble, selection, insertion, quick, merge,
//! heap, counting, bucket, radix), binary search (iterative and recursive),
//! and the count-and-say digit sequence. It consumes plain slices and
//! numbers, never mutates caller data, and returns everything by value — no
//! I/O, no shared state, no dependency on any rendering layer.
//!
//! ## Quick Start
//!
//! ### Fast mode
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let report = bubble::sort(&[5, 1, 4, 2, 8])?;
//!
//! assert_eq!(report.output, vec![1, 2, 4, 5, 8]);
//! assert_eq!(report.metrics.swaps, 4);
//! assert!(report.steps.is_none());
//! # Result::<(), StepwiseError>::Ok(())
//! ```
//!
//! ### Step-tracked mode
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let report = bubble::sort_traced(&[3, 1, 2])?;
//!
//! // Same output as the fast variant, plus the full trace.
//! assert_eq!(report.output, vec![1, 2, 3]);
//! let steps = report.steps.unwrap();
//! assert!(!steps.is_empty());
//!
//! for step in &steps {
//!     // A renderer would draw `step.array` and flash `step.highlights`.
//!     let _ = (&step.kind, &step.array, &step.highlights, &step.message);
//! }
//! # Result::<(), StepwiseError>::Ok(())
//! ```
//!
//! ### Configured runs
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let opts = QuickOptions::new().pivot_strategy(PivotStrategy::MedianOfThree);
//! let report = quick::sort_with(&[3, 6, 8, 10, 1, 2, 1], &opts)?;
//!
//! assert_eq!(report.output, vec![1, 1, 2, 3, 6, 8, 10]);
//! assert!(report.metrics.partitions > 0);
//! # Result::<(), StepwiseError>::Ok(())
//! ```
//!
//! ### Name-keyed dispatch
//!
//! Rendering layers select algorithms by name through a registry instead of
//! reaching for globals:
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let registry = comparison_registry::<i32>();
//! let entry = registry.lookup("merge")?;
//! let report = (entry.fast)(&[4, 2, 7, 1])?;
//!
//! assert_eq!(report.output, vec![1, 2, 4, 7]);
//! # Result::<(), StepwiseError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Precondition violations (empty input to binary search, negative keys for
//! counting sort, out-of-range count-and-say parameters, ...) surface as
//! [`StepwiseError`](prelude::StepwiseError) before any work happens. There
//! are no recoverable failure modes: a rejected call leaves nothing behind
//! and later calls are unaffected.
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! let err = sequence::generate(5, 41).unwrap_err();
//! assert!(matches!(err, StepwiseError::RowLimitExceeded { got: 41, max: 40 }));
//! ```
//!
//! ## no_std
//!
//! The crate supports `no_std` environments (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! stepwise = { version = "0.4", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared low-level operations, metrics, errors.
pub mod primitives;

// Layer 2: Math - pure digit and bucket arithmetic.
pub mod math;

// Layer 3: Trace - step records and the step-sink capability.
pub mod trace;

// Layer 4: Engine - validation and the result envelope.
pub mod engine;

// Layer 5: Algorithms - one module per algorithm family.
pub mod algorithms;

// Layer 6: API - name-keyed registry over the families.
pub mod registry;

// Standard stepwise prelude.
pub mod prelude {
    pub use crate::algorithms::bubble;
    pub use crate::algorithms::bucket;
    pub use crate::algorithms::bucket::BucketOptions;
    pub use crate::algorithms::counting;
    pub use crate::algorithms::heap;
    pub use crate::algorithms::heap::{HeapOptions, HeapOrder};
    pub use crate::algorithms::insertion;
    pub use crate::algorithms::insertion::{InsertionMode, InsertionOptions};
    pub use crate::algorithms::merge;
    pub use crate::algorithms::quick;
    pub use crate::algorithms::quick::{PivotStrategy, QuickOptions};
    pub use crate::algorithms::radix;
    pub use crate::algorithms::radix::RadixOptions;
    pub use crate::algorithms::search;
    pub use crate::algorithms::selection;
    pub use crate::algorithms::sequence;
    pub use crate::engine::report::{RunReport, SayReport, SearchReport, SortReport};
    pub use crate::engine::validator::MAX_SEQUENCE_ROWS;
    pub use crate::primitives::errors::StepwiseError;
    pub use crate::primitives::metrics::Metrics;
    pub use crate::primitives::ops::SortItem;
    pub use crate::registry::{
        comparison_registry, float_registry, integer_registry, Algorithm, Registry, RegistryEntry,
        SortFn,
    };
    pub use crate::trace::record::{StepKind, StepRecord};
    pub use crate::trace::sink::{NullSink, StepSink, TraceSink};
}

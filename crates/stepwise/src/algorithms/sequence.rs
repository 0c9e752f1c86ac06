//! Count-and-say sequence generator.
//!
//! ## Purpose
//!
//! Starting from a positive integer, repeatedly apply a run-length-encoding
//! transform: scan the current digit string left to right, group maximal
//! runs of identical digits, and replace each run with `<count><digit>`.
//! Row 0 is the starting number's decimal form unchanged.
//!
//! ## Design notes
//!
//! * **Safety ceiling**: row length grows roughly geometrically, so row
//!   numbers past [`crate::engine::validator::MAX_SEQUENCE_ROWS`] are
//!   rejected up front.
//! * **Character snapshots**: step records carry the digit characters of
//!   each row, so a renderer can animate the string the same way it
//!   animates an array.
//!
//! ## Key concepts
//!
//! * **Counters**: passes (rows produced), iterations (runs encoded).
//! * **Steps**: `start` (row 0), one `expand` per generated row,
//!   `complete`.
//!
//! ## Invariants
//!
//! * `generate(s, 0)` is the decimal form of `s` for every valid `s`.
//! * Every row is a valid digit string; runs never span distinct digits.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::report::SayReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::StepwiseError;
use crate::primitives::metrics::Metrics;
use crate::trace::emit;
use crate::trace::record::StepKind;
use crate::trace::sink::{NullSink, StepSink, TraceSink};

// ============================================================================
// Entry Points
// ============================================================================

/// Generate row `rows` of the count-and-say sequence seeded with `start`.
pub fn generate(start: i64, rows: usize) -> Result<SayReport, StepwiseError> {
    let mut metrics = Metrics::new();
    let output = run(start, rows, &mut metrics, &mut NullSink)?;
    Ok(SayReport {
        output,
        metrics,
        steps: None,
    })
}

/// Generate row `rows`, additionally returning one step per row.
pub fn generate_traced(start: i64, rows: usize) -> Result<SayReport, StepwiseError> {
    let mut metrics = Metrics::new();
    let mut sink = TraceSink::new();
    let output = run(start, rows, &mut metrics, &mut sink)?;
    Ok(SayReport {
        output,
        metrics,
        steps: Some(sink.into_steps()),
    })
}

// ============================================================================
// Core
// ============================================================================

fn run<S>(
    start: i64,
    rows: usize,
    metrics: &mut Metrics,
    sink: &mut S,
) -> Result<String, StepwiseError>
where
    S: StepSink<char>,
{
    Validator::validate_sequence_params(start, rows)?;

    let mut current = start.to_string();
    let chars: Vec<char> = current.chars().collect();
    emit(sink, StepKind::Start, &chars, &[], metrics, || {
        format!("row 0: {current}")
    });

    for row in 1..=rows {
        current = expand(&current, metrics);
        metrics.record_pass();

        let chars: Vec<char> = current.chars().collect();
        emit(sink, StepKind::Expand, &chars, &[], metrics, || {
            format!("row {row}: {current}")
        });
    }

    let chars: Vec<char> = current.chars().collect();
    emit(sink, StepKind::Complete, &chars, &[], metrics, || {
        format!("row {rows} generated")
    });

    Ok(current)
}

/// Run-length encode one row: each maximal run of a digit becomes
/// `<count><digit>`.
fn expand(prev: &str, metrics: &mut Metrics) -> String {
    let digits: Vec<char> = prev.chars().collect();
    let mut out = String::new();

    let mut i = 0;
    while i < digits.len() {
        let digit = digits[i];
        let mut run = 1;
        while i + run < digits.len() && digits[i + run] == digit {
            run += 1;
        }

        out.push_str(&run.to_string());
        out.push(digit);
        metrics.record_iteration();
        i += run;
    }

    out
}

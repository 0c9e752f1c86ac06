//! Replay a traced bubble sort frame by frame.
//!
//! This stands in for the rendering layer: it runs the step-tracked variant
//! and walks the trace in order, printing each snapshot, its highlights,
//! and the counter state at that instant.
//!
//! Run with: `cargo run --example animate_bubble`

use stepwise::prelude::*;

fn main() -> Result<(), StepwiseError> {
    let data = [5, 1, 4, 2, 8];
    let report = bubble::sort_traced(&data)?;

    println!("input:  {data:?}");
    println!("output: {:?}", report.output);
    println!();

    if let Some(steps) = &report.steps {
        for (frame, step) in steps.iter().enumerate() {
            println!(
                "frame {frame:>3}  {:<10} {:?}  highlights {:?}  ({} comparisons, {} swaps)  {}",
                step.kind.name(),
                step.array,
                step.highlights,
                step.metrics.comparisons,
                step.metrics.swaps,
                step.message,
            );
        }
    }

    println!();
    println!("{}", report.metrics);
    Ok(())
}

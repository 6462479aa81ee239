//! Pure scoring and opportunity-modeling engine.
//!
//! Every function here is deterministic and side-effect free: inputs and the
//! benchmark table in, plain result structs out. No I/O, no clock, no globals.

pub mod bottlenecks;
pub mod capacity;
pub mod economics;
pub mod format;
pub mod growth;
pub mod narrative;
pub mod opportunity;
pub mod resolve;

use crate::benchmarks::BenchmarkTable;
use crate::schema::v1::{DiagnosticResults, DiagnosticScores, FormInputs};

/// Clamp a raw sub-score into the 0-100 range.
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Round a weighted blend to the final integer score.
pub(crate) fn finalize_score(raw: f64) -> u8 {
    clamp_score(raw.round()) as u8
}

/// Compose the full diagnostic: scores, opportunity model, bottlenecks,
/// narrative, and the benchmark disclosure map. The sole engine entry point.
pub fn run_diagnostic(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> DiagnosticResults {
    let scores = DiagnosticScores {
        capacity_score: capacity::capacity_score(inputs, benchmarks),
        unit_economics_score: economics::unit_economics_score(inputs, benchmarks),
        growth_constraint_index: growth::growth_constraint_index(inputs, benchmarks),
    };

    let opportunity = opportunity::opportunity_model(inputs, benchmarks);
    let bottlenecks = bottlenecks::detect_bottlenecks(inputs, benchmarks);
    let executive_summary = narrative::executive_summary(inputs, &scores, &opportunity, benchmarks);
    let next_steps = narrative::next_steps(&scores);

    DiagnosticResults {
        scores,
        opportunity,
        bottlenecks,
        executive_summary,
        next_steps,
        inputs: inputs.clone(),
        benchmarks_used: benchmarks.benchmarks_used(),
    }
}

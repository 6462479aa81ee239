//! Growth constraint index. Inverse polarity vs. the other scores:
//! higher means more constrained.

use crate::benchmarks::BenchmarkTable;
use crate::engine::{clamp_score, finalize_score, resolve};
use crate::schema::v1::FormInputs;

pub fn growth_constraint_index(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> u8 {
    let w = benchmarks.weights.growth_constraint;

    let lost_score = clamp_score(inputs.referral_loss_percent * 3.5);

    let day_gap = (inputs.days_to_infusion_start - benchmarks.referral_to_start.good).max(0.0);
    let time_gap_score = clamp_score(day_gap * 8.0);

    let per_nurse = resolve::infusions_per_nurse(inputs);
    let caps = &benchmarks.nurse_capacity;
    let capacity_pressure =
        clamp_score(((per_nurse - caps.target_min) / (caps.max - caps.target_min)) * 100.0);

    let raw = lost_score * w.lost_referrals
        + time_gap_score * w.time_to_start_gap
        + capacity_pressure * w.capacity_headroom;
    finalize_score(raw)
}

//! Capacity score: nurse caseload, referral-to-start speed, and leakage,
//! blended per the capacity weight triple.

use crate::benchmarks::BenchmarkTable;
use crate::engine::{finalize_score, resolve};
use crate::schema::v1::FormInputs;

pub fn capacity_score(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> u8 {
    let w = benchmarks.weights.capacity;
    let utilization = inputs
        .nurse_utilization_percent
        .unwrap_or(benchmarks.default_nurse_utilization);

    let per_nurse = resolve::infusions_per_nurse(inputs);

    let caps = &benchmarks.nurse_capacity;
    let mut nurse_score = if per_nurse < caps.low {
        30.0
    } else if per_nurse <= caps.target_max {
        // Linear ramp 60 -> 100 across the healthy band.
        let range = caps.target_max - caps.target_min;
        let pos = per_nurse - caps.target_min;
        60.0 + (pos / range) * 40.0
    } else if per_nurse <= caps.max {
        50.0
    } else {
        25.0
    };

    if utilization < 60.0 {
        nurse_score *= 0.8;
    } else if utilization > 90.0 {
        nurse_score *= 0.9;
    }

    let days = inputs.days_to_infusion_start;
    let timing = &benchmarks.referral_to_start;
    let time_score = if days <= timing.excellent {
        100.0
    } else if days <= timing.good {
        85.0
    } else if days <= timing.acceptable {
        60.0
    } else if days <= timing.poor {
        35.0
    } else {
        15.0
    };

    let leakage = inputs.referral_loss_percent;
    let leak_bands = &benchmarks.referral_leakage;
    let leakage_score = if leakage <= leak_bands.excellent {
        100.0
    } else if leakage <= leak_bands.good {
        80.0
    } else if leakage <= leak_bands.acceptable {
        55.0
    } else if leakage <= leak_bands.poor {
        30.0
    } else {
        10.0
    };

    let raw =
        nurse_score * w.nurse_load + time_score * w.time_to_start + leakage_score * w.leakage;
    finalize_score(raw)
}

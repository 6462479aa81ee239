//! Unit economics score: margin health, home delivery mix, cost efficiency.

use crate::benchmarks::BenchmarkTable;
use crate::engine::{finalize_score, resolve};
use crate::schema::v1::FormInputs;

pub fn unit_economics_score(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> u8 {
    let w = benchmarks.weights.unit_economics;

    let margin_pct = resolve::margin_percent_of_revenue(inputs);
    let margin_score = if margin_pct >= 35.0 {
        100.0
    } else if margin_pct >= 25.0 {
        80.0
    } else if margin_pct >= 15.0 {
        60.0
    } else if margin_pct >= 8.0 {
        40.0
    } else {
        20.0
    };

    let home_share = inputs.home_delivery_percent / 100.0;
    let home_score = 40.0 + home_share * 60.0;

    let cost = inputs.cost_per_episode;
    let bands = &benchmarks.cost_bands;
    let cost_score = if cost <= bands.low_max {
        90.0
    } else if cost <= bands.medium_max {
        70.0
    } else if cost <= bands.high_max {
        55.0
    } else {
        40.0
    };

    let raw = margin_score * w.margin_health
        + home_score * w.home_delivery_mix
        + cost_score * w.cost_efficiency;
    finalize_score(raw)
}

//! Executive summary and next-step generation.
//!
//! Bullets come from an ordered rule list followed by fixed-order filler so
//! the summary always carries exactly three; next steps are gated on score
//! thresholds and capped at five.

use crate::benchmarks::BenchmarkTable;
use crate::engine::format::{fmt_dollar, thousands};
use crate::engine::resolve;
use crate::schema::v1::{DiagnosticScores, ExecutiveSummary, FormInputs, OpportunityModel};

const BULLET_COUNT: usize = 3;
const MAX_STEPS: usize = 5;

pub fn executive_summary(
    inputs: &FormInputs,
    scores: &DiagnosticScores,
    opportunity: &OpportunityModel,
    benchmarks: &BenchmarkTable,
) -> ExecutiveSummary {
    let base_opportunity = opportunity.annual_revenue_opportunity.base;
    let driver = if scores.capacity_score < 60 {
        "primarily driven by capacity and access constraints"
    } else {
        "primarily driven by referral recovery and cost optimization"
    };
    let headline = format!(
        "Your program has an estimated {} annual revenue opportunity from operational \
         improvements, {driver}.",
        fmt_dollar(base_opportunity as f64)
    );

    let mut bullets = Vec::new();

    if inputs.referral_loss_percent > benchmarks.referral_leakage.good {
        let gap = opportunity.lost_annual_infusions as f64 * opportunity.revenue_per_infusion;
        bullets.push(format!(
            "Referral leakage of {}% is resulting in an estimated {} lost infusion episodes \
             annually, a directly recoverable revenue gap of {}.",
            inputs.referral_loss_percent,
            thousands(opportunity.lost_annual_infusions),
            fmt_dollar(gap)
        ));
    }

    if inputs.days_to_infusion_start > benchmarks.referral_to_start.good {
        bullets.push(format!(
            "Referral-to-start time of {} days is above the 2-4 day benchmark, creating a \
             compounding risk of referral abandonment and reduced competitive positioning \
             with ordering physicians.",
            inputs.days_to_infusion_start
        ));
    }

    let per_nurse = resolve::infusions_per_nurse(inputs);
    if per_nurse > benchmarks.nurse_capacity.target_max {
        bullets.push(format!(
            "Nurse utilization at {per_nurse:.1} infusions/week exceeds benchmark capacity, \
             limiting your ability to absorb new volume without risk to quality or staff \
             retention."
        ));
    } else if scores.unit_economics_score < 60 {
        bullets.push(format!(
            "Unit economics improvement, particularly increasing home delivery mix and \
             reducing cost per episode, could unlock {} in additional annual contribution \
             margin.",
            fmt_dollar(opportunity.annual_margin_opportunity.base as f64)
        ));
    }

    // Fixed-order filler guarantees exactly three bullets.
    while bullets.len() < BULLET_COUNT {
        bullets.push(filler_bullet(bullets.len(), inputs, opportunity));
    }
    bullets.truncate(BULLET_COUNT);

    ExecutiveSummary { headline, bullets }
}

fn filler_bullet(position: usize, inputs: &FormInputs, opportunity: &OpportunityModel) -> String {
    match position {
        0 => format!(
            "Current program volume of {} annual infusions can grow {}% with targeted \
             operational improvements to access and delivery efficiency.",
            inputs.infusions_per_week * 52.0,
            inputs.annual_growth_target
        ),
        1 => format!(
            "A {}% home delivery mix presents optimization opportunities in cost structure \
             and patient access; the home infusion model typically drives 10-15% lower cost \
             per episode.",
            inputs.home_delivery_percent
        ),
        _ => format!(
            "Addressing the top bottlenecks identified in this diagnostic could position \
             your program to capture the {} upside scenario over a 12-18 month optimization \
             horizon.",
            fmt_dollar(opportunity.annual_revenue_opportunity.aggressive as f64)
        ),
    }
}

pub fn next_steps(scores: &DiagnosticScores) -> Vec<String> {
    let mut steps = Vec::new();

    if scores.capacity_score < 60 {
        steps.push(
            "Validate nurse capacity and scheduling data with your operations team to \
             confirm utilization baselines."
                .to_string(),
        );
        steps.push(
            "Map current referral-to-start workflow to identify specific delay points: \
             authorization, intake, scheduling, or supply chain."
                .to_string(),
        );
    }

    if scores.growth_constraint_index > 50 {
        steps.push(
            "Identify a pilot referral source cohort to test a compressed intake process \
             and measure impact on time-to-start."
                .to_string(),
        );
        steps.push(
            "Quantify referral loss by source using your CRM or referral management system \
             to prioritize recovery efforts."
                .to_string(),
        );
    }

    if scores.unit_economics_score < 60 {
        steps.push(
            "Conduct a cost-per-episode analysis by therapy type to identify your highest \
             and lowest margin service lines."
                .to_string(),
        );
        steps.push(
            "Evaluate your home vs. facility delivery ratio by payer and therapy; there may \
             be untapped margin in shifting appropriate volume to home."
                .to_string(),
        );
    }

    steps.push(
        "Review assumptions in this model with your finance and operations leads to \
         calibrate the opportunity sizing to your specific program."
            .to_string(),
    );
    steps.push(
        "Request a walkthrough with our clinical operations team to explore how these \
         improvements translate to measurable program outcomes."
            .to_string(),
    );

    steps.truncate(MAX_STEPS);
    steps
}

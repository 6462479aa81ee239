//! Three-scenario annual volume and revenue/margin projection.

use crate::benchmarks::BenchmarkTable;
use crate::engine::resolve;
use crate::schema::v1::{FormInputs, OpportunityModel, ScenarioTriple};

const WEEKS_PER_YEAR: f64 = 52.0;

pub fn opportunity_model(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> OpportunityModel {
    let revenue_per_infusion = resolve::revenue_per_infusion(inputs);
    let margin_per_infusion = resolve::margin_per_episode(inputs);

    let current_annual_infusions = inputs.infusions_per_week * WEEKS_PER_YEAR;
    let lost_annual_infusions = (inputs.referrals_per_week
        * (inputs.referral_loss_percent / 100.0)
        * WEEKS_PER_YEAR)
        .round() as i64;

    let r = &benchmarks.recovery;
    let recoverable_infusions = if inputs.days_to_infusion_start > r.threshold_days {
        let referral_base = inputs.referrals_per_week * WEEKS_PER_YEAR;
        ScenarioTriple {
            conservative: (referral_base * r.conservative).round() as i64,
            base: (referral_base * r.base).round() as i64,
            aggressive: (referral_base * r.aggressive).round() as i64,
        }
    } else {
        ScenarioTriple::ZERO
    };

    let total_opportunity_infusions = ScenarioTriple {
        conservative: lost_annual_infusions + recoverable_infusions.conservative,
        base: lost_annual_infusions + recoverable_infusions.base,
        aggressive: lost_annual_infusions + recoverable_infusions.aggressive,
    };

    OpportunityModel {
        current_annual_infusions,
        lost_annual_infusions,
        recoverable_infusions,
        total_opportunity_infusions,
        revenue_per_infusion,
        margin_per_infusion,
        annual_revenue_opportunity: scale(total_opportunity_infusions, revenue_per_infusion),
        annual_margin_opportunity: scale(total_opportunity_infusions, margin_per_infusion),
    }
}

fn scale(infusions: ScenarioTriple, dollars_per_infusion: f64) -> ScenarioTriple {
    ScenarioTriple {
        conservative: (infusions.conservative as f64 * dollars_per_infusion).round() as i64,
        base: (infusions.base as f64 * dollars_per_infusion).round() as i64,
        aggressive: (infusions.aggressive as f64 * dollars_per_infusion).round() as i64,
    }
}

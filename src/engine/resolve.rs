//! Per-episode margin and revenue resolution.

use crate::schema::v1::{FormInputs, MarginInput};

/// Contribution margin per episode. Degrades to 0 when the active margin
/// variant carries no value; never an error.
pub fn margin_per_episode(inputs: &FormInputs) -> f64 {
    match inputs.margin {
        MarginInput::Dollar {
            margin_per_episode: Some(dollars),
        } => dollars,
        MarginInput::Percent {
            margin_percent: Some(pct),
        } => inputs.cost_per_episode * (pct / 100.0),
        _ => 0.0,
    }
}

/// Revenue per infusion: reported reimbursement when present and nonzero,
/// otherwise cost plus resolved margin.
pub fn revenue_per_infusion(inputs: &FormInputs) -> f64 {
    match inputs.avg_reimbursement {
        Some(reimbursement) if reimbursement != 0.0 => reimbursement,
        _ => inputs.cost_per_episode + margin_per_episode(inputs),
    }
}

/// Weekly infusions per nurse, guarding the zero-nurse division.
pub fn infusions_per_nurse(inputs: &FormInputs) -> f64 {
    if inputs.infusion_nurses > 0.0 {
        inputs.infusions_per_week / inputs.infusion_nurses
    } else {
        0.0
    }
}

/// Margin as a percentage of revenue, 0 when revenue is 0.
pub fn margin_percent_of_revenue(inputs: &FormInputs) -> f64 {
    let revenue = revenue_per_infusion(inputs);
    if revenue > 0.0 {
        (margin_per_episode(inputs) / revenue) * 100.0
    } else {
        0.0
    }
}

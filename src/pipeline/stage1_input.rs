use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::{FormInputs, LeadInfo};

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let raw = std::fs::read_to_string(&ctx.inputs_path)
            .with_context(|| format!("failed to read {}", ctx.inputs_path.display()))?;
        let inputs: FormInputs = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", ctx.inputs_path.display()))?;

        ctx.warnings.extend(range_warnings(&inputs));
        ctx.inputs = Some(inputs);

        if let Some(lead_path) = &ctx.lead_path {
            let raw = std::fs::read_to_string(lead_path)
                .with_context(|| format!("failed to read {}", lead_path.display()))?;
            let lead: LeadInfo = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", lead_path.display()))?;
            ctx.lead = Some(lead);
        }

        info!(warnings = ctx.warnings.len(), "inputs_ready");
        Ok(())
    }
}

/// Soft range checks. The form layer owns hard validation; out-of-range
/// values degrade the result rather than aborting the run.
pub fn range_warnings(inputs: &FormInputs) -> Vec<String> {
    let mut warnings = Vec::new();

    let percents = [
        ("referral_loss_percent", Some(inputs.referral_loss_percent)),
        ("home_delivery_percent", Some(inputs.home_delivery_percent)),
        ("annual_growth_target", Some(inputs.annual_growth_target)),
        (
            "nurse_utilization_percent",
            inputs.nurse_utilization_percent,
        ),
        ("readmission_rate", inputs.readmission_rate),
    ];
    for (field, value) in percents {
        if let Some(value) = value {
            if !(0.0..=100.0).contains(&value) {
                warnings.push(format!("{field} {value} outside 0-100 range"));
            }
        }
    }

    let non_negative = [
        ("infusions_per_week", inputs.infusions_per_week),
        ("referrals_per_week", inputs.referrals_per_week),
        ("infusion_nurses", inputs.infusion_nurses),
        ("days_to_infusion_start", inputs.days_to_infusion_start),
        ("cost_per_episode", inputs.cost_per_episode),
    ];
    for (field, value) in non_negative {
        if value < 0.0 {
            warnings.push(format!("{field} {value} is negative"));
        }
    }

    warnings
}

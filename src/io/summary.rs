use anyhow::Result;

use crate::ctx::Ctx;
use crate::engine::format::fmt_dollar;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let inputs = ctx
        .inputs
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("inputs missing"))?;
    let results = ctx
        .results
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("diagnostic results missing"))?;

    let mut out = String::new();
    out.push_str(&format!("infusiondx v{}\n", version));
    out.push_str(&format!(
        "Input: {} infusions/week, {} referrals/week, {} nurses\n",
        inputs.infusions_per_week, inputs.referrals_per_week, inputs.infusion_nurses
    ));
    out.push_str(&format!(
        "Scores: capacity={} economics={} constraint={}\n",
        results.scores.capacity_score,
        results.scores.unit_economics_score,
        results.scores.growth_constraint_index
    ));
    out.push_str(&format!(
        "Base opportunity: {} revenue / {} margin\n",
        fmt_dollar(results.opportunity.annual_revenue_opportunity.base as f64),
        fmt_dollar(results.opportunity.annual_margin_opportunity.base as f64)
    ));

    let titles: Vec<&str> = results
        .bottlenecks
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    if titles.is_empty() {
        out.push_str("Bottlenecks: none\n");
    } else {
        out.push_str(&format!("Bottlenecks: {}\n", titles.join(", ")));
    }

    Ok(out)
}

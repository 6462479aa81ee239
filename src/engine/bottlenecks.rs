//! Rule-based bottleneck detection.
//!
//! Rules fire independently in a fixed order; the collected items are then
//! stably sorted by severity and capped at four, so rule order is the
//! tie-break within a severity.

use crate::benchmarks::BenchmarkTable;
use crate::engine::resolve;
use crate::schema::v1::{BottleneckItem, FormInputs, Severity};

const MAX_ITEMS: usize = 4;

pub fn detect_bottlenecks(inputs: &FormInputs, benchmarks: &BenchmarkTable) -> Vec<BottleneckItem> {
    let mut items = Vec::new();

    push_start_delay(&mut items, inputs, benchmarks);
    push_leakage(&mut items, inputs, benchmarks);
    push_nurse_capacity(&mut items, inputs, benchmarks);
    push_margin_compression(&mut items, inputs);
    push_readmission(&mut items, inputs, benchmarks);

    items.sort_by_key(|item| item.severity);
    items.truncate(MAX_ITEMS);
    items
}

fn push_start_delay(items: &mut Vec<BottleneckItem>, inputs: &FormInputs, benchmarks: &BenchmarkTable) {
    let days = inputs.days_to_infusion_start;
    let timing = &benchmarks.referral_to_start;
    if days > timing.poor {
        items.push(BottleneckItem {
            title: "Critical Therapy Start Delay".to_string(),
            description: format!(
                "At {days} days to first infusion, you are significantly above the 2-4 day \
                 benchmark. Extended delays directly increase referral loss, patient \
                 dissatisfaction, and payer risk."
            ),
            severity: Severity::Critical,
            metric: format!("{days} days vs. 2-4 day benchmark"),
        });
    } else if days > timing.acceptable {
        items.push(BottleneckItem {
            title: "Above-Benchmark Therapy Start Time".to_string(),
            description: format!(
                "Referral-to-start of {days} days exceeds best-practice thresholds. Each \
                 additional day increases the probability of referral abandonment."
            ),
            severity: Severity::High,
            metric: format!("{days} days vs. 2-4 day benchmark"),
        });
    }
}

fn push_leakage(items: &mut Vec<BottleneckItem>, inputs: &FormInputs, benchmarks: &BenchmarkTable) {
    let loss = inputs.referral_loss_percent;
    let bands = &benchmarks.referral_leakage;
    if loss > bands.acceptable {
        let severity = if loss > bands.poor {
            Severity::Critical
        } else {
            Severity::High
        };
        items.push(BottleneckItem {
            title: "High Referral Leakage Rate".to_string(),
            description: format!(
                "Losing {loss}% of referrals represents substantial foregone revenue and \
                 threatens referral source relationships. The industry range for well-run \
                 programs is 3-8%."
            ),
            severity,
            metric: format!("{loss}% vs. 3-8% benchmark"),
        });
    } else if loss > bands.good {
        items.push(BottleneckItem {
            title: "Elevated Referral Leakage".to_string(),
            description: format!(
                "Referral loss of {loss}% is above best-practice range. Incremental \
                 improvement here has direct revenue impact."
            ),
            severity: Severity::Medium,
            metric: format!("{loss}% vs. 3-8% benchmark"),
        });
    }
}

fn push_nurse_capacity(
    items: &mut Vec<BottleneckItem>,
    inputs: &FormInputs,
    benchmarks: &BenchmarkTable,
) {
    let per_nurse = resolve::infusions_per_nurse(inputs);
    let caps = &benchmarks.nurse_capacity;
    if per_nurse > caps.max {
        items.push(BottleneckItem {
            title: "Nurse Capacity Constraint".to_string(),
            description: format!(
                "At {per_nurse:.1} infusions per nurse per week, your team is operating above \
                 sustainable capacity. This creates scheduling delays, quality risk, and \
                 limits growth headroom."
            ),
            severity: Severity::Critical,
            metric: format!("{per_nurse:.1} infusions/nurse/week vs. 6-10 benchmark"),
        });
    } else if per_nurse > caps.target_max {
        items.push(BottleneckItem {
            title: "Near-Capacity Staffing".to_string(),
            description: format!(
                "Nurse caseload of {per_nurse:.1} infusions/week is near the upper benchmark. \
                 Without capacity planning, volume growth will be constrained."
            ),
            severity: Severity::High,
            metric: format!("{per_nurse:.1} infusions/nurse/week vs. 6-10 benchmark"),
        });
    }
}

fn push_margin_compression(items: &mut Vec<BottleneckItem>, inputs: &FormInputs) {
    let revenue = resolve::revenue_per_infusion(inputs);
    let margin_pct = resolve::margin_percent_of_revenue(inputs);
    if margin_pct < 15.0 && revenue > 0.0 {
        let severity = if margin_pct < 8.0 {
            Severity::Critical
        } else {
            Severity::High
        };
        items.push(BottleneckItem {
            title: "Margin Compression Risk".to_string(),
            description: format!(
                "Contribution margin of {margin_pct:.1}% per episode leaves limited buffer \
                 against payer rate changes or volume shortfalls. Optimizing delivery cost \
                 structure and home infusion mix can materially improve margin."
            ),
            severity,
            metric: format!("{margin_pct:.1}% contribution margin"),
        });
    }
}

fn push_readmission(
    items: &mut Vec<BottleneckItem>,
    inputs: &FormInputs,
    benchmarks: &BenchmarkTable,
) {
    let Some(rate) = inputs.readmission_rate else {
        return;
    };
    let bands = &benchmarks.readmission;
    if rate > bands.acceptable {
        let severity = if rate > bands.poor {
            Severity::Critical
        } else {
            Severity::High
        };
        items.push(BottleneckItem {
            title: "Elevated Readmission Rate".to_string(),
            description: format!(
                "A {rate}% 30-day readmission rate is above best-in-class benchmarks and \
                 signals potential care gaps in the transition from inpatient to home \
                 infusion."
            ),
            severity,
            metric: format!("{rate}% vs. <10% benchmark"),
        });
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How per-episode contribution margin was supplied on the intake form.
///
/// Exactly one variant is meaningful per submission. A missing value inside
/// the active variant resolves to zero margin rather than an error; the form
/// layer owns presence validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "margin_input_type", rename_all = "snake_case")]
pub enum MarginInput {
    Dollar {
        #[serde(default)]
        margin_per_episode: Option<f64>,
    },
    Percent {
        #[serde(default)]
        margin_percent: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInputs {
    // Volume + demand
    pub infusions_per_week: f64,
    pub referrals_per_week: f64,
    pub referral_loss_percent: f64,

    // Staffing + delivery
    pub infusion_nurses: f64,
    #[serde(default)]
    pub nurse_utilization_percent: Option<f64>,
    pub home_delivery_percent: f64,

    // Timing + quality
    pub days_to_infusion_start: f64,
    #[serde(default)]
    pub readmission_rate: Option<f64>,

    // Unit economics
    pub cost_per_episode: f64,
    #[serde(flatten)]
    pub margin: MarginInput,
    #[serde(default)]
    pub avg_reimbursement: Option<f64>,
    pub annual_growth_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticScores {
    pub capacity_score: u8,
    pub unit_economics_score: u8,
    pub growth_constraint_index: u8,
}

/// Conservative/base/aggressive projection triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTriple {
    pub conservative: i64,
    pub base: i64,
    pub aggressive: i64,
}

impl ScenarioTriple {
    pub const ZERO: Self = Self {
        conservative: 0,
        base: 0,
        aggressive: 0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityModel {
    pub current_annual_infusions: f64,
    pub lost_annual_infusions: i64,
    pub recoverable_infusions: ScenarioTriple,
    pub total_opportunity_infusions: ScenarioTriple,
    pub revenue_per_infusion: f64,
    pub margin_per_infusion: f64,
    pub annual_revenue_opportunity: ScenarioTriple,
    pub annual_margin_opportunity: ScenarioTriple,
}

/// Declaration order is the sort order: critical first, medium last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckItem {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub headline: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResults {
    pub scores: DiagnosticScores,
    pub opportunity: OpportunityModel,
    pub bottlenecks: Vec<BottleneckItem>,
    pub executive_summary: ExecutiveSummary,
    pub next_steps: Vec<String>,
    pub inputs: FormInputs,
    pub benchmarks_used: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub lead: Option<LeadInfo>,
    pub results: DiagnosticResults,
}

impl DiagnosticReportV1 {
    pub fn new(tool_version: &str, lead: Option<LeadInfo>, results: DiagnosticResults) -> Self {
        Self {
            tool: "infusiondx".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            lead,
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSubmission {
    pub lead: LeadInfo,
    pub inputs: FormInputs,
    pub results: DiagnosticResults,
    pub submitted_at: DateTime<Utc>,
}

//! Editable benchmark constants for the diagnostic engine.
//!
//! All values are labeled assumptions and surfaced verbatim in the report's
//! disclosure section. The table is built once at startup and passed by
//! reference into every engine function; tests construct modified copies.

use std::collections::BTreeMap;

/// Excellent/good/acceptable/poor threshold bands, ascending.
#[derive(Debug, Clone)]
pub struct BandSet {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
    pub poor: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct NurseCapacityBands {
    pub low: f64,
    pub target_min: f64,
    pub target_max: f64,
    pub max: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct RecoveryModel {
    /// Recovery applies only when days-to-start exceeds this.
    pub threshold_days: f64,
    pub conservative: f64,
    pub base: f64,
    pub aggressive: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct CostBands {
    pub low_max: f64,
    pub medium_max: f64,
    pub high_max: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct HomeDeliveryDiscount {
    pub value: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CapacityWeights {
    pub nurse_load: f64,
    pub time_to_start: f64,
    pub leakage: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct UnitEconomicsWeights {
    pub margin_health: f64,
    pub home_delivery_mix: f64,
    pub cost_efficiency: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct GrowthConstraintWeights {
    pub lost_referrals: f64,
    pub time_to_start_gap: f64,
    pub capacity_headroom: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub capacity: CapacityWeights,
    pub unit_economics: UnitEconomicsWeights,
    pub growth_constraint: GrowthConstraintWeights,
}

#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    pub referral_to_start: BandSet,
    pub nurse_capacity: NurseCapacityBands,
    pub referral_leakage: BandSet,
    pub readmission: BandSet,
    pub default_nurse_utilization: f64,
    pub home_delivery_discount: HomeDeliveryDiscount,
    pub recovery: RecoveryModel,
    pub weights: ScoringWeights,
    pub cost_bands: CostBands,
}

impl BenchmarkTable {
    pub fn default_v1() -> Self {
        Self {
            referral_to_start: BandSet {
                excellent: 2.0,
                good: 4.0,
                acceptable: 7.0,
                poor: 14.0,
                label: "Assumption: Industry benchmark is 2-4 days for optimized home infusion programs.",
            },
            nurse_capacity: NurseCapacityBands {
                low: 4.0,
                target_min: 6.0,
                target_max: 10.0,
                max: 12.0,
                label: "Assumption: 6-10 infusions per nurse per week is considered healthy utilization for home infusion.",
            },
            referral_leakage: BandSet {
                excellent: 3.0,
                good: 8.0,
                acceptable: 15.0,
                poor: 20.0,
                label: "Assumption: Best-practice home infusion programs lose 3-8% of referrals due to capacity/timing constraints.",
            },
            readmission: BandSet {
                excellent: 5.0,
                good: 10.0,
                acceptable: 15.0,
                poor: 20.0,
                label: "Assumption: Best-in-class home infusion programs achieve <10% 30-day readmission rates.",
            },
            default_nurse_utilization: 75.0,
            home_delivery_discount: HomeDeliveryDiscount {
                value: 0.12,
                label: "Assumption: Home infusion typically achieves 10-15% lower cost per episode vs. clinic/facility delivery.",
            },
            recovery: RecoveryModel {
                threshold_days: 4.0,
                conservative: 0.10,
                base: 0.18,
                aggressive: 0.25,
                label: "Assumption: Reducing referral-to-start time below 4 days typically recovers 10-25% of at-risk referral volume.",
            },
            weights: ScoringWeights {
                capacity: CapacityWeights {
                    nurse_load: 0.40,
                    time_to_start: 0.35,
                    leakage: 0.25,
                },
                unit_economics: UnitEconomicsWeights {
                    margin_health: 0.50,
                    home_delivery_mix: 0.30,
                    cost_efficiency: 0.20,
                },
                growth_constraint: GrowthConstraintWeights {
                    lost_referrals: 0.45,
                    time_to_start_gap: 0.35,
                    capacity_headroom: 0.20,
                },
            },
            cost_bands: CostBands {
                low_max: 400.0,
                medium_max: 1200.0,
                high_max: 5000.0,
                label: "Assumption: Cost bands are directional estimates. Actual costs vary significantly by therapy type, payer mix, and operational model.",
            },
        }
    }

    /// Disclosure map attached to every diagnostic result.
    pub fn benchmarks_used(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(
            "Referral-to-Start Benchmark".to_string(),
            self.referral_to_start.label.to_string(),
        );
        map.insert(
            "Nurse Capacity Benchmark".to_string(),
            self.nurse_capacity.label.to_string(),
        );
        map.insert(
            "Referral Leakage Benchmark".to_string(),
            self.referral_leakage.label.to_string(),
        );
        map.insert(
            "Home Delivery Cost Advantage".to_string(),
            self.home_delivery_discount.label.to_string(),
        );
        map.insert(
            "Recoverable Volume Model".to_string(),
            self.recovery.label.to_string(),
        );
        map.insert(
            "Cost Per Episode Bands".to_string(),
            self.cost_bands.label.to_string(),
        );
        map
    }
}

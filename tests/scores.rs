use infusiondx::benchmarks::BenchmarkTable;
use infusiondx::engine::capacity::capacity_score;
use infusiondx::engine::economics::unit_economics_score;
use infusiondx::engine::growth::growth_constraint_index;
use infusiondx::schema::v1::{FormInputs, MarginInput};

fn base_inputs() -> FormInputs {
    FormInputs {
        infusions_per_week: 120.0,
        referrals_per_week: 145.0,
        referral_loss_percent: 12.0,
        infusion_nurses: 18.0,
        nurse_utilization_percent: None,
        home_delivery_percent: 70.0,
        days_to_infusion_start: 6.0,
        readmission_rate: None,
        cost_per_episode: 850.0,
        margin: MarginInput::Dollar {
            margin_per_episode: Some(210.0),
        },
        avg_reimbursement: None,
        annual_growth_target: 15.0,
    }
}

#[test]
fn reference_scenario_capacity() {
    // 6.67 infusions/nurse inside the target band, 6 days in the 4-7 band,
    // 12% leakage in the 8-15 band: 66.67*0.40 + 60*0.35 + 55*0.25 = 61.4.
    let benchmarks = BenchmarkTable::default_v1();
    assert_eq!(capacity_score(&base_inputs(), &benchmarks), 61);
}

#[test]
fn reference_scenario_unit_economics() {
    // 19.8% margin band 60, home 82, cost band 70: weighted 68.6 rounds to 69.
    let benchmarks = BenchmarkTable::default_v1();
    assert_eq!(unit_economics_score(&base_inputs(), &benchmarks), 69);
}

#[test]
fn reference_scenario_growth_constraint() {
    // lost 42, gap 16, pressure 11.1: weighted 26.7 rounds to 27.
    let benchmarks = BenchmarkTable::default_v1();
    assert_eq!(growth_constraint_index(&base_inputs(), &benchmarks), 27);
}

#[test]
fn utilization_inside_band_has_no_penalty() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut at_60 = base_inputs();
    at_60.nurse_utilization_percent = Some(60.0);
    let mut at_90 = base_inputs();
    at_90.nurse_utilization_percent = Some(90.0);
    let unpenalized = capacity_score(&base_inputs(), &benchmarks);
    assert_eq!(capacity_score(&at_60, &benchmarks), unpenalized);
    assert_eq!(capacity_score(&at_90, &benchmarks), unpenalized);
}

#[test]
fn low_utilization_penalizes_nurse_score() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut low = base_inputs();
    low.nurse_utilization_percent = Some(50.0);
    // Nurse sub-score 66.67 * 0.8 = 53.33; weighted 56.1 rounds to 56.
    assert_eq!(capacity_score(&low, &benchmarks), 56);
}

#[test]
fn high_utilization_penalizes_nurse_score() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut high = base_inputs();
    high.nurse_utilization_percent = Some(95.0);
    // Nurse sub-score 66.67 * 0.9 = 60.0; weighted 58.75 rounds to 59.
    assert_eq!(capacity_score(&high, &benchmarks), 59);
}

#[test]
fn overloaded_nurses_score_drops() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut overloaded = base_inputs();
    overloaded.infusion_nurses = 9.0; // 13.3 infusions/nurse, above max
    let loaded_score = capacity_score(&overloaded, &benchmarks);
    assert!(loaded_score < capacity_score(&base_inputs(), &benchmarks));
}

#[test]
fn zero_nurses_takes_understaffed_band() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut inputs = base_inputs();
    inputs.infusion_nurses = 0.0;
    // per-nurse 0 is below the low band, nurse sub-score 30.
    assert_eq!(capacity_score(&inputs, &benchmarks), 47);
}

#[test]
fn home_delivery_share_moves_economics_linearly() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut none = base_inputs();
    none.home_delivery_percent = 0.0;
    let mut full = base_inputs();
    full.home_delivery_percent = 100.0;
    // Home sub-score spans 40..100 at 0.30 weight: 18 point spread.
    let low = unit_economics_score(&none, &benchmarks);
    let high = unit_economics_score(&full, &benchmarks);
    assert_eq!(i32::from(high) - i32::from(low), 18);
}

#[test]
fn growth_constraint_saturates_on_extreme_leakage() {
    let benchmarks = BenchmarkTable::default_v1();
    let mut extreme = base_inputs();
    extreme.referral_loss_percent = 40.0; // 40 * 3.5 clamps to 100
    extreme.days_to_infusion_start = 30.0;
    extreme.infusion_nurses = 8.0; // 15 per nurse, pressure clamps to 100
    assert_eq!(growth_constraint_index(&extreme, &benchmarks), 100);
}

#[test]
fn scores_stay_in_range_across_input_sweep() {
    let benchmarks = BenchmarkTable::default_v1();
    for nurses in [0.0, 1.0, 6.0, 18.0, 100.0] {
        for days in [0.0, 2.0, 4.0, 7.0, 14.0, 45.0] {
            for loss in [0.0, 3.0, 8.0, 15.0, 20.0, 95.0] {
                let mut inputs = base_inputs();
                inputs.infusion_nurses = nurses;
                inputs.days_to_infusion_start = days;
                inputs.referral_loss_percent = loss;
                assert!(capacity_score(&inputs, &benchmarks) <= 100);
                assert!(unit_economics_score(&inputs, &benchmarks) <= 100);
                assert!(growth_constraint_index(&inputs, &benchmarks) <= 100);
            }
        }
    }
}

#[test]
fn weight_triples_sum_to_one() {
    let w = BenchmarkTable::default_v1().weights;
    let capacity = w.capacity.nurse_load + w.capacity.time_to_start + w.capacity.leakage;
    let economics = w.unit_economics.margin_health
        + w.unit_economics.home_delivery_mix
        + w.unit_economics.cost_efficiency;
    let growth = w.growth_constraint.lost_referrals
        + w.growth_constraint.time_to_start_gap
        + w.growth_constraint.capacity_headroom;
    assert!((capacity - 1.0).abs() < 1e-9);
    assert!((economics - 1.0).abs() < 1e-9);
    assert!((growth - 1.0).abs() < 1e-9);
}

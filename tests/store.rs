use chrono::Utc;
use infusiondx::benchmarks::BenchmarkTable;
use infusiondx::engine::run_diagnostic;
use infusiondx::schema::v1::{
    DiagnosticSubmission, FormInputs, LeadInfo, MarginInput,
};
use infusiondx::store::{JsonFileStore, NullStore, SubmissionStore};

fn submission() -> DiagnosticSubmission {
    let inputs = FormInputs {
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
    };
    let results = run_diagnostic(&inputs, &BenchmarkTable::default_v1());
    DiagnosticSubmission {
        lead: LeadInfo {
            name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            company: "Harbor Infusion".to_string(),
            role: "VP Operations".to_string(),
        },
        inputs,
        results,
        submitted_at: Utc::now(),
    }
}

#[test]
fn save_creates_file_and_returns_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submissions.json");
    let store = JsonFileStore::new(&path);

    let id = store.save(&submission()).unwrap();
    assert!(id.starts_with("sub_"));
    assert!(path.exists());

    let raw = std::fs::read_to_string(&path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["id"], serde_json::Value::String(id));
    assert_eq!(entries[0]["lead"]["company"], "Harbor Infusion");
}

#[test]
fn save_appends_to_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submissions.json");
    let store = JsonFileStore::new(&path);

    let first = store.save(&submission()).unwrap();
    let second = store.save(&submission()).unwrap();
    assert_ne!(first, second);

    let raw = std::fs::read_to_string(&path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
}

#[test]
fn save_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("submissions.json");
    let store = JsonFileStore::new(&path);
    store.save(&submission()).unwrap();
    assert!(path.exists());
}

#[test]
fn corrupt_store_file_surfaces_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submissions.json");
    std::fs::write(&path, "not json").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(store.save(&submission()).is_err());
}

#[test]
fn null_store_discards_and_reports_disabled() {
    let id = NullStore.save(&submission()).unwrap();
    assert_eq!(id, "sub_disabled");
}

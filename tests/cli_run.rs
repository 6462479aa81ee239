use assert_cmd::Command;

const INPUTS: &str = r#"{
    "infusions_per_week": 120,
    "referrals_per_week": 145,
    "referral_loss_percent": 12,
    "infusion_nurses": 18,
    "home_delivery_percent": 70,
    "days_to_infusion_start": 6,
    "cost_per_episode": 850,
    "margin_input_type": "dollar",
    "margin_per_episode": 210,
    "annual_growth_target": 15
}"#;

const LEAD: &str = r#"{
    "name": "Dana Whitfield",
    "email": "dana@example.com",
    "company": "Harbor Infusion",
    "role": "VP Operations"
}"#;

#[test]
fn run_writes_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let inputs_path = dir.path().join("inputs.json");
    std::fs::write(&inputs_path, INPUTS).unwrap();
    let out_dir = dir.path().join("out");

    let mut cmd = Command::cargo_bin("infusiondx").unwrap();
    cmd.arg("run")
        .arg("--inputs")
        .arg(&inputs_path)
        .arg("--out")
        .arg(&out_dir)
        .arg("--json");
    let assert = cmd.assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Scores: capacity=61 economics=69 constraint=27"));

    let raw = std::fs::read_to_string(out_dir.join("diagnostic.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(report["tool"], "infusiondx");
    assert_eq!(report["results"]["opportunity"]["lost_annual_infusions"], 905);
}

#[test]
fn run_with_lead_and_store_persists_submission() {
    let dir = tempfile::tempdir().unwrap();
    let inputs_path = dir.path().join("inputs.json");
    let lead_path = dir.path().join("lead.json");
    std::fs::write(&inputs_path, INPUTS).unwrap();
    std::fs::write(&lead_path, LEAD).unwrap();
    let out_dir = dir.path().join("out");
    let store_path = dir.path().join("submissions.json");

    let mut cmd = Command::cargo_bin("infusiondx").unwrap();
    cmd.arg("run")
        .arg("--inputs")
        .arg(&inputs_path)
        .arg("--lead")
        .arg(&lead_path)
        .arg("--out")
        .arg(&out_dir)
        .arg("--html")
        .arg("--store")
        .arg(&store_path);
    let assert = cmd.assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("submission: sub_"));

    assert!(out_dir.join("executive_brief.html").exists());
    let raw = std::fs::read_to_string(&store_path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
}

#[test]
fn store_failure_does_not_block_results() {
    let dir = tempfile::tempdir().unwrap();
    let inputs_path = dir.path().join("inputs.json");
    let lead_path = dir.path().join("lead.json");
    std::fs::write(&inputs_path, INPUTS).unwrap();
    std::fs::write(&lead_path, LEAD).unwrap();
    let out_dir = dir.path().join("out");
    // Corrupt store file: the save fails but the run still succeeds.
    let store_path = dir.path().join("submissions.json");
    std::fs::write(&store_path, "not json").unwrap();

    let mut cmd = Command::cargo_bin("infusiondx").unwrap();
    cmd.arg("run")
        .arg("--inputs")
        .arg(&inputs_path)
        .arg("--lead")
        .arg(&lead_path)
        .arg("--out")
        .arg(&out_dir)
        .arg("--store")
        .arg(&store_path);
    let assert = cmd.assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("submission: unsaved"));
}

#[test]
fn validate_reports_derived_figures() {
    let dir = tempfile::tempdir().unwrap();
    let inputs_path = dir.path().join("inputs.json");
    std::fs::write(&inputs_path, INPUTS).unwrap();

    let mut cmd = Command::cargo_bin("infusiondx").unwrap();
    cmd.arg("validate").arg("--inputs").arg(&inputs_path);
    let assert = cmd.assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("infusiondx validate ok"));
    assert!(stdout.contains("infusions/nurse/week: 6.67"));
    assert!(stdout.contains("margin/episode: 210.00"));
}

#[test]
fn run_fails_cleanly_on_missing_inputs_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("infusiondx").unwrap();
    cmd.arg("run")
        .arg("--inputs")
        .arg(dir.path().join("missing.json"))
        .arg("--out")
        .arg(dir.path().join("out"));
    cmd.assert().failure();
}

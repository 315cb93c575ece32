//! End-to-end tests for the worker and contractor CLI flows.
//!
//! Each test gets an isolated data directory via `LABOUR_HAAT_DATA_DIR`, so
//! suites can run in parallel without sharing session state.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;

use fixtures::{temp_data_dir, test_baseline, write_baseline_file};

/// Path to the labour-haat binary
fn labour_haat_bin() -> &'static str {
    env!("CARGO_BIN_EXE_labour-haat")
}

fn run(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(labour_haat_bin())
        .env("LABOUR_HAAT_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_checkin_status_checkout_flow() {
    let (data_dir, _guard) = temp_data_dir();

    // Fresh session: not checked in
    let status = stdout_json(&run(&data_dir, &["status", "--json"]));
    assert_eq!(status["checkedIn"], false);

    // Check in
    let record = stdout_json(&run(
        &data_dir,
        &[
            "checkin", "--skill", "mason", "--location", "Patia Chowk", "--json",
        ],
    ));
    assert_eq!(record["skillId"], "mason");
    assert_eq!(record["location"], "Patia Chowk");

    // Status reflects the persisted record
    let status = stdout_json(&run(&data_dir, &["status", "--json"]));
    assert_eq!(status["checkedIn"], true);
    assert_eq!(status["record"]["skillId"], "mason");

    // Re-check-in replaces, never duplicates
    let record = stdout_json(&run(
        &data_dir,
        &[
            "checkin", "--skill", "welder", "--location", "Saheed Nagar", "--json",
        ],
    ));
    assert_eq!(record["skillId"], "welder");
    let status = stdout_json(&run(&data_dir, &["status", "--json"]));
    assert_eq!(status["record"]["skillId"], "welder");
    assert_eq!(status["record"]["location"], "Saheed Nagar");

    // Check out; second checkout stays a no-op success
    let out = run(&data_dir, &["checkout", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let out = run(&data_dir, &["checkout", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let status = stdout_json(&run(&data_dir, &["status", "--json"]));
    assert_eq!(status["checkedIn"], false);
}

#[test]
fn test_checkin_rejects_unknown_skill_with_exit_code_2() {
    let (data_dir, _guard) = temp_data_dir();

    let output = run(
        &data_dir,
        &[
            "checkin", "--skill", "astronaut", "--location", "Patia Chowk",
        ],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown skill"));

    // Nothing was persisted
    let status = stdout_json(&run(&data_dir, &["status", "--json"]));
    assert_eq!(status["checkedIn"], false);
}

#[test]
fn test_workers_reflects_live_checkin_and_checkout() {
    let (data_dir, guard) = temp_data_dir();
    let baseline_path = write_baseline_file(&guard, &test_baseline());
    let baseline_arg = baseline_path.to_str().unwrap();

    let result = stdout_json(&run(
        &data_dir,
        &["workers", "--baseline", baseline_arg, "--json"],
    ));
    assert_eq!(result["summary"]["totalWorkers"], 80);

    run(
        &data_dir,
        &[
            "checkin", "--skill", "mason", "--location", "Patia Chowk", "--json",
        ],
    );

    // Live check-in absorbed into the matching bucket
    let result = stdout_json(&run(
        &data_dir,
        &["workers", "--baseline", baseline_arg, "--json"],
    ));
    assert_eq!(result["summary"]["totalWorkers"], 81);
    let entries = result["entries"].as_array().unwrap();
    let bucket = entries
        .iter()
        .find(|e| e["skillId"] == "mason" && e["location"] == "Patia Chowk")
        .unwrap();
    assert_eq!(bucket["count"], 13);
    assert_eq!(bucket["isLive"], true);

    // Aggregation is recomputed per call: repeating it does not double count
    let result = stdout_json(&run(
        &data_dir,
        &["workers", "--baseline", baseline_arg, "--json"],
    ));
    assert_eq!(result["summary"]["totalWorkers"], 81);

    // After checkout the live contribution disappears
    run(&data_dir, &["checkout"]);
    let result = stdout_json(&run(
        &data_dir,
        &["workers", "--baseline", baseline_arg, "--json"],
    ));
    assert_eq!(result["summary"]["totalWorkers"], 80);
}

#[test]
fn test_workers_filters() {
    let (data_dir, guard) = temp_data_dir();
    let baseline_path = write_baseline_file(&guard, &test_baseline());
    let baseline_arg = baseline_path.to_str().unwrap();

    let result = stdout_json(&run(
        &data_dir,
        &[
            "workers",
            "--baseline",
            baseline_arg,
            "--location",
            "Patia Chowk",
            "--json",
        ],
    ));
    assert_eq!(result["entries"].as_array().unwrap().len(), 3);
    // Summary stays global even when the listing is filtered
    assert_eq!(result["summary"]["totalWorkers"], 80);

    let result = stdout_json(&run(
        &data_dir,
        &[
            "workers",
            "--baseline",
            baseline_arg,
            "--location",
            "CRP Square",
            "--json",
        ],
    ));
    assert!(result["entries"].as_array().unwrap().is_empty());
}

#[test]
fn test_broadcast_sends_and_records_history() {
    let (data_dir, _guard) = temp_data_dir();

    let record = stdout_json(&run(
        &data_dir,
        &[
            "broadcast",
            "--skill",
            "mason",
            "--count",
            "5",
            "--location",
            "Patia Chowk",
            "--wage",
            "500",
            "--duration",
            "Starts tomorrow",
            "--language",
            "english",
            "--json",
        ],
    ));

    assert_eq!(
        record["message"],
        "Need 5 Mason at Patia Chowk. ₹500/day. Starts tomorrow. "
    );
    assert_eq!(record["language"], "english");
    assert_eq!(record["deliveryMode"], "synthesized-voice");

    // History file was appended next to the session state
    let history_raw = std::fs::read_to_string(data_dir.join("broadcasts.json")).unwrap();
    let history: serde_json::Value = serde_json::from_str(&history_raw).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["id"], record["id"]);
}

#[test]
fn test_broadcast_custom_message() {
    let (data_dir, _guard) = temp_data_dir();

    let record = stdout_json(&run(
        &data_dir,
        &[
            "broadcast",
            "--skill",
            "carpenter",
            "--count",
            "2",
            "--location",
            "Khandagiri Square",
            "--wage",
            "600",
            "--message",
            "Recorded voice message (demo)",
            "--json",
        ],
    ));

    assert_eq!(record["message"], "Recorded voice message (demo)");
    assert_eq!(record["deliveryMode"], "custom-voice");
}

#[test]
fn test_broadcast_incomplete_requirement_exit_code_3() {
    let (data_dir, _guard) = temp_data_dir();

    // Wage missing
    let output = run(
        &data_dir,
        &[
            "broadcast", "--skill", "mason", "--count", "5", "--location", "Patia Chowk",
        ],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("daily wage"));

    // No history entry was written
    assert!(!data_dir.join("broadcasts.json").exists());
}

#[test]
fn test_broadcast_preview_does_not_send() {
    let (data_dir, _guard) = temp_data_dir();

    let output = run(
        &data_dir,
        &[
            "broadcast",
            "--skill",
            "helper",
            "--count",
            "5",
            "--location",
            "Patia Chowk",
            "--wage",
            "500",
            "--preview",
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("मज़दूर चाहिए"));

    assert!(!data_dir.join("broadcasts.json").exists());
}

#[test]
fn test_catalog_listings() {
    let (data_dir, _guard) = temp_data_dir();

    let skills = stdout_json(&run(&data_dir, &["skills", "--json"]));
    assert_eq!(skills.as_array().unwrap().len(), 8);
    assert_eq!(skills[0]["id"], "mason");

    let locations = stdout_json(&run(&data_dir, &["locations", "--json"]));
    assert_eq!(locations.as_array().unwrap().len(), 10);
    assert_eq!(locations[0], "Patia Chowk");
}

use std::fs;

use covgate::cmd::rules::{RulesCommandArgs, run};
use covgate::domain::report::RuleSeverity;
use covgate::engine::rules::{RULE_FILE_NAMES, evaluate};
use tempfile::tempdir;

#[test]
fn rule_file_set_is_fixed_and_ordered() {
    assert_eq!(RULE_FILE_NAMES, ["firestore.rules", "storage.rules"]);
}

#[test]
fn critical_and_info_findings_can_coexist_in_one_file() {
    let content = "allow read, write: if true;\nallow write: if request.auth != null;";
    let findings = evaluate("firestore.rules", content);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].severity, RuleSeverity::Critical);
    assert_eq!(findings[1].severity, RuleSeverity::Info);
}

#[test]
fn mixed_present_and_missing_files_report_both_statuses() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("firestore.rules"),
        "allow read: if request.auth != null;",
    )
    .expect("write rules");

    let response = run(&RulesCommandArgs {
        rules_dir: dir.path().to_path_buf(),
    });
    assert_eq!(response.exit_code, 0);
    assert_eq!(response.payload["files"][0]["status"], "CHECKED");
    assert_eq!(response.payload["files"][1]["status"], "SKIPPING");
    assert_eq!(response.payload["summary"]["checked"], 1);
    assert_eq!(response.payload["summary"]["skipped"], 1);
}

#[test]
fn unreadable_rule_file_maps_to_usage_error_payload() {
    let dir = tempdir().expect("temp dir");
    fs::create_dir(dir.path().join("storage.rules")).expect("create dir");

    let response = run(&RulesCommandArgs {
        rules_dir: dir.path().to_path_buf(),
    });
    assert_eq!(response.exit_code, 3);
    assert_eq!(response.payload["error"], "input_usage_error");
    assert!(
        response.payload["message"]
            .as_str()
            .expect("message string")
            .contains("failed to read rules file")
    );
}

#[test]
fn verdict_is_deterministic_for_unchanged_inputs() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("storage.rules"),
        "allow read, write: if true;",
    )
    .expect("write rules");

    let args = RulesCommandArgs {
        rules_dir: dir.path().to_path_buf(),
    };
    let first = run(&args);
    let second = run(&args);
    assert_eq!(first, second);
    assert_eq!(first.exit_code, 1);
}

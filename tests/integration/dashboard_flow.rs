use std::fs;

use covgate::cmd::dashboard::{DashboardCommandArgs, run};
use covgate::engine::dashboard::{chart_points, load_history};
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn render_is_deterministic_for_unchanged_history() {
    let dir = tempdir().expect("temp dir");
    let history_path = dir.path().join("coverage_history.json");
    fs::write(
        &history_path,
        r#"[{"timestamp":"2026-08-28T10:00:00Z","percentage":88.888}]"#,
    )
    .expect("write history");

    let run_once = |output_name: &str| {
        let output_path = dir.path().join(output_name);
        let response = run(&DashboardCommandArgs {
            history: history_path.clone(),
            output: output_path.clone(),
        });
        assert_eq!(response.exit_code, 0);
        fs::read_to_string(output_path).expect("read page")
    };

    let first = run_once("first.html");
    let second = run_once("second.html");
    assert_eq!(first, second);
    assert!(first.contains("\"date\":\"2026-08-28T10:00:00Z\""));
    assert!(first.contains("\"percentage\":88.89"));
}

#[test]
fn offset_timestamps_embed_verbatim_without_day_folding() {
    let dir = tempdir().expect("temp dir");
    let history_path = dir.path().join("coverage_history.json");
    let output_path = dir.path().join("dashboard.html");
    fs::write(
        &history_path,
        r#"[{"timestamp":"2026-08-28T23:30:00+09:00","percentage":91.0}]"#,
    )
    .expect("write history");

    let response = run(&DashboardCommandArgs {
        history: history_path,
        output: output_path.clone(),
    });
    assert_eq!(response.exit_code, 0);
    let page = fs::read_to_string(output_path).expect("read page");
    assert!(page.contains("\"date\":\"2026-08-28T23:30:00+09:00\""));
    assert!(!page.contains("\"date\":\"2026-08-28\""));
}

#[test]
fn point_count_matches_entry_count() {
    let entries: Vec<Value> = (0..25)
        .map(|day| json!({"date": format!("2026-07-{:02}", day + 1), "percentage": day as f64}))
        .collect();
    let points = chart_points(&entries);
    assert_eq!(points.len(), entries.len());
}

#[test]
fn history_order_is_preserved_without_deduplication() {
    let entries = vec![
        json!({"date": "2026-08-02", "percentage": 90.0}),
        json!({"date": "2026-08-01", "percentage": 80.0}),
        json!({"date": "2026-08-02", "percentage": 90.0}),
    ];
    let points = chart_points(&entries);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].date, "2026-08-02");
    assert_eq!(points[1].date, "2026-08-01");
    assert_eq!(points[2].date, "2026-08-02");
}

#[test]
fn load_keeps_well_formed_array_without_degrading() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("coverage_history.json");
    fs::write(&path, "[]").expect("write history");
    let loaded = load_history(&path);
    assert!(loaded.entries.is_empty());
    assert!(!loaded.degraded);
}

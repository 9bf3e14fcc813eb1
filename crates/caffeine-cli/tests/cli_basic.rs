//! Basic CLI E2E tests.
//!
//! Tests spawn the built binary and verify its outputs.

mod common;

use common::*;

#[test]
fn test_session_empty_state_message() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli_with_input(home.path(), &["session"], "quit\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "Add one or more doses to see the chart and table.");
}

#[test]
fn test_session_is_default_command() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli_with_input(home.path(), &[], "add\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "Cumulative Caffeine");
    assert_contains(&stdout, "Average (5h): 100 mg");
}

#[test]
fn test_session_script() {
    let home = tempfile::tempdir().unwrap();
    let script = "add\nhour +10\nhour -1\nminute +10\nadd\nselect 20\nshow\nquit\n";
    let (stdout, _, code) = run_cli_with_input(home.path(), &["session", "--width", "50"], script);
    assert_eq!(code, 0);
    assert_contains(&stdout, "Selected time: Day 1 20:00");
    assert_contains(&stdout, "17:10");
}

#[test]
fn test_session_reports_bad_action_and_continues() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli_with_input(home.path(), &["session"], "hour +3\nadd\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "error: 'hour' only accepts steps of ±1/±10, got +3");
    assert_contains(&stdout, "Cumulative Caffeine");
}

#[test]
fn test_session_json_lines() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) =
        run_cli_with_input(home.path(), &["session", "--json"], "add\nclear\n");
    assert_eq!(code, 0);
    let views: Vec<serde_json::Value> = stdout
        .lines()
        .map(parse_json::<serde_json::Value>)
        .collect();
    assert_eq!(views.len(), 3);
    assert_json_field(&views[1], "chart");
    assert_eq!(views[1]["doses"].as_array().unwrap().len(), 1);
    assert!(views[2]["chart"].is_null());
    assert_eq!(views[2]["selected_hours"], 0.0);
}

#[test]
fn test_chart_json() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["chart", "--dose", "1,08:00,100", "--dose", "1,16:00,100", "--at", "20", "--json"],
    );
    let view: serde_json::Value = parse_json(&stdout);
    assert_json_field(&view, "readouts");
    assert_eq!(view["readouts"][1]["text"], "76 mg");
    assert_eq!(view["readouts"][0]["text"], "46 mg");
    assert_eq!(view["readouts"][2]["text"], "98 mg");
    assert_eq!(view["chart"]["x_axis"]["min"], 8.0);
    assert_eq!(view["chart"]["x_axis"]["max"], 40.0);
    assert_eq!(view["chart"]["band"]["x"].as_array().unwrap().len(), 32);
}

#[test]
fn test_chart_text() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["chart", "--dose", "2,07:45,200"]);
    assert_contains(&stdout, "Selected time: Day 2 07:45");
    assert_contains(&stdout, "Max (7h): 200 mg");
}

#[test]
fn test_chart_rejects_bad_dose() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["chart", "--dose", "1,25:00,100"]);
    assert_contains(&stderr, "hour must be 0-23");
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["config", "get", "inputs.dose_mg"]);
    assert_eq!(stdout.trim(), "100");

    run_cli_success(home.path(), &["config", "set", "inputs.dose_mg", "250"]);
    let stdout = run_cli_success(home.path(), &["config", "get", "inputs.dose_mg"]);
    assert_eq!(stdout.trim(), "250");

    let (stdout, _, code) = run_cli_with_input(home.path(), &["session"], "quit\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "Next dose: 250 mg");
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["config", "get", "inputs.half_life"]);
    assert_contains(&stderr, "unknown key");
    let (_, stderr, _) = run_cli_failure(home.path(), &["config", "set", "render.width", "wide"]);
    assert_contains(&stderr, "render.width");
}

#[test]
fn test_config_list_and_reset() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "render.height", "30"]);
    let list: serde_json::Value = parse_json(&run_cli_success(home.path(), &["config", "list"]));
    assert_eq!(list["render"]["height"], 30);

    run_cli_success(home.path(), &["config", "reset"]);
    let list: serde_json::Value = parse_json(&run_cli_success(home.path(), &["config", "list"]));
    assert_eq!(list["render"]["height"], 16);
}

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory with the template saved as
/// `plan.json`
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let plan_path = temp_dir.path().join("plan.json");
    std::fs::write(&plan_path, stride_core::TEMPLATE_JSON).expect("Failed to write plan file");
    (temp_dir, plan_path)
}

/// Helper function to create a Command with --no-color and the given storage
fn stride_cmd(storage: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.arg("--no-color")
        .arg("--storage-file")
        .arg(storage);
    cmd
}

fn load_spring_plan(storage: &Path, plan_path: &Path) {
    stride_cmd(storage)
        .arg("load")
        .arg(plan_path)
        .args(["--start", "2024-03-04", "--id", "spring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved plan with ID: spring"));
}

#[test]
fn test_cli_template_prints_json() {
    let (temp_dir, _) = create_cli_test_environment();

    stride_cmd(&temp_dir.path().join("unused.db"))
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weekNumber\": 1"))
        .stdout(predicate::str::contains("\"Monday\""));

    assert!(!temp_dir.path().join("unused.db").exists());
}

#[test]
fn test_cli_reflow_prints_dated_plan() {
    let (temp_dir, plan_path) = create_cli_test_environment();

    stride_cmd(&temp_dir.path().join("unused.db"))
        .arg("reflow")
        .arg(&plan_path)
        .args(["--start", "2024-03-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024-03-04\""))
        .stdout(predicate::str::contains("\"2024-03-31\""))
        .stdout(predicate::str::contains("\"Monday\"").not());
}

#[test]
fn test_cli_reflow_rejects_bad_start_date() {
    let (temp_dir, plan_path) = create_cli_test_environment();

    stride_cmd(&temp_dir.path().join("unused.db"))
        .arg("reflow")
        .arg(&plan_path)
        .args(["--start", "March 4th"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid date"));
}

#[test]
fn test_cli_list_empty_plans() {
    let (temp_dir, _) = create_cli_test_environment();

    stride_cmd(&temp_dir.path().join("cli_test.db"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_load_list_and_show() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");

    load_spring_plan(&storage, &plan_path);

    stride_cmd(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4-Week Action Plan"))
        .stdout(predicate::str::contains("(ID: spring)"))
        .stdout(predicate::str::contains("4 weeks · 32 tasks"));

    stride_cmd(&storage)
        .args(["show", "spring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Monday, March 4, 2024"))
        .stdout(predicate::str::contains("`week1-2024-03-04-0`"))
        .stdout(predicate::str::contains("- Progress: 0/32"));
}

#[test]
fn test_cli_load_from_stdin() {
    let (temp_dir, _) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");

    stride_cmd(&storage)
        .args(["load", "-"])
        .write_stdin(r#"{"title": "Piped", "weeks": [{"weekNumber": 1, "theme": "Only"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved plan with ID:"))
        .stdout(predicate::str::contains("# Piped"));
}

#[test]
fn test_cli_load_invalid_json_fails() {
    let (temp_dir, _) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");

    stride_cmd(&storage)
        .args(["load", "-"])
        .write_stdin("{\"title\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));

    stride_cmd(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_show_missing_plan_fails() {
    let (temp_dir, _) = create_cli_test_environment();

    stride_cmd(&temp_dir.path().join("cli_test.db"))
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 'nope' not found"));
}

#[test]
fn test_cli_week_edit() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");
    load_spring_plan(&storage, &plan_path);

    stride_cmd(&storage)
        .args([
            "week",
            "edit",
            "1",
            "--plan",
            "spring",
            "--theme",
            "Base",
            "--duration",
            "2024-03-04:0=45 minutes",
            "--task",
            "2=Foam roll",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan with ID: spring"))
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("## Week 1: Base (0/9)"))
        .stdout(predicate::str::contains("45 minutes"))
        .stdout(predicate::str::contains("Foam roll"));
}

#[test]
fn test_cli_week_edit_rejects_bad_intensity() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");
    load_spring_plan(&storage, &plan_path);

    stride_cmd(&storage)
        .args(["week", "edit", "1", "--intensity", "2024-03-04:0=9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid intensity zone"));

    stride_cmd(&storage)
        .args(["week", "edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_cli_week_replace() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");
    load_spring_plan(&storage, &plan_path);

    stride_cmd(&storage)
        .args(["week", "replace", "2", "-"])
        .write_stdin(
            r#"{"weekNumber": 2, "theme": "Recovery", "days": {"2024-03-13": [{"activity": "Walk", "intensity": "1"}]}}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced week 2 of '4-Week Action Plan"))
        .stdout(predicate::str::contains("## Week 2: Recovery (0/1)"))
        .stdout(predicate::str::contains("### Wednesday, March 13, 2024"));

    stride_cmd(&storage)
        .args(["week", "replace", "7", "-"])
        .write_stdin(r#"{"weekNumber": 7}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Week 7 not found"));
}

#[test]
fn test_cli_single_store_keeps_one_plan() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("action_plans.json");

    for _ in 0..2 {
        stride_cmd(&storage)
            .args(["--store", "single", "load"])
            .arg(&plan_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved plan '4-Week Action Plan"));
    }

    stride_cmd(&storage)
        .args(["--store", "single", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4-Week Action Plan").count(1));
}

#[test]
fn test_cli_owners_are_separate() {
    let (temp_dir, plan_path) = create_cli_test_environment();
    let storage = temp_dir.path().join("cli_test.db");
    load_spring_plan(&storage, &plan_path);

    stride_cmd(&storage)
        .args(["--owner", "someone_else", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

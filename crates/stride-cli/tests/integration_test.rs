//! Integration tests comparing CLI output with the core Display implementations
//!
//! The CLI and the MCP server both print the core Display output, so with
//! `--no-color` the CLI output must match it byte for byte.

use std::process::Command;

use stride_core::{
    display::CreateResult, params::LoadPlan, OwnerId, PlanList, Planner, PlannerBuilder,
    TEMPLATE_JSON,
};
use tempfile::TempDir;

/// Helper function to create a test planner with temporary storage
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_storage_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(storage: &std::path::Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stride"));
    cmd.arg("--no-color").arg("--storage-file").arg(storage);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn local() -> OwnerId {
    OwnerId::new("local").unwrap()
}

#[tokio::test]
async fn test_list_output_matches_display() {
    let (planner, _temp_dir) = create_test_planner().await;
    planner
        .load_plan(
            &local(),
            &LoadPlan {
                plan_json: TEMPLATE_JSON.to_string(),
                start_date: Some("2024-03-04".to_string()),
                id: Some("p1".to_string()),
            },
        )
        .await
        .expect("Failed to load plan");

    let plans = planner.list_plans(&local()).await.unwrap();
    let expected = format!("# Plans\n\n{plans}");

    let output = run_cli_command(planner.storage_path(), &["list"]);
    assert_eq!(output, expected);
    assert!(matches!(plans, PlanList(ref p) if p.len() == 1));
}

#[tokio::test]
async fn test_show_output_matches_display() {
    let (planner, _temp_dir) = create_test_planner().await;
    let stored = planner
        .load_plan(
            &local(),
            &LoadPlan {
                plan_json: TEMPLATE_JSON.to_string(),
                start_date: None,
                id: Some("weekday".to_string()),
            },
        )
        .await
        .expect("Failed to load plan");

    let output = run_cli_command(planner.storage_path(), &["show", "weekday"]);

    assert_eq!(output, stored.to_string());
    assert!(output.contains("### Monday\n"));
}

#[tokio::test]
async fn test_load_output_matches_create_result() {
    let (planner, temp_dir) = create_test_planner().await;
    let plan_file = temp_dir.path().join("plan.json");
    std::fs::write(&plan_file, TEMPLATE_JSON).unwrap();

    let output = run_cli_command(
        planner.storage_path(),
        &["load", plan_file.to_str().unwrap(), "--id", "fixed"],
    );

    let stored = planner
        .list_plans(&local())
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("plan stored by CLI");
    assert_eq!(output, CreateResult::new(stored).to_string());
}

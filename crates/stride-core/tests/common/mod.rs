use stride_core::{OwnerId, PlannerBuilder, StorageKind};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner(kind: StorageKind) -> (TempDir, stride_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(match kind {
        StorageKind::List => "test.db",
        StorageKind::Single => "action_plans.json",
    });
    let planner = PlannerBuilder::new()
        .with_storage_path(Some(&path))
        .with_storage_kind(kind)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

#[allow(dead_code)]
pub fn owner(id: &str) -> OwnerId {
    OwnerId::new(id).expect("valid owner id")
}

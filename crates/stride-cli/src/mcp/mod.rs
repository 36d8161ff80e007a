//! MCP server implementation for Stride
//!
//! This module implements the Model Context Protocol server, letting an
//! assistant draft a plan from the template, store it, adjust single weeks
//! and tick off tasks while talking a user through their plan.
//!
//! Task completion is session state: it lives in the server for as long as
//! the connection does and is never written to storage.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stride_core::{CompletionSet, OwnerId, Planner};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{LoadPlan, McpResult, ReplaceWeek, ShowPlan, ToggleTask, UpdateWeek};

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    planner: Arc<Mutex<Planner>>,
    owner: OwnerId,
    completed: Arc<Mutex<CompletionSet>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Create a new Stride MCP server acting for `owner`
    pub fn new(planner: Planner, owner: OwnerId) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            owner,
            completed: Arc::new(Mutex::new(CompletionSet::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(
            self.planner.clone(),
            self.owner.clone(),
            self.completed.clone(),
        )
    }

    #[tool(
        name = "get_template",
        description = "Get the 4-week plan template as JSON, with the intensity zone reference. Days are keyed by weekday name (Monday..Sunday); each day holds a list of activities with activity (string or list), optional duration, intensity (\"1\"-\"5\") and details (string or list). Fill it in and pass it to load_plan."
    )]
    async fn get_template(&self) -> McpResult {
        self.handlers().get_template().await
    }

    #[tool(
        name = "list_plans",
        description = "List the user's stored plans with their IDs, week and task counts, and calendar span."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "show_plan",
        description = "Show a stored plan week by week, with every activity and daily task as a checkbox labelled with its task ID. Omit id to show the user's first plan."
    )]
    async fn show_plan(&self, params: Parameters<ShowPlan>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "load_plan",
        description = "Validate plan JSON (same shape as get_template) and store it. With start_date (YYYY-MM-DD), weekday keys are replaced by real dates: each day takes the first matching date on or after the previous one, starting from start_date. The whole plan is rejected if any field is malformed."
    )]
    async fn load_plan(&self, params: Parameters<LoadPlan>) -> McpResult {
        self.handlers().load_plan(params).await
    }

    #[tool(
        name = "replace_week",
        description = "Replace one whole week of a stored plan with new week JSON ({weekNumber, theme, days, dailyTasks}). Other weeks are untouched. Omit plan_id to edit the user's first plan."
    )]
    async fn replace_week(&self, params: Parameters<ReplaceWeek>) -> McpResult {
        self.handlers().replace_week(params).await
    }

    #[tool(
        name = "update_week",
        description = "Change individual fields of one week: theme, daily tasks by index (index equal to the task count appends), or one field (activity, duration, intensity, details) of an activity addressed by day key and index. Empty values clear optional fields. Nothing is saved if any edit is rejected."
    )]
    async fn update_week(&self, params: Parameters<UpdateWeek>) -> McpResult {
        self.handlers().update_week(params).await
    }

    #[tool(
        name = "toggle_task",
        description = "Toggle a task between done and not done for this session, using the task ID shown by show_plan (e.g. week1-2024-03-04-0 or week1-daily-0). Completion is not saved with the plan."
    )]
    async fn toggle_task(&self, params: Parameters<ToggleTask>) -> McpResult {
        self.handlers().toggle_task(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Stride keeps multi-week activity plans (training blocks, habit programmes) and helps a user follow them day by day.

## Core Concepts
- **Plan**: a title and numbered weeks
- **Week**: a theme, days and daily tasks
- **Day**: keyed by weekday name in a template, or by date (YYYY-MM-DD) once anchored to a start date
- **Activity**: label(s), duration, intensity zone 1-5 and details

## Workflow
1. `get_template` and fill it in with the user
2. `load_plan` with a start_date to schedule it on the calendar
3. `show_plan` to review; task IDs appear next to each checkbox
4. `toggle_task` as the user reports progress
5. `update_week` for small changes, `replace_week` to rewrite a week"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use stride_core::{PlannerBuilder, StorageKind};
    use tempfile::TempDir;

    use super::*;

    async fn create_test_server() -> (TempDir, StrideMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let planner = PlannerBuilder::new()
            .with_storage_path(Some(temp_dir.path().join("test.db")))
            .with_storage_kind(StorageKind::List)
            .build()
            .await
            .expect("Failed to create planner");
        let owner = OwnerId::new("assistant_user").unwrap();
        (temp_dir, StrideMcpServer::new(planner, owner))
    }

    #[tokio::test]
    async fn test_server_exposes_all_tools() {
        let (_temp_dir, server) = create_test_server().await;

        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            [
                "get_template",
                "list_plans",
                "load_plan",
                "replace_week",
                "show_plan",
                "toggle_task",
                "update_week"
            ]
        );
    }

    #[tokio::test]
    async fn test_completion_is_session_state() {
        let (_temp_dir, server) = create_test_server().await;
        let handlers = server.handlers();

        handlers
            .load_plan(Parameters(
                serde_json::from_value(serde_json::json!({
                    "plan_json": stride_core::TEMPLATE_JSON,
                    "start_date": "2024-03-04",
                    "id": "p"
                }))
                .unwrap(),
            ))
            .await
            .unwrap();
        handlers
            .toggle_task(Parameters(
                serde_json::from_value(serde_json::json!({"task_id": "week1-daily-0"})).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(server.completed.lock().await.len(), 1);

        // A second session over the same storage starts with nothing done.
        let fresh = StrideMcpServer::new(
            PlannerBuilder::new()
                .with_storage_path(Some(server.planner.lock().await.storage_path()))
                .build()
                .await
                .unwrap(),
            server.owner.clone(),
        );
        assert!(fresh.completed.lock().await.is_empty());
    }
}

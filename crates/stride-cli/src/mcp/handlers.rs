//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stride_core::{
    display::{CreateResult, IntensityGuide, TaskStatus},
    params as core, CompletionSet, OwnerId, PlanView, Planner, TEMPLATE_JSON,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// The core parameter types derive `JsonSchema` behind a feature flag; this
/// transparent wrapper gives them the `Deserialize + JsonSchema` pair rmcp
/// expects without adding anything to the JSON shape.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type ShowPlan = McpParams<core::ShowPlan>;
pub type LoadPlan = McpParams<core::LoadPlan>;
pub type ReplaceWeek = McpParams<core::ReplaceWeek>;
pub type UpdateWeek = McpParams<core::UpdateWeek>;
pub type ToggleTask = McpParams<core::ToggleTask>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
    owner: OwnerId,
    completed: Arc<Mutex<CompletionSet>>,
}

impl McpHandlers {
    pub fn new(
        planner: Arc<Mutex<Planner>>,
        owner: OwnerId,
        completed: Arc<Mutex<CompletionSet>>,
    ) -> Self {
        Self {
            planner,
            owner,
            completed,
        }
    }

    pub async fn get_template(&self) -> McpResult {
        text(format!(
            "# Plan Template\n\nFill in this JSON and pass it to `load_plan`. Intensity is a zone from \"1\" to \"5\":\n\n{}\n```json\n{}\n```\n",
            IntensityGuide,
            TEMPLATE_JSON.trim_end()
        ))
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans for {}", self.owner);

        let plans = self
            .planner
            .lock()
            .await
            .list_plans(&self.owner)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        text(format!("# Plans\n\n{plans}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<ShowPlan>) -> McpResult {
        debug!("show_plan: {params:?}");

        let stored = self
            .planner
            .lock()
            .await
            .require_plan(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        let completed = self.completed.lock().await;
        let view = PlanView::new(&stored.plan, &completed).with_id(stored.id.as_deref());
        text(view.to_string())
    }

    pub async fn load_plan(&self, Parameters(params): Parameters<LoadPlan>) -> McpResult {
        debug!("load_plan: start_date={:?}", params.as_ref().start_date);

        let stored = self
            .planner
            .lock()
            .await
            .load_plan(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load plan", &e))?;

        text(CreateResult::new(stored).to_string())
    }

    pub async fn replace_week(&self, Parameters(params): Parameters<ReplaceWeek>) -> McpResult {
        debug!("replace_week: {params:?}");

        let inner_params = params.as_ref();
        let stored = self
            .planner
            .lock()
            .await
            .replace_week(&self.owner, inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to replace week", &e))?;

        let week = stored
            .plan
            .week(inner_params.week_number)
            .map(ToString::to_string)
            .unwrap_or_default();
        text(format!(
            "Replaced week {} of '{}'\n\n{week}",
            inner_params.week_number, stored.plan.title
        ))
    }

    pub async fn update_week(&self, Parameters(params): Parameters<UpdateWeek>) -> McpResult {
        debug!("update_week: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .update_week_fields(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update week", &e))?;

        text(result.to_string())
    }

    pub async fn toggle_task(&self, Parameters(params): Parameters<ToggleTask>) -> McpResult {
        debug!("toggle_task: {params:?}");

        let task = params
            .as_ref()
            .parse()
            .map_err(|e| to_mcp_error("Failed to toggle task", &e))?;
        let completed = self.completed.lock().await.toggle(task.clone());

        text(TaskStatus::new(task, completed).to_string())
    }
}

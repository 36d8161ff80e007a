//! Parameter structures for Stride operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into these
//! types; JSON schema generation is available behind the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Plans and weeks travel as JSON text so that a pasted document reaches the
//! core exactly as the user wrote it, and validation happens in one place.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    editor::ActivityField,
    error::{PlannerError, Result},
    models::{OneOrMany, StoredPlan, TaskId, Week},
    template::{load_plan, parse_start_date},
};

/// Parameters for showing one stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowPlan {
    /// ID of the plan; the owner's first plan when omitted
    #[serde(default)]
    pub id: Option<String>,
}

/// Parameters for loading pasted plan JSON into the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LoadPlan {
    /// Plan JSON: {title, weeks: [{weekNumber, theme, days, dailyTasks}]}
    pub plan_json: String,
    /// Optional start date (YYYY-MM-DD); weekday keys are anchored to it
    #[serde(default)]
    pub start_date: Option<String>,
    /// Optional plan ID; generated when omitted
    #[serde(default)]
    pub id: Option<String>,
}

impl LoadPlan {
    /// Parse, validate and anchor the plan.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the start date is malformed
    /// * `PlannerError::InvalidPlan` - When the plan JSON is rejected
    pub fn to_stored_plan(&self) -> Result<StoredPlan> {
        let start = self
            .start_date
            .as_deref()
            .map(parse_start_date)
            .transpose()?;
        let plan = load_plan(&self.plan_json, start)?;
        Ok(StoredPlan::new(self.id.clone(), plan))
    }
}

/// Parameters for replacing one whole week of a stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReplaceWeek {
    /// ID of the plan; the owner's first plan when omitted
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Number of the week to replace
    pub week_number: u32,
    /// Week JSON: {weekNumber, theme, days, dailyTasks}
    pub week_json: String,
}

impl ReplaceWeek {
    /// Parse the replacement week.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidPlan` when the JSON is not a week.
    pub fn parse_week(&self) -> Result<Week> {
        serde_json::from_str(&self.week_json).map_err(|e| PlannerError::InvalidPlan {
            reason: format!("Invalid week JSON: {e}"),
        })
    }
}

/// New text for one daily task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DailyTaskEdit {
    /// Index of the task (0-based); one past the end appends
    pub index: usize,
    pub text: String,
}

/// New value for one field of one activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ActivityEdit {
    /// Day key as it appears in the week
    pub day: String,
    /// Index of the activity within the day (0-based)
    pub index: usize,
    /// One of: activity, duration, intensity, details
    pub field: String,
    /// New value; comma-separated for several labels or notes, empty to clear
    pub value: String,
}

impl ActivityEdit {
    /// Interpret `field` and `value`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an unknown field, an empty
    /// activity label or an intensity outside 1-5.
    pub fn to_field(&self) -> Result<ActivityField> {
        let value = self.value.trim();

        match self.field.to_lowercase().as_str() {
            "activity" => split_list(value)
                .map(ActivityField::Activity)
                .ok_or_else(|| {
                    PlannerError::invalid_input("activity")
                        .with_reason("Activity label must not be empty")
                }),
            "duration" => Ok(ActivityField::Duration(
                (!value.is_empty()).then(|| value.to_string()),
            )),
            "intensity" => {
                if value.is_empty() {
                    return Ok(ActivityField::Intensity(None));
                }
                value
                    .parse()
                    .map(|zone| ActivityField::Intensity(Some(zone)))
                    .map_err(|reason: String| {
                        PlannerError::invalid_input("intensity").with_reason(reason)
                    })
            }
            "details" => {
                if value.is_empty() {
                    return Ok(ActivityField::Details(None));
                }
                split_list(value)
                    .map(|details| ActivityField::Details(Some(details)))
                    .ok_or_else(|| {
                        PlannerError::invalid_input("details")
                            .with_reason("Details must contain at least one note")
                    })
            }
            other => Err(PlannerError::invalid_input("field").with_reason(format!(
                "Unknown activity field '{other}'. Must be 'activity', 'duration', 'intensity', or 'details'"
            ))),
        }
    }
}

/// Split a comma-separated value into labels. `None` when nothing is left.
fn split_list(value: &str) -> Option<OneOrMany> {
    if !value.contains(',') {
        return (!value.is_empty()).then(|| OneOrMany::Single(value.to_string()));
    }
    let parts: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();
    (!parts.is_empty()).then_some(OneOrMany::Many(parts))
}

/// Parameters for field-level edits to one week of a stored plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateWeek {
    /// ID of the plan; the owner's first plan when omitted
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Number of the week to edit
    pub week_number: u32,
    /// New theme
    #[serde(default)]
    pub theme: Option<String>,
    /// Daily task replacements
    #[serde(default)]
    pub daily_tasks: Vec<DailyTaskEdit>,
    /// Activity field replacements
    #[serde(default)]
    pub activities: Vec<ActivityEdit>,
}

impl UpdateWeek {
    /// True when no edit is requested.
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.daily_tasks.is_empty() && self.activities.is_empty()
    }
}

/// Parameters for toggling one task's completion in the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleTask {
    /// Task ID such as `week1-2024-03-04-0` or `week1-daily-0`
    pub task_id: String,
}

impl ToggleTask {
    /// Parse the task id.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the id is malformed.
    pub fn parse(&self) -> Result<TaskId> {
        self.task_id
            .trim()
            .parse()
            .map_err(|reason: String| PlannerError::invalid_input("task_id").with_reason(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    fn edit(field: &str, value: &str) -> ActivityEdit {
        ActivityEdit {
            day: "Monday".to_string(),
            index: 0,
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_activity_edit_fields() {
        assert_eq!(
            edit("activity", "Run, Swim").to_field().unwrap(),
            ActivityField::Activity(OneOrMany::Many(vec!["Run".to_string(), "Swim".to_string()]))
        );
        assert_eq!(
            edit("Duration", "40 minutes").to_field().unwrap(),
            ActivityField::Duration(Some("40 minutes".to_string()))
        );
        assert_eq!(
            edit("intensity", "4").to_field().unwrap(),
            ActivityField::Intensity(Some(Intensity::Zone4))
        );
        assert_eq!(
            edit("details", "").to_field().unwrap(),
            ActivityField::Details(None)
        );
    }

    #[test]
    fn test_activity_edit_rejects_bad_values() {
        assert!(matches!(
            edit("intensity", "9").to_field(),
            Err(PlannerError::InvalidInput { .. })
        ));
        assert!(edit("activity", "  ").to_field().is_err());
        assert!(edit("colour", "red").to_field().is_err());
    }

    #[test]
    fn test_activity_edit_rejects_separator_only_lists() {
        for value in [",", " , ,"] {
            assert!(matches!(
                edit("activity", value).to_field(),
                Err(PlannerError::InvalidInput { .. })
            ));
            assert!(matches!(
                edit("details", value).to_field(),
                Err(PlannerError::InvalidInput { .. })
            ));
        }
        assert_eq!(
            edit("activity", "Run,").to_field().unwrap(),
            ActivityField::Activity(OneOrMany::Many(vec!["Run".to_string()]))
        );
    }

    #[test]
    fn test_load_plan_params_reflow_and_keep_id() {
        let params = LoadPlan {
            plan_json: r#"{"title": "T", "weeks": [{"weekNumber": 1, "days": {"Monday": [{"activity": "Run"}]}}]}"#
                .to_string(),
            start_date: Some("2024-03-04".to_string()),
            id: Some("mine".to_string()),
        };

        let stored = params.to_stored_plan().unwrap();

        assert_eq!(stored.id.as_deref(), Some("mine"));
        assert!(stored.plan.weeks[0].days.get("2024-03-04").is_some());
    }

    #[test]
    fn test_load_plan_params_bad_start_date() {
        let params = LoadPlan {
            plan_json: r#"{"title": "T", "weeks": []}"#.to_string(),
            start_date: Some("04/03/2024".to_string()),
            id: None,
        };

        assert!(matches!(
            params.to_stored_plan(),
            Err(PlannerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_replace_week_parse() {
        let params = ReplaceWeek {
            plan_id: None,
            week_number: 2,
            week_json: r#"{"weekNumber": 2, "theme": "Taper", "days": {}, "dailyTasks": ["Sleep"]}"#
                .to_string(),
        };

        let week = params.parse_week().unwrap();
        assert_eq!(week.theme, "Taper");

        let broken = ReplaceWeek {
            week_json: "[]".to_string(),
            ..params
        };
        assert!(matches!(
            broken.parse_week(),
            Err(PlannerError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn test_toggle_task_parse() {
        let toggle = ToggleTask {
            task_id: "week3-2024-03-18-1".to_string(),
        };
        assert_eq!(toggle.parse().unwrap(), TaskId::activity(3, "2024-03-18", 1));

        let bad = ToggleTask {
            task_id: "task-1".to_string(),
        };
        assert!(bad.parse().is_err());
    }
}

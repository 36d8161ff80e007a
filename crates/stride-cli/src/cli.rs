//! Command-line subcommands and their handlers
//!
//! Argument structs carry the clap-specific parsing (help text, `DAY:I=V`
//! edit syntax) and convert into the interface-agnostic parameter types of
//! `stride_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] then runs one command against the planner and hands the resulting
//! markdown to the terminal renderer.

use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use stride_core::{
    display::CreateResult,
    params::{ActivityEdit, DailyTaskEdit, LoadPlan, ReplaceWeek, ShowPlan, UpdateWeek},
    schedule::reflow,
    template::{parse_plan, parse_start_date},
    CompletionSet, OwnerId, PlanView, Planner, TEMPLATE_JSON,
};

use crate::renderer::TerminalRenderer;

/// Read a plan or week document from a file, or from stdin for `-`.
fn read_input(source: &Path) -> Result<String> {
    if source.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("Failed to read from stdin")
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read {}", source.display()))
    }
}

/// Anchor a plan file to a start date and print the result
#[derive(Args)]
pub struct ReflowArgs {
    /// Plan JSON file, or '-' for stdin
    pub file: PathBuf,
    /// Start date (YYYY-MM-DD); the first day on or after it that matches
    /// the first weekday key is used
    #[arg(long)]
    pub start: String,
}

/// Load a plan into storage
#[derive(Args)]
pub struct LoadArgs {
    /// Plan JSON file, or '-' for stdin
    pub file: PathBuf,
    /// Start date (YYYY-MM-DD) to anchor weekday keys to
    #[arg(long)]
    pub start: Option<String>,
    /// ID to store the plan under; generated when omitted
    #[arg(long)]
    pub id: Option<String>,
}

impl LoadArgs {
    fn into_params(self) -> Result<LoadPlan> {
        Ok(LoadPlan {
            plan_json: read_input(&self.file)?,
            start_date: self.start,
            id: self.id,
        })
    }
}

/// Show a stored plan
#[derive(Args)]
pub struct ShowArgs {
    /// ID of the plan; the first stored plan when omitted
    pub id: Option<String>,
}

impl From<ShowArgs> for ShowPlan {
    fn from(val: ShowArgs) -> Self {
        ShowPlan { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Replace a whole week with the contents of a week JSON file
    #[command(alias = "r")]
    Replace(ReplaceWeekArgs),
    /// Change individual fields of a week
    #[command(alias = "e")]
    Edit(EditWeekArgs),
}

/// Replace one week of a stored plan
#[derive(Args)]
pub struct ReplaceWeekArgs {
    /// Number of the week to replace
    pub week: u32,
    /// Week JSON file, or '-' for stdin
    pub file: PathBuf,
    /// ID of the plan; the first stored plan when omitted
    #[arg(long)]
    pub plan: Option<String>,
}

impl ReplaceWeekArgs {
    fn into_params(self) -> Result<ReplaceWeek> {
        Ok(ReplaceWeek {
            plan_id: self.plan,
            week_number: self.week,
            week_json: read_input(&self.file)?,
        })
    }
}

/// Edit fields of one week of a stored plan
#[derive(Args)]
pub struct EditWeekArgs {
    /// Number of the week to edit
    pub week: u32,
    /// ID of the plan; the first stored plan when omitted
    #[arg(long)]
    pub plan: Option<String>,
    /// New theme for the week
    #[arg(long)]
    pub theme: Option<String>,
    /// Set daily task I (0-based) to TEXT; I equal to the task count appends
    #[arg(long = "task", value_name = "I=TEXT")]
    pub tasks: Vec<TaskSlot>,
    /// Set the activity label(s) of activity I on DAY; commas separate labels
    #[arg(long = "activity", value_name = "DAY:I=VALUE")]
    pub activities: Vec<ActivitySlot>,
    /// Set the duration of activity I on DAY; empty clears it
    #[arg(long = "duration", value_name = "DAY:I=VALUE")]
    pub durations: Vec<ActivitySlot>,
    /// Set the intensity zone (1-5) of activity I on DAY; empty clears it
    #[arg(long = "intensity", value_name = "DAY:I=ZONE")]
    pub intensities: Vec<ActivitySlot>,
    /// Set the details of activity I on DAY; commas separate notes
    #[arg(long = "details", value_name = "DAY:I=VALUE")]
    pub details: Vec<ActivitySlot>,
}

impl From<EditWeekArgs> for UpdateWeek {
    fn from(val: EditWeekArgs) -> Self {
        let fields = [
            ("activity", val.activities),
            ("duration", val.durations),
            ("intensity", val.intensities),
            ("details", val.details),
        ];
        let activities = fields
            .into_iter()
            .flat_map(|(field, slots)| slots.into_iter().map(move |slot| slot.into_edit(field)))
            .collect();

        UpdateWeek {
            plan_id: val.plan,
            week_number: val.week,
            theme: val.theme,
            daily_tasks: val
                .tasks
                .into_iter()
                .map(|slot| DailyTaskEdit {
                    index: slot.index,
                    text: slot.text,
                })
                .collect(),
            activities,
        }
    }
}

/// `I=TEXT` argument of `--task`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSlot {
    pub index: usize,
    pub text: String,
}

impl FromStr for TaskSlot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (index, text) = s
            .split_once('=')
            .ok_or_else(|| format!("expected I=TEXT, got '{s}'"))?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| format!("'{index}' is not a task index"))?;
        Ok(Self {
            index,
            text: text.to_string(),
        })
    }
}

/// `DAY:I=VALUE` argument of the activity field flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivitySlot {
    pub day: String,
    pub index: usize,
    pub value: String,
}

impl ActivitySlot {
    fn into_edit(self, field: &str) -> ActivityEdit {
        ActivityEdit {
            day: self.day,
            index: self.index,
            field: field.to_string(),
            value: self.value,
        }
    }
}

impl FromStr for ActivitySlot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || format!("expected DAY:I=VALUE, got '{s}'");
        let (slot, value) = s.split_once('=').ok_or_else(malformed)?;
        let (day, index) = slot.rsplit_once(':').ok_or_else(malformed)?;
        if day.trim().is_empty() {
            return Err(malformed());
        }
        let index = index
            .trim()
            .parse()
            .map_err(|_| format!("'{index}' is not an activity index"))?;
        Ok(Self {
            day: day.trim().to_string(),
            index,
            value: value.to_string(),
        })
    }
}

/// Print the starter template.
pub fn print_template() {
    println!("{}", TEMPLATE_JSON.trim_end());
}

/// Print `args.file` anchored to `args.start`, as JSON.
pub fn print_reflowed(args: ReflowArgs) -> Result<()> {
    let start = parse_start_date(&args.start)?;
    let plan = parse_plan(&read_input(&args.file)?)?;
    let anchored = reflow(&plan, start);
    println!("{}", serde_json::to_string_pretty(&anchored)?);
    Ok(())
}

/// Runs storage-backed commands for one owner.
pub struct Cli {
    planner: Planner,
    owner: OwnerId,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, owner: OwnerId, renderer: TerminalRenderer) -> Self {
        Self {
            planner,
            owner,
            renderer,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self.planner.list_plans(&self.owner).await?;
        self.renderer.render(&format!("# Plans\n\n{plans}"))
    }

    pub async fn show_plan(&self, args: ShowArgs) -> Result<()> {
        let params = ShowPlan::from(args);
        let Some(stored) = self.planner.show_plan(&self.owner, &params).await? else {
            match params.id {
                Some(id) => bail!("Plan with ID '{id}' not found"),
                None => bail!("No plans stored for owner '{}'", self.owner),
            }
        };

        let completed = CompletionSet::new();
        let view = PlanView::new(&stored.plan, &completed).with_id(stored.id.as_deref());
        self.renderer.render(&view.to_string())
    }

    pub async fn load_plan(&self, args: LoadArgs) -> Result<()> {
        let params = args.into_params()?;
        let stored = self
            .planner
            .load_plan(&self.owner, &params)
            .await
            .context("Failed to load plan")?;
        self.renderer.render(&CreateResult::new(stored).to_string())
    }

    pub async fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        match command {
            WeekCommands::Replace(args) => {
                let params = args.into_params()?;
                let stored = self.planner.replace_week(&self.owner, &params).await?;
                let week = stored
                    .plan
                    .week(params.week_number)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.renderer.render(&format!(
                    "Replaced week {} of '{}'\n\n{week}",
                    params.week_number, stored.plan.title
                ))
            }
            WeekCommands::Edit(args) => {
                let params = UpdateWeek::from(args);
                if params.is_empty() {
                    bail!("Nothing to change. Use --theme, --task, --activity, --duration, --intensity or --details");
                }
                debug!("Editing week {}: {params:?}", params.week_number);
                let result = self.planner.update_week_fields(&self.owner, &params).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_slot_parsing() {
        assert_eq!(
            "2=Drink water".parse::<TaskSlot>().unwrap(),
            TaskSlot {
                index: 2,
                text: "Drink water".to_string()
            }
        );
        assert!("Drink water".parse::<TaskSlot>().is_err());
        assert!("x=Drink".parse::<TaskSlot>().is_err());
    }

    #[test]
    fn test_activity_slot_parsing() {
        let slot: ActivitySlot = "2024-03-04:1=45 minutes".parse().unwrap();
        assert_eq!(slot.day, "2024-03-04");
        assert_eq!(slot.index, 1);
        assert_eq!(slot.value, "45 minutes");

        let cleared: ActivitySlot = "Monday:0=".parse().unwrap();
        assert_eq!(cleared.value, "");

        assert!("Monday=3".parse::<ActivitySlot>().is_err());
        assert!(":0=3".parse::<ActivitySlot>().is_err());
    }

    #[test]
    fn test_edit_args_convert_in_field_order() {
        let args = EditWeekArgs {
            week: 2,
            plan: Some("p".to_string()),
            theme: None,
            tasks: vec!["0=Stretch".parse().unwrap()],
            activities: vec![],
            durations: vec!["Monday:0=30 minutes".parse().unwrap()],
            intensities: vec!["Monday:0=4".parse().unwrap()],
            details: vec![],
        };

        let params = UpdateWeek::from(args);

        assert_eq!(params.week_number, 2);
        assert_eq!(params.daily_tasks[0].text, "Stretch");
        let fields: Vec<_> = params.activities.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["duration", "intensity"]);
    }
}

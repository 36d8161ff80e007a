//! Core library for the Stride activity planner.
//!
//! This crate provides the business logic for multi-week action plans:
//! parsing pasted plan templates, anchoring weekday-keyed plans to calendar
//! dates, editing single weeks without touching the rest of a plan, and
//! persisting plans per owner.
//!
//! # Module Overview
//!
//! - [`models`]: Plans, weeks, activities and session completion state
//! - [`schedule`]: Day key resolution and calendar reflow
//! - [`editor`]: Week-level edits that share unchanged weeks
//! - [`store`]: Owner-scoped persistence over key-value backends
//! - [`template`]: The starter template and plan JSON validation
//! - [`display`]: Markdown rendering for terminals and MCP clients
//! - [`planner`]: Async facade used by the CLI and MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::{display::display_date, schedule::reflow, template::template_plan};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // The template is keyed by weekday names
//! let plan = template_plan()?;
//!
//! // Anchor it to a Wednesday start: the first Monday on or after it
//! let anchored = reflow(&plan, date(2024, 3, 6));
//! let first_day = anchored.weeks[0].days.keys().next().unwrap_or_default();
//! assert_eq!(first_day, "2024-03-11");
//! println!("{}", display_date(first_day));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use display::{CreateResult, PlanList, PlanView, TaskStatus, UpdateResult};
pub use error::{PlannerError, Result};
pub use models::{ActionPlan, Activity, CompletionSet, Intensity, OwnerId, StoredPlan, TaskId, Week};
pub use params::{ActivityEdit, DailyTaskEdit, LoadPlan, ReplaceWeek, ShowPlan, ToggleTask, UpdateWeek};
pub use planner::{Planner, PlannerBuilder, StorageKind};
pub use template::TEMPLATE_JSON;

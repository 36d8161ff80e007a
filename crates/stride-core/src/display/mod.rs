//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly and render as
//! markdown; the wrappers here add context such as a session's completion
//! state or the outcome of an operation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (ActionPlan,    │───▶│ display_date    │───▶│    Output       │
//! │  Week, Activity)│    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Plan list summaries
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Task completion feedback
//! - [`datetime`]: Day key labels
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{calendar_span, PlanList};
pub use datetime::{display_date, DayLabel, LongDate};
pub use models::{IntensityGuide, PlanView};
pub use results::{CreateResult, UpdateResult};
pub use status::TaskStatus;

//! High-level planner API for managing stored action plans.
//!
//! This module provides the main [`Planner`] interface used by the CLI and the
//! MCP server. The planner owns no state besides its storage configuration;
//! every operation opens the configured [`PlanStore`](crate::store::PlanStore)
//! on a blocking thread, does one read or one read-modify-write, and returns.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │  Plan Logic     │    │    Storage      │
//! │ (plan_ops,      │───▶│ (template,      │───▶│   (via store/)  │
//! │  week_ops)      │    │  editor)        │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Async facade        Pure transforms        Key-value records
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Listing, showing, loading and replacing whole plans
//! - [`week_ops`]: Whole-week replacement and field-level week edits
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use stride_core::{models::OwnerId, params::LoadPlan, PlannerBuilder, TEMPLATE_JSON};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_storage_path(Some("/tmp/stride.db"))
//!     .build()
//!     .await?;
//! let owner = OwnerId::new("me")?;
//!
//! let stored = planner
//!     .load_plan(
//!         &owner,
//!         &LoadPlan {
//!             plan_json: TEMPLATE_JSON.to_string(),
//!             start_date: Some("2024-03-04".to_string()),
//!             id: None,
//!         },
//!     )
//!     .await?;
//! println!("{stored}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::{
    error::Result,
    store::{JsonFileBackend, ListPlanStore, PlanStore, SingletonPlanStore, SqliteBackend},
};

pub mod builder;
pub mod plan_ops;
pub mod week_ops;


pub use builder::{PlannerBuilder, StorageKind};

/// Main planner interface for managing stored plans.
pub struct Planner {
    pub(crate) storage_path: PathBuf,
    pub(crate) kind: StorageKind,
}

impl Planner {
    /// Creates a new planner over the given storage.
    pub(crate) fn new(storage_path: PathBuf, kind: StorageKind) -> Self {
        Self { storage_path, kind }
    }

    /// Where plans are persisted.
    pub fn storage_path(&self) -> &std::path::Path {
        &self.storage_path
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.kind
    }
}

/// Open the store described by `kind` at `path`. Must run on a blocking
/// thread: the SQLite backend does synchronous I/O.
pub(crate) fn open_store(kind: StorageKind, path: &std::path::Path) -> Result<Box<dyn PlanStore>> {
    Ok(match kind {
        StorageKind::List => Box::new(ListPlanStore::new(SqliteBackend::open(path)?)),
        StorageKind::Single => Box::new(SingletonPlanStore::new(JsonFileBackend::new(path))),
    })
}

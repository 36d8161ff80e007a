//! Plan model definition and related functionality.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::Week;
use crate::error::{PlannerError, Result};

/// A complete multi-week plan.
///
/// Weeks are shared behind [`Arc`] so that editing one week produces a new
/// plan whose other weeks are the very same allocations as before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Title of the plan
    pub title: String,

    /// Weeks in display order
    #[serde(default)]
    pub weeks: Vec<Arc<Week>>,
}

impl ActionPlan {
    pub fn new(title: impl Into<String>, weeks: impl IntoIterator<Item = Week>) -> Self {
        Self {
            title: title.into(),
            weeks: weeks.into_iter().map(Arc::new).collect(),
        }
    }

    /// Look up a week by its number, not its position.
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks
            .iter()
            .find(|week| week.week_number == week_number)
            .map(Arc::as_ref)
    }

    /// Week numbers in plan order.
    pub fn week_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().map(|week| week.week_number)
    }

    /// Number of checkable tasks in the whole plan.
    pub fn task_count(&self) -> usize {
        self.weeks.iter().map(|week| week.task_count()).sum()
    }
}

/// A plan as persisted by a store.
///
/// The list-backed store addresses plans by `id`; the single-plan store
/// leaves it empty. The id is flattened into the plan object so the
/// persisted shape stays the pasted-in shape plus one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub plan: ActionPlan,
}

impl StoredPlan {
    pub fn new(id: Option<String>, plan: ActionPlan) -> Self {
        Self { id, plan }
    }

    /// Wrap a plan with an explicit id.
    pub fn with_id(id: impl Into<String>, plan: ActionPlan) -> Self {
        Self {
            id: Some(id.into()),
            plan,
        }
    }

    /// True when this plan is addressed by `id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Identifier of the authenticated caller that owns stored plans.
///
/// Identity is verified upstream; this type only guarantees it is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Validate and wrap an owner identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PlannerError::invalid_input("owner").with_reason("Owner id must not be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

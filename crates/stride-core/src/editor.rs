//! Week-level editing of plans.
//!
//! Edits never mutate a committed plan. A [`WeekDraft`] collects field
//! changes on a private copy of one week; [`WeekDraft::commit`] folds it back
//! with [`apply_week_edit`], which rebuilds only the edited week and shares
//! every other week with the input plan.

use std::sync::Arc;

use log::debug;

use crate::{
    error::{PlannerError, Result},
    models::{ActionPlan, Intensity, OneOrMany, Week},
};

/// Replace the week numbered `week_number` with `updated`.
///
/// All other weeks are the same [`Arc`] allocations as in `plan`. When no week
/// carries that number the returned plan equals the input; callers that need
/// to know should compare, or use [`try_apply_week_edit`].
pub fn apply_week_edit(plan: &ActionPlan, week_number: u32, updated: Week) -> ActionPlan {
    let updated = Arc::new(updated);
    let weeks = plan
        .weeks
        .iter()
        .map(|week| {
            if week.week_number == week_number {
                Arc::clone(&updated)
            } else {
                Arc::clone(week)
            }
        })
        .collect();

    ActionPlan {
        title: plan.title.clone(),
        weeks,
    }
}

/// Like [`apply_week_edit`] but reports a missing week.
///
/// # Errors
///
/// Returns `PlannerError::WeekNotFound` when no week carries `week_number`.
pub fn try_apply_week_edit(plan: &ActionPlan, week_number: u32, updated: Week) -> Result<ActionPlan> {
    if plan.week(week_number).is_none() {
        return Err(PlannerError::WeekNotFound { week_number });
    }
    Ok(apply_week_edit(plan, week_number, updated))
}

/// A single field of an activity, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityField {
    Activity(OneOrMany),
    Duration(Option<String>),
    Intensity(Option<Intensity>),
    Details(Option<OneOrMany>),
}

/// Uncommitted edits to one week of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDraft {
    week_number: u32,
    week: Week,
}

impl WeekDraft {
    /// Start editing the week numbered `week_number`, if it exists.
    pub fn begin(plan: &ActionPlan, week_number: u32) -> Option<Self> {
        plan.week(week_number).map(|week| Self {
            week_number,
            week: week.clone(),
        })
    }

    /// The week as edited so far.
    pub fn week(&self) -> &Week {
        &self.week
    }

    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.week.theme = theme.into();
    }

    /// Replace one daily task. An index one past the end appends.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `index` is further out.
    pub fn set_daily_task(&mut self, index: usize, task: impl Into<String>) -> Result<()> {
        let tasks = &mut self.week.daily_tasks;
        match index.cmp(&tasks.len()) {
            std::cmp::Ordering::Less => tasks[index] = task.into(),
            std::cmp::Ordering::Equal => tasks.push(task.into()),
            std::cmp::Ordering::Greater => {
                return Err(PlannerError::invalid_input("daily_task").with_reason(format!(
                    "Index {index} is out of range for week {} ({} daily tasks)",
                    self.week_number,
                    tasks.len()
                )));
            }
        }
        Ok(())
    }

    /// Replace one field of the activity at `index` under `day`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the day or activity does not
    /// exist in the week.
    pub fn set_activity_field(&mut self, day: &str, index: usize, field: ActivityField) -> Result<()> {
        let week_number = self.week_number;
        let activities = self.week.days.get_mut(day).ok_or_else(|| {
            PlannerError::invalid_input("day")
                .with_reason(format!("Week {week_number} has no day '{day}'"))
        })?;
        let count = activities.len();
        let activity = activities.get_mut(index).ok_or_else(|| {
            PlannerError::invalid_input("activity").with_reason(format!(
                "Index {index} is out of range for '{day}' ({count} activities)"
            ))
        })?;

        match field {
            ActivityField::Activity(value) => activity.activity = value,
            ActivityField::Duration(value) => activity.duration = value,
            ActivityField::Intensity(value) => activity.intensity = value,
            ActivityField::Details(value) => activity.details = value,
        }
        Ok(())
    }

    /// Fold the draft into `plan`.
    ///
    /// `plan` may be a newer version than the one the draft began from; the
    /// draft replaces whatever week carries its number there.
    pub fn commit(self, plan: &ActionPlan) -> ActionPlan {
        debug!("Committing edits to week {}", self.week_number);
        apply_week_edit(plan, self.week_number, self.week)
    }
}

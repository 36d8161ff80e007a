//! Week operations for the Planner.
//!
//! Both operations read the owner's record, rebuild one week and write the
//! plan back in a single blocking task. Unlike the lenient store and editor
//! primitives, these report a missing plan or week as an error so that the
//! user learns their edit went nowhere.

use log::info;
use tokio::task;

use super::{open_store, Planner, StorageKind};
use crate::{
    display::UpdateResult,
    editor::{try_apply_week_edit, WeekDraft},
    error::{PlannerError, Result},
    models::{ActionPlan, OwnerId, StoredPlan},
    params::{ReplaceWeek, UpdateWeek},
};

impl Planner {
    /// Replaces one whole week of a stored plan.
    ///
    /// The replacement always takes the target week number, whatever its own
    /// `weekNumber` says.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidPlan` - When the week JSON is rejected
    /// * `PlannerError::PlanNotFound` - When no stored plan matches
    /// * `PlannerError::WeekNotFound` - When the plan has no such week
    /// * `PlannerError::InvalidPlan` - When a listed plan has no ID to write back to
    pub async fn replace_week(&self, owner: &OwnerId, params: &ReplaceWeek) -> Result<StoredPlan> {
        let mut week = params.parse_week()?;
        let week_number = params.week_number;
        week.week_number = week_number;

        let stored = self
            .edit_plan(owner, params.plan_id.clone(), move |plan| {
                try_apply_week_edit(plan, week_number, week)
            })
            .await?;

        info!("Replaced week {week_number} of '{}'", stored.plan.title);
        Ok(stored)
    }

    /// Applies field-level edits to one week of a stored plan.
    ///
    /// Edits are applied in order to a draft of the week; if any of them is
    /// rejected nothing is written.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When no edit is given or an edit is rejected
    /// * `PlannerError::PlanNotFound` - When no stored plan matches
    /// * `PlannerError::WeekNotFound` - When the plan has no such week
    pub async fn update_week_fields(
        &self,
        owner: &OwnerId,
        params: &UpdateWeek,
    ) -> Result<UpdateResult<StoredPlan>> {
        if params.is_empty() {
            return Err(PlannerError::invalid_input("update")
                .with_reason("No changes specified for the week"));
        }

        let week_number = params.week_number;
        let fields = params
            .activities
            .iter()
            .map(|edit| edit.to_field().map(|field| (edit.clone(), field)))
            .collect::<Result<Vec<_>>>()?;

        let mut changes = Vec::new();
        if let Some(theme) = &params.theme {
            changes.push(format!("Week {week_number} theme: {theme}"));
        }
        for task in &params.daily_tasks {
            changes.push(format!(
                "Week {week_number} daily task {}: {}",
                task.index, task.text
            ));
        }
        for (edit, _) in &fields {
            changes.push(format!(
                "Week {week_number} {} activity {} {}: {}",
                edit.day, edit.index, edit.field, edit.value
            ));
        }

        let theme = params.theme.clone();
        let daily_tasks = params.daily_tasks.clone();
        let stored = self
            .edit_plan(owner, params.plan_id.clone(), move |plan| {
                let mut draft = WeekDraft::begin(plan, week_number)
                    .ok_or(PlannerError::WeekNotFound { week_number })?;
                if let Some(theme) = theme {
                    draft.set_theme(theme);
                }
                for task in daily_tasks {
                    draft.set_daily_task(task.index, task.text)?;
                }
                for (edit, field) in fields {
                    draft.set_activity_field(&edit.day, edit.index, field)?;
                }
                Ok(draft.commit(plan))
            })
            .await?;

        info!("Updated week {week_number} of '{}'", stored.plan.title);
        Ok(UpdateResult::with_changes(stored, changes))
    }

    /// Read the addressed plan, transform it and write it back.
    async fn edit_plan<F>(&self, owner: &OwnerId, plan_id: Option<String>, edit: F) -> Result<StoredPlan>
    where
        F: FnOnce(&ActionPlan) -> Result<ActionPlan> + Send + 'static,
    {
        let path = self.storage_path.clone();
        let kind = self.kind;
        let owner = owner.clone();

        task::spawn_blocking(move || {
            let mut store = open_store(kind, &path)?;
            let record = store.get(&owner)?;
            let current = record
                .find(plan_id.as_deref())
                .ok_or_else(|| PlannerError::PlanNotFound {
                    id: plan_id.clone().unwrap_or_else(|| "(first)".to_string()),
                })?;

            // List records are replaced by id; one without an id cannot be
            // written back.
            let target = match (&current.id, kind) {
                (Some(id), _) => id.clone(),
                (None, StorageKind::Single) => String::new(),
                (None, StorageKind::List) => {
                    return Err(PlannerError::InvalidPlan {
                        reason: format!(
                            "Plan '{}' has no ID and cannot be edited in place; load it again with an ID",
                            current.plan.title
                        ),
                    })
                }
            };

            let updated = StoredPlan::new(current.id.clone(), edit(&current.plan)?);
            store.replace(&owner, &target, updated)
        })
        .await
        .map_err(PlannerError::join)?
    }
}

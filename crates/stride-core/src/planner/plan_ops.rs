//! Plan operations for the Planner.

use log::info;
use tokio::task;

use super::{open_store, Planner};
use crate::{
    display::PlanList,
    error::{PlannerError, Result},
    models::{OwnerId, StoredPlan},
    params::{LoadPlan, ShowPlan},
};

impl Planner {
    /// Lists the owner's stored plans in storage order.
    pub async fn list_plans(&self, owner: &OwnerId) -> Result<PlanList> {
        let path = self.storage_path.clone();
        let kind = self.kind;
        let owner = owner.clone();

        task::spawn_blocking(move || {
            let store = open_store(kind, &path)?;
            Ok(PlanList(store.get(&owner)?.into_plans()))
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Retrieves one plan by id, or the owner's first plan when no id is
    /// given. Single-plan storage ignores the id.
    pub async fn show_plan(&self, owner: &OwnerId, params: &ShowPlan) -> Result<Option<StoredPlan>> {
        let path = self.storage_path.clone();
        let kind = self.kind;
        let owner = owner.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let store = open_store(kind, &path)?;
            Ok(store.get(&owner)?.find(id.as_deref()).cloned())
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Like [`Planner::show_plan`] but a missing plan is an error.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` when nothing matches.
    pub async fn require_plan(&self, owner: &OwnerId, params: &ShowPlan) -> Result<StoredPlan> {
        self.show_plan(owner, params)
            .await?
            .ok_or_else(|| PlannerError::PlanNotFound {
                id: params.id.clone().unwrap_or_else(|| "(first)".to_string()),
            })
    }

    /// Validates pasted plan JSON, anchors it to the start date when one is
    /// given, and stores it for the owner.
    ///
    /// Nothing is written when the plan or the start date is rejected.
    pub async fn load_plan(&self, owner: &OwnerId, params: &LoadPlan) -> Result<StoredPlan> {
        let plan = params.to_stored_plan()?;
        let path = self.storage_path.clone();
        let kind = self.kind;
        let owner = owner.clone();

        let stored = task::spawn_blocking(move || {
            let mut store = open_store(kind, &path)?;
            store.create(&owner, plan)
        })
        .await
        .map_err(PlannerError::join)??;

        info!(
            "Loaded plan '{}' ({} weeks)",
            stored.plan.title,
            stored.plan.weeks.len()
        );
        Ok(stored)
    }

    /// Replaces the plan addressed by `id` with `plan`.
    ///
    /// Mirrors [`PlanStore::replace`](crate::store::PlanStore::replace): an
    /// id matching nothing leaves storage as it was.
    pub async fn replace_plan(&self, owner: &OwnerId, id: &str, plan: StoredPlan) -> Result<StoredPlan> {
        let path = self.storage_path.clone();
        let kind = self.kind;
        let owner = owner.clone();
        let id = id.to_string();

        task::spawn_blocking(move || {
            let mut store = open_store(kind, &path)?;
            store.replace(&owner, &id, plan)
        })
        .await
        .map_err(PlannerError::join)?
    }
}

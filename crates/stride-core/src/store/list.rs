//! Store keeping an ordered list of plans per owner.

use log::debug;
use serde_json::Value;
use uuid::Uuid;

use super::{KvBackend, PlanRecord, PlanStore};
use crate::{
    error::Result,
    models::{OwnerId, StoredPlan},
};

/// Plan store recording every owner's plans as one JSON list under
/// `actionPlans:{owner}`. Plans are addressed by their `id`.
pub struct ListPlanStore<B> {
    backend: B,
}

impl<B: KvBackend> ListPlanStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Backend key for an owner's list.
    pub fn key(owner: &OwnerId) -> String {
        format!("actionPlans:{owner}")
    }

    fn read(&self, owner: &OwnerId) -> Result<Vec<StoredPlan>> {
        match self.backend.get(&Self::key(owner))? {
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    fn write(&mut self, owner: &OwnerId, plans: &[StoredPlan]) -> Result<()> {
        let value = serde_json::to_value(plans)?;
        self.backend.set(&Self::key(owner), value)
    }
}

impl<B: KvBackend> PlanStore for ListPlanStore<B> {
    fn get(&self, owner: &OwnerId) -> Result<PlanRecord> {
        self.read(owner).map(PlanRecord::List)
    }

    /// Appends the plan. A plan without an id gets a fresh UUID; a supplied
    /// id is trusted as-is.
    fn create(&mut self, owner: &OwnerId, mut plan: StoredPlan) -> Result<StoredPlan> {
        if plan.id.is_none() {
            plan.id = Some(Uuid::new_v4().to_string());
        }

        let mut plans = self.read(owner)?;
        plans.push(plan.clone());
        self.write(owner, &plans)?;

        debug!("Created plan {:?} for owner {owner}", plan.id);
        Ok(plan)
    }

    /// Substitutes every plan whose id equals `plan_id`. A replacement
    /// without an id inherits `plan_id`. The list is written back even when
    /// nothing matched.
    fn replace(&mut self, owner: &OwnerId, plan_id: &str, mut plan: StoredPlan) -> Result<StoredPlan> {
        if plan.id.is_none() {
            plan.id = Some(plan_id.to_string());
        }

        let mut matched = false;
        let plans: Vec<StoredPlan> = self
            .read(owner)?
            .into_iter()
            .map(|existing| {
                if existing.has_id(plan_id) {
                    matched = true;
                    plan.clone()
                } else {
                    existing
                }
            })
            .collect();

        if !matched {
            debug!("No plan with id '{plan_id}' for owner {owner}; list left unchanged");
        }
        self.write(owner, &plans)?;
        Ok(plan)
    }
}

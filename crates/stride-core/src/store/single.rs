//! Store keeping one plan per owner.

use log::debug;
use serde_json::Value;

use super::{KvBackend, PlanRecord, PlanStore};
use crate::{
    error::Result,
    models::{OwnerId, StoredPlan},
};

/// Plan store recording exactly one plan per owner, keyed by the bare owner
/// id. Plans carry no id here; writes always target the owner's one record.
pub struct SingletonPlanStore<B> {
    backend: B,
}

impl<B: KvBackend> SingletonPlanStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn read(&self, owner: &OwnerId) -> Result<Option<StoredPlan>> {
        match self.backend.get(owner.as_str())? {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    fn write(&mut self, owner: &OwnerId, plan: &StoredPlan) -> Result<()> {
        let value = serde_json::to_value(plan)?;
        self.backend.set(owner.as_str(), value)
    }
}

impl<B: KvBackend> PlanStore for SingletonPlanStore<B> {
    fn get(&self, owner: &OwnerId) -> Result<PlanRecord> {
        self.read(owner).map(PlanRecord::Single)
    }

    /// Overwrites whatever the owner had stored.
    fn create(&mut self, owner: &OwnerId, plan: StoredPlan) -> Result<StoredPlan> {
        self.write(owner, &plan)?;
        debug!("Saved plan for owner {owner}");
        Ok(plan)
    }

    /// Overwrites the owner's plan if one exists; `plan_id` is not consulted.
    fn replace(&mut self, owner: &OwnerId, plan_id: &str, plan: StoredPlan) -> Result<StoredPlan> {
        if self.read(owner)?.is_some() {
            self.write(owner, &plan)?;
        } else {
            debug!("No plan stored for owner {owner}; replace of '{plan_id}' ignored");
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        models::{ActionPlan, Week},
        store::{JsonFileBackend, MemoryBackend},
    };

    fn owner() -> OwnerId {
        OwnerId::new("user_123").unwrap()
    }

    fn plan(title: &str) -> StoredPlan {
        StoredPlan::new(None, ActionPlan::new(title, [Week::new(1, "Base")]))
    }

    #[test]
    fn test_get_missing_owner_is_absent() {
        let store = SingletonPlanStore::new(MemoryBackend::new());

        assert_eq!(store.get(&owner()).unwrap(), PlanRecord::Single(None));
        assert!(store.get(&owner()).unwrap().is_empty());
    }

    #[test]
    fn test_create_overwrites_previous_plan() {
        let mut store = SingletonPlanStore::new(MemoryBackend::new());

        store.create(&owner(), plan("First")).unwrap();
        store.create(&owner(), plan("Second")).unwrap();

        assert_eq!(
            store.get(&owner()).unwrap(),
            PlanRecord::Single(Some(plan("Second")))
        );
    }

    #[test]
    fn test_replace_without_record_is_noop() {
        let mut store = SingletonPlanStore::new(MemoryBackend::new());

        store.replace(&owner(), "any", plan("Ghost")).unwrap();

        assert_eq!(store.get(&owner()).unwrap(), PlanRecord::Single(None));
    }

    #[test]
    fn test_replace_overwrites_existing_record() {
        let mut store = SingletonPlanStore::new(MemoryBackend::new());
        store.create(&owner(), plan("First")).unwrap();

        store.replace(&owner(), "ignored", plan("Edited")).unwrap();

        let record = store.get(&owner()).unwrap();
        assert_eq!(record.find(None).unwrap().plan.title, "Edited");
        assert_eq!(record.find(Some("whatever")).unwrap().plan.title, "Edited");
    }

    #[test]
    fn test_file_record_is_plain_plan_object() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("actionPlans.json");
        let mut store = SingletonPlanStore::new(JsonFileBackend::new(&path));

        store.create(&owner(), plan("On disk")).unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["user_123"]["title"], "On disk");
        assert!(raw["user_123"].get("id").is_none());
        assert_eq!(raw["user_123"]["weeks"][0]["weekNumber"], 1);
    }
}

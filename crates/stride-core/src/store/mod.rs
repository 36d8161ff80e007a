//! Plan persistence.
//!
//! Storage is split in two layers:
//!
//! ```text
//! ┌──────────────────────┐    ┌──────────────────────┐
//! │      PlanStore       │    │      KvBackend       │
//! │ (ListPlanStore,      │───▶│ (MemoryBackend,      │
//! │  SingletonPlanStore) │    │  SqliteBackend,      │
//! │                      │    │  JsonFileBackend)    │
//! └──────────────────────┘    └──────────────────────┘
//!   record shape per owner      whole-value get/set
//! ```
//!
//! Every write replaces the owner's whole record. Updates are a read
//! followed by a write with nothing in between holding a lock, so two
//! writers racing on the same owner resolve as last-write-wins.

use serde_json::Value;

use crate::{
    error::Result,
    models::{OwnerId, StoredPlan},
};

mod backend;
mod list;
mod single;
mod sqlite;

pub use backend::{JsonFileBackend, MemoryBackend};
pub use list::ListPlanStore;
pub use single::SingletonPlanStore;
pub use sqlite::SqliteBackend;

/// Minimal key-value capability a plan store needs.
pub trait KvBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

impl<B: KvBackend + ?Sized> KvBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }
}

/// What a store holds for one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanRecord {
    /// Ordered plans, each addressed by id
    List(Vec<StoredPlan>),
    /// At most one plan
    Single(Option<StoredPlan>),
}

impl PlanRecord {
    /// The stored plans in order, regardless of record shape.
    pub fn plans(&self) -> &[StoredPlan] {
        match self {
            PlanRecord::List(plans) => plans,
            PlanRecord::Single(plan) => plan.as_slice(),
        }
    }

    pub fn into_plans(self) -> Vec<StoredPlan> {
        match self {
            PlanRecord::List(plans) => plans,
            PlanRecord::Single(plan) => plan.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plans().is_empty()
    }

    /// Find a plan by id. Without an id, the first plan.
    ///
    /// A single-plan record has no ids, so its plan matches any id.
    pub fn find(&self, id: Option<&str>) -> Option<&StoredPlan> {
        match (self, id) {
            (PlanRecord::List(plans), Some(id)) => plans.iter().find(|plan| plan.has_id(id)),
            _ => self.plans().first(),
        }
    }
}

/// Owner-scoped plan persistence.
pub trait PlanStore {
    /// The owner's stored plans. A missing owner is an empty record.
    fn get(&self, owner: &OwnerId) -> Result<PlanRecord>;

    /// Add `plan` for the owner and return it as stored.
    fn create(&mut self, owner: &OwnerId, plan: StoredPlan) -> Result<StoredPlan>;

    /// Replace the plan addressed by `plan_id` and return `plan` as stored.
    ///
    /// A `plan_id` that matches nothing leaves the record as it was.
    fn replace(&mut self, owner: &OwnerId, plan_id: &str, plan: StoredPlan) -> Result<StoredPlan>;
}

impl<S: PlanStore + ?Sized> PlanStore for Box<S> {
    fn get(&self, owner: &OwnerId) -> Result<PlanRecord> {
        (**self).get(owner)
    }

    fn create(&mut self, owner: &OwnerId, plan: StoredPlan) -> Result<StoredPlan> {
        (**self).create(owner, plan)
    }

    fn replace(&mut self, owner: &OwnerId, plan_id: &str, plan: StoredPlan) -> Result<StoredPlan> {
        (**self).replace(owner, plan_id, plan)
    }
}

//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! update operations with consistent messaging and resource display.

use std::fmt;

use crate::models::StoredPlan;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     display::CreateResult,
///     models::{ActionPlan, StoredPlan, Week},
/// };
///
/// let plan = StoredPlan::with_id("p1", ActionPlan::new("Couch to 5k", [Week::new(1, "Walk")]));
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.starts_with("Saved plan with ID: p1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StoredPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource.id {
            Some(id) => writeln!(f, "Saved plan with ID: {id}")?,
            None => writeln!(f, "Saved plan '{}'", self.resource.plan.title)?,
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<StoredPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource.id {
            Some(id) => writeln!(f, "Updated plan with ID: {id}")?,
            None => writeln!(f, "Updated plan '{}'", self.resource.plan.title)?,
        }

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionPlan, Week};

    #[test]
    fn test_update_result_lists_changes() {
        let plan = StoredPlan::new(None, ActionPlan::new("Solo", [Week::new(1, "Base")]));
        let output = UpdateResult::with_changes(plan, vec!["Theme of week 1".to_string()]).to_string();

        assert!(output.starts_with("Updated plan 'Solo'"));
        assert!(output.contains("Changes made:\n- Theme of week 1"));
        assert!(output.contains("# Solo"));
    }
}

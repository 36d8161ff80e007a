//! Collection wrapper types for displaying groups of stored plans.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use super::datetime::LongDate;
use crate::{
    models::{ActionPlan, StoredPlan},
    schedule::{resolve, Resolution},
};

/// Newtype wrapper for displaying an owner's stored plans as a summary list.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     display::PlanList,
///     models::{ActionPlan, StoredPlan, Week},
/// };
///
/// let plans = vec![StoredPlan::with_id("p1", ActionPlan::new("Spring block", [Week::new(1, "Base")]))];
/// let output = PlanList(plans).to_string();
/// assert!(output.contains("Spring block"));
/// assert!(output.contains("p1"));
/// ```
pub struct PlanList(pub Vec<StoredPlan>);

impl PlanList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredPlan> {
        self.0.iter()
    }
}

impl Index<usize> for PlanList {
    type Output = StoredPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanList {
    type Item = StoredPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PlanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        for stored in &self.0 {
            let plan = &stored.plan;
            write!(f, "- **{}**", plan.title)?;
            if let Some(id) = &stored.id {
                write!(f, " (ID: {id})")?;
            }
            write!(f, " · {} weeks · {} tasks", plan.weeks.len(), plan.task_count())?;
            if let Some((first, last)) = calendar_span(plan) {
                write!(f, " · {} to {}", LongDate(first), LongDate(last))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Earliest and latest calendar dates used as day keys in `plan`.
///
/// Weekday-keyed and unresolvable buckets are ignored; a plan that has
/// never been anchored has no span.
pub fn calendar_span(plan: &ActionPlan) -> Option<(Date, Date)> {
    plan.weeks
        .iter()
        .flat_map(|week| week.days.keys().map(resolve).collect::<Vec<_>>())
        .filter_map(|resolution| match resolution {
            Resolution::Calendar(date) => Some(date),
            _ => None,
        })
        .fold(None, |span, date| match span {
            None => Some((date, date)),
            Some((first, last)) => Some((first.min(date), last.max(date))),
        })
}

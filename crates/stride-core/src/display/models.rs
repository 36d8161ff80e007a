//! Display implementations for domain models.
//!
//! Output is markdown: plans are top-level headings, weeks second-level,
//! days third-level, and every checkable task is a list item.

use std::fmt;

use super::datetime::display_date;
use crate::models::{Activity, ActionPlan, CompletionSet, Intensity, StoredPlan, TaskId, Week};

impl fmt::Display for ActionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanView::new(self, &CompletionSet::new()))
    }
}

impl fmt::Display for StoredPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanView::new(&self.plan, &CompletionSet::new()).with_id(self.id.as_deref()))
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_week(self, &CompletionSet::new(), f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.activity.join(", "))?;
        if let Some(duration) = &self.duration {
            write!(f, " · {duration}")?;
        }
        if let Some(intensity) = self.intensity {
            write!(f, " · {intensity}")?;
        }
        Ok(())
    }
}

/// A plan rendered together with a session's completion state.
pub struct PlanView<'a> {
    plan: &'a ActionPlan,
    completed: &'a CompletionSet,
    id: Option<&'a str>,
}

impl<'a> PlanView<'a> {
    pub fn new(plan: &'a ActionPlan, completed: &'a CompletionSet) -> Self {
        Self {
            plan,
            completed,
            id: None,
        }
    }

    /// Show the stored id under the title.
    pub fn with_id(mut self, id: Option<&'a str>) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan.title)?;
        writeln!(f)?;
        if let Some(id) = self.id {
            writeln!(f, "- ID: {id}")?;
        }
        writeln!(f, "- Weeks: {}", self.plan.weeks.len())?;
        writeln!(f, "- Progress: {}", self.completed.plan_progress(self.plan))?;

        if self.plan.weeks.is_empty() {
            writeln!(f, "\nNo weeks in this plan.")?;
        }
        for week in &self.plan.weeks {
            writeln!(f)?;
            fmt_week(week, self.completed, f)?;
        }
        Ok(())
    }
}

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn fmt_week(week: &Week, completed: &CompletionSet, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "## Week {}: {} ({})",
        week.week_number,
        week.theme,
        completed.week_progress(week)
    )?;

    if !week.daily_tasks.is_empty() {
        writeln!(f)?;
        writeln!(f, "### Daily Tasks")?;
        writeln!(f)?;
        for (index, task) in week.daily_tasks.iter().enumerate() {
            let id = TaskId::daily(week.week_number, index);
            writeln!(f, "- {} {task} `{id}`", checkbox(completed.is_complete(&id)))?;
        }
    }

    for bucket in &week.days {
        writeln!(f)?;
        writeln!(f, "### {}", display_date(&bucket.key))?;
        writeln!(f)?;
        if bucket.activities.is_empty() {
            writeln!(f, "Nothing scheduled.")?;
        }
        for (index, activity) in bucket.activities.iter().enumerate() {
            let id = TaskId::activity(week.week_number, bucket.key.as_str(), index);
            writeln!(
                f,
                "- {} **{activity}** `{id}`",
                checkbox(completed.is_complete(&id))
            )?;
            if let Some(details) = &activity.details {
                for detail in details.iter() {
                    writeln!(f, "  - {detail}")?;
                }
            }
        }
    }
    Ok(())
}

/// Reference listing of intensity zones.
pub struct IntensityGuide;

impl fmt::Display for IntensityGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for zone in Intensity::ALL {
            writeln!(f, "- {zone}")?;
        }
        Ok(())
    }
}

//! Session-scoped task completion tracking.
//!
//! Completion is view state: it is kept in memory for as long as a session
//! lives and is never written by a plan store.

use std::{collections::HashSet, fmt, str::FromStr};

use super::{ActionPlan, Week};

/// Identifier of a single checkable task within a plan.
///
/// Formats as `week{N}-{day}-{index}` for activities and
/// `week{N}-daily-{index}` for daily tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskId {
    Activity {
        week_number: u32,
        day: String,
        index: usize,
    },
    Daily {
        week_number: u32,
        index: usize,
    },
}

impl TaskId {
    pub fn activity(week_number: u32, day: impl Into<String>, index: usize) -> Self {
        TaskId::Activity {
            week_number,
            day: day.into(),
            index,
        }
    }

    pub fn daily(week_number: u32, index: usize) -> Self {
        TaskId::Daily { week_number, index }
    }

    pub fn week_number(&self) -> u32 {
        match self {
            TaskId::Activity { week_number, .. } | TaskId::Daily { week_number, .. } => {
                *week_number
            }
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Activity {
                week_number,
                day,
                index,
            } => write!(f, "week{week_number}-{day}-{index}"),
            TaskId::Daily { week_number, index } => write!(f, "week{week_number}-daily-{index}"),
        }
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid task id: {s}");

        let rest = s.strip_prefix("week").ok_or_else(invalid)?;
        let (week, rest) = rest.split_once('-').ok_or_else(invalid)?;
        let week_number = week.parse::<u32>().map_err(|_| invalid())?;
        // Day keys may contain dashes themselves ("2024-03-04"), so the index
        // is always the last segment.
        let (day, index) = rest.rsplit_once('-').ok_or_else(invalid)?;
        let index = index.parse::<usize>().map_err(|_| invalid())?;
        if day.is_empty() {
            return Err(invalid());
        }

        Ok(if day == "daily" {
            TaskId::Daily { week_number, index }
        } else {
            TaskId::activity(week_number, day, index)
        })
    }
}

/// Completed / total task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// Set of completed tasks for one viewing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    completed: HashSet<TaskId>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state of `task`, returning whether it is now complete.
    pub fn toggle(&mut self, task: TaskId) -> bool {
        if self.completed.remove(&task) {
            false
        } else {
            self.completed.insert(task);
            true
        }
    }

    pub fn mark(&mut self, task: TaskId) {
        self.completed.insert(task);
    }

    pub fn is_complete(&self, task: &TaskId) -> bool {
        self.completed.contains(task)
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Completion counts for one week.
    ///
    /// Ids left over from an earlier shape of the week (a removed activity,
    /// a renamed day) are not counted.
    pub fn week_progress(&self, week: &Week) -> Progress {
        let activities = week.days.iter().flat_map(|bucket| {
            (0..bucket.activities.len())
                .map(move |index| TaskId::activity(week.week_number, bucket.key.as_str(), index))
        });
        let daily = (0..week.daily_tasks.len()).map(|index| TaskId::daily(week.week_number, index));

        let completed = activities
            .chain(daily)
            .filter(|task| self.is_complete(task))
            .count();

        Progress {
            completed,
            total: week.task_count(),
        }
    }

    /// Completion counts across the whole plan.
    pub fn plan_progress(&self, plan: &ActionPlan) -> Progress {
        plan.weeks
            .iter()
            .map(|week| self.week_progress(week))
            .fold(Progress::default(), |acc, week| Progress {
                completed: acc.completed + week.completed,
                total: acc.total + week.total,
            })
    }
}

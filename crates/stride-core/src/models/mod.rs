//! Data models for plans, weeks, activities and completion state.
//!
//! The JSON shape of [`ActionPlan`] is both the paste-in template format and
//! the persisted format:
//!
//! ```json
//! {
//!   "title": "Base building",
//!   "weeks": [{
//!     "weekNumber": 1,
//!     "theme": "Easy start",
//!     "days": { "Monday": [{ "activity": ["Run"], "duration": "30 minutes", "intensity": "2" }] },
//!     "dailyTasks": ["Stretch"]
//!   }]
//! }
//! ```

mod activity;
mod completion;
mod intensity;
mod plan;
mod week;


pub use activity::{Activity, OneOrMany};
pub use completion::{CompletionSet, Progress, TaskId};
pub use intensity::Intensity;
pub use plan::{ActionPlan, OwnerId, StoredPlan};
pub use week::{DayBucket, Days, Week};

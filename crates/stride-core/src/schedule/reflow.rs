//! Anchoring weekday-keyed templates onto a calendar.

use std::{collections::BTreeSet, sync::Arc};

use jiff::civil::{Date, Weekday};
use log::warn;

use super::resolver::{parse_iso_date, parse_weekday};
use crate::models::{ActionPlan, DayBucket, Days, Week};

/// Re-key every weekday bucket of `plan` with a concrete ISO date.
///
/// A single cursor starts at `start` and only ever moves forward across the
/// whole plan. For each bucket, in declaration order, the cursor advances
/// until it lands on the bucket's weekday, the bucket takes that date, and
/// the cursor steps one day past it. Consequences:
///
/// - dates increase strictly in declaration order, across weeks too;
/// - `start` itself is used when its weekday matches the first bucket;
/// - a week declaring "Wednesday" before "Monday" gets a Monday *after* that
///   Wednesday.
///
/// Buckets whose key is not a weekday name keep their key and leave the
/// cursor where it was. Dates already used as keys anywhere in the plan are
/// never handed out again; the bucket takes the next free matching weekday.
///
/// ```rust
/// use jiff::civil::date;
/// use stride_core::{models::{ActionPlan, Activity, Week}, schedule::reflow};
///
/// let mut week = Week::new(1, "Start");
/// week.days.insert("Monday", vec![Activity::new("Run")]);
/// week.days.insert("Wednesday", vec![Activity::new("Swim")]);
/// let plan = ActionPlan::new("Plan", [week]);
///
/// let anchored = reflow(&plan, date(2024, 3, 4));
/// let keys: Vec<_> = anchored.weeks[0].days.keys().collect();
/// assert_eq!(keys, ["2024-03-04", "2024-03-06"]);
/// ```
pub fn reflow(plan: &ActionPlan, start: Date) -> ActionPlan {
    let taken: BTreeSet<Date> = plan
        .weeks
        .iter()
        .flat_map(|week| week.days.keys().filter_map(parse_iso_date).collect::<Vec<_>>())
        .collect();
    let mut cursor = Some(start);

    let weeks = plan
        .weeks
        .iter()
        .map(|week| Arc::new(reflow_week(week, &mut cursor, &taken)))
        .collect();

    ActionPlan {
        title: plan.title.clone(),
        weeks,
    }
}

fn reflow_week(week: &Week, cursor: &mut Option<Date>, taken: &BTreeSet<Date>) -> Week {
    let days: Days = week
        .days
        .iter()
        .map(|bucket| {
            let key = match assign_date(&bucket.key, cursor, taken) {
                Some(date) => date.to_string(),
                None => bucket.key.clone(),
            };
            DayBucket::new(key, bucket.activities.clone())
        })
        .collect();

    Week {
        days,
        ..week.clone()
    }
}

/// Date for one bucket key, advancing the shared cursor past it.
fn assign_date(key: &str, cursor: &mut Option<Date>, taken: &BTreeSet<Date>) -> Option<Date> {
    let Some(weekday) = parse_weekday(key) else {
        warn!("Day key '{key}' is not a weekday name; keeping it unchanged");
        return None;
    };
    let Some(from) = *cursor else {
        warn!("Calendar exhausted before day key '{key}'; keeping it unchanged");
        return None;
    };

    let Some(date) = next_free(from, weekday, taken) else {
        warn!("Calendar exhausted before day key '{key}'; keeping it unchanged");
        *cursor = None;
        return None;
    };
    *cursor = date.tomorrow().ok();
    Some(date)
}

/// First date on or after `from` that falls on `weekday` and is not already
/// a key of the plan.
fn next_free(from: Date, weekday: Weekday, taken: &BTreeSet<Date>) -> Option<Date> {
    let mut date = from;
    loop {
        if date.weekday() == weekday {
            if !taken.contains(&date) {
                return Some(date);
            }
            warn!("{date} already has its own day bucket; moving on to the following week");
        }
        date = date.tomorrow().ok()?;
    }
}

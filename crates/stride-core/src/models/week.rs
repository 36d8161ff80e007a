//! Week and day bucket definitions.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::Activity;

/// Activities scheduled under one day key.
///
/// The key is either a weekday name ("Monday") or an ISO date
/// ("2024-03-04"); which one depends on whether the plan has been anchored
/// to a calendar yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub key: String,
    pub activities: Vec<Activity>,
}

impl DayBucket {
    pub fn new(key: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            key: key.into(),
            activities,
        }
    }
}

/// Day buckets of a week in declaration order.
///
/// Serialized as a JSON object. Declaration order matters for calendar
/// reflow, so the buckets are kept as a list rather than a hash map. Keys are
/// unique: inserting an existing key replaces its activities in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Days(Vec<DayBucket>);

impl Days {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bucket for `key`, keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, activities: Vec<Activity>) {
        let key = key.into();
        match self.0.iter_mut().find(|bucket| bucket.key == key) {
            Some(bucket) => bucket.activities = activities,
            None => self.0.push(DayBucket { key, activities }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Activity]> {
        self.0
            .iter()
            .find(|bucket| bucket.key == key)
            .map(|bucket| bucket.activities.as_slice())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Vec<Activity>> {
        self.0
            .iter_mut()
            .find(|bucket| bucket.key == key)
            .map(|bucket| &mut bucket.activities)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|bucket| bucket.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayBucket> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of activities across all buckets.
    pub fn activity_count(&self) -> usize {
        self.0.iter().map(|bucket| bucket.activities.len()).sum()
    }
}

impl FromIterator<DayBucket> for Days {
    fn from_iter<I: IntoIterator<Item = DayBucket>>(iter: I) -> Self {
        let mut days = Days::new();
        for bucket in iter {
            days.insert(bucket.key, bucket.activities);
        }
        days
    }
}

impl<'a> IntoIterator for &'a Days {
    type Item = &'a DayBucket;
    type IntoIter = std::slice::Iter<'a, DayBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Days {
    type Item = DayBucket;
    type IntoIter = std::vec::IntoIter<DayBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Days {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in &self.0 {
            map.serialize_entry(&bucket.key, &bucket.activities)?;
        }
        map.end()
    }
}

struct DaysVisitor;

impl<'de> Visitor<'de> for DaysVisitor {
    type Value = Days;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of day keys to activity lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut days = Days::new();
        while let Some((key, activities)) = access.next_entry::<String, Vec<Activity>>()? {
            days.insert(key, activities);
        }
        Ok(days)
    }
}

impl<'de> Deserialize<'de> for Days {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DaysVisitor)
    }
}

/// One week of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// Identity of the week within its plan; edits address weeks by this
    pub week_number: u32,

    /// Short free-text focus for the week
    #[serde(default)]
    pub theme: String,

    #[serde(default)]
    pub days: Days,

    /// Recurring tasks for every day of the week
    #[serde(default)]
    pub daily_tasks: Vec<String>,
}

impl Week {
    pub fn new(week_number: u32, theme: impl Into<String>) -> Self {
        Self {
            week_number,
            theme: theme.into(),
            days: Days::new(),
            daily_tasks: Vec::new(),
        }
    }

    /// Number of checkable tasks: every activity plus every daily task.
    pub fn task_count(&self) -> usize {
        self.days.activity_count() + self.daily_tasks.len()
    }
}

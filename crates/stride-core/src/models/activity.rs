//! Activity model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Intensity;

/// A text field that holds either one value or an ordered list of values.
///
/// Plans written by hand use both shapes for the same field, e.g.
/// `"activity": "Run"` next to `"activity": ["Run", "Swim"]`. The shape is
/// kept so a plan serializes back the way it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    Single(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Iterate the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            OneOrMany::Single(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }

    /// Join all values with `separator`.
    pub fn join(&self, separator: &str) -> String {
        match self {
            OneOrMany::Single(value) => value.clone(),
            OneOrMany::Many(values) => values.join(separator),
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Single(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    /// True when the field holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.iter().all(str::is_empty)
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::Single(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::Single(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

/// A single scheduled session within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Discipline label(s); a session can combine several
    pub activity: OneOrMany,

    /// Free-form duration such as "30 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Effort zone
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::intensity::deserialize_optional"
    )]
    pub intensity: Option<Intensity>,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<OneOrMany>,
}

impl Activity {
    /// Create an activity with just a label.
    pub fn new(activity: impl Into<OneOrMany>) -> Self {
        Self {
            activity: activity.into(),
            duration: None,
            intensity: None,
            details: None,
        }
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the intensity zone.
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Set the details.
    pub fn with_details(mut self, details: impl Into<OneOrMany>) -> Self {
        self.details = Some(details.into());
        self
    }
}

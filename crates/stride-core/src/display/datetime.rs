//! Day key display utilities.
//!
//! Every rendering path formats day keys through [`display_date`], whether
//! the plan has been anchored to a calendar or still uses weekday names.

use std::fmt;

use jiff::civil::Date;

use crate::schedule::{resolve, weekday_name, Resolution};

/// A day key prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    /// Resolved date, or `None` when the key could not be resolved
    pub date: Option<Date>,
    /// Heading text shown to the user
    pub label: String,
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A wrapper around a civil `Date` that formats it as a long-form heading,
/// e.g. `Monday, March 4, 2024`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %-d, %Y"))
    }
}

/// Normalize a day key for display.
///
/// - ISO dates render as `Monday, March 4, 2024`.
/// - Weekday names render as the canonical weekday name; the attached date
///   is from a reference week and carries no calendar meaning.
/// - Anything else renders verbatim with no date.
///
/// ```rust
/// use stride_core::display::display_date;
///
/// assert_eq!(display_date("2024-03-04").label, "Monday, March 4, 2024");
/// assert_eq!(display_date("tuesday").label, "Tuesday");
///
/// let fallback = display_date("NotADate");
/// assert_eq!(fallback.label, "NotADate");
/// assert!(fallback.date.is_none());
/// ```
pub fn display_date(key: &str) -> DayLabel {
    let resolution = resolve(key);
    let label = match resolution {
        Resolution::Calendar(date) => LongDate(date).to_string(),
        Resolution::Weekday(weekday) => weekday_name(weekday).to_string(),
        Resolution::Unresolved => key.to_string(),
    };
    DayLabel {
        date: resolution.date(),
        label,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, Weekday};

    use super::*;

    #[test]
    fn test_display_date_for_calendar_key() {
        let label = display_date("2024-11-21");
        assert_eq!(label.date, Some(date(2024, 11, 21)));
        assert_eq!(label.label, "Thursday, November 21, 2024");
    }

    #[test]
    fn test_display_date_for_weekday_key() {
        let label = display_date("FRIDAY");
        assert_eq!(label.label, "Friday");
        assert_eq!(label.date.map(|d| d.weekday()), Some(Weekday::Friday));
    }

    #[test]
    fn test_display_date_falls_back_to_raw_key() {
        for key in ["NotADate", "Mon", "2024-02-30", "Day 1"] {
            let label = display_date(key);
            assert_eq!(label.label, key);
            assert_eq!(label.date, None);
            assert_eq!(label.to_string(), key);
        }
    }
}

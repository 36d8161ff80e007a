//! Day key resolution.
//!
//! A day key is either an ISO calendar date or a full weekday name. This
//! module is the only place that knows the grammar of both.

use jiff::civil::{date, Date, Weekday};

/// Weekday names with the date each resolves to in the reference week
/// starting Monday 2024-01-01.
const WEEKDAYS: [(&str, Weekday, Date); 7] = [
    ("Monday", Weekday::Monday, date(2024, 1, 1)),
    ("Tuesday", Weekday::Tuesday, date(2024, 1, 2)),
    ("Wednesday", Weekday::Wednesday, date(2024, 1, 3)),
    ("Thursday", Weekday::Thursday, date(2024, 1, 4)),
    ("Friday", Weekday::Friday, date(2024, 1, 5)),
    ("Saturday", Weekday::Saturday, date(2024, 1, 6)),
    ("Sunday", Weekday::Sunday, date(2024, 1, 7)),
];

/// Outcome of resolving a day key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key is an ISO `yyyy-MM-dd` date
    Calendar(Date),
    /// The key is a full weekday name
    Weekday(Weekday),
    /// The key is neither; callers show it verbatim
    Unresolved,
}

impl Resolution {
    /// A concrete date for the key, if any.
    ///
    /// Weekday names map into a fixed reference week, so the date of a
    /// [`Resolution::Weekday`] is only good for formatting, never for
    /// ordering buckets against calendar dates.
    pub fn date(&self) -> Option<Date> {
        match self {
            Resolution::Calendar(date) => Some(*date),
            Resolution::Weekday(weekday) => Some(reference_date(*weekday)),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Resolve a day key: strict ISO date first, then a full weekday name.
///
/// Never fails. Weekday names match case-insensitively; abbreviations
/// such as "Mon" are not accepted.
///
/// ```rust
/// use jiff::civil::{date, Weekday};
/// use stride_core::schedule::{resolve, Resolution};
///
/// assert_eq!(resolve("2024-03-04"), Resolution::Calendar(date(2024, 3, 4)));
/// assert_eq!(resolve("monday"), Resolution::Weekday(Weekday::Monday));
/// assert_eq!(resolve("Mon"), Resolution::Unresolved);
/// ```
pub fn resolve(key: &str) -> Resolution {
    if let Some(date) = parse_iso_date(key) {
        return Resolution::Calendar(date);
    }
    match parse_weekday(key) {
        Some(weekday) => Resolution::Weekday(weekday),
        None => Resolution::Unresolved,
    }
}

/// Parse a strict `yyyy-MM-dd` date.
pub fn parse_iso_date(key: &str) -> Option<Date> {
    let bytes = key.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    Date::strptime("%Y-%m-%d", key).ok()
}

/// Parse a full weekday name, ignoring ASCII case.
pub fn parse_weekday(key: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, weekday, _)| *weekday)
}

/// Canonical English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS
        .iter()
        .find(|(_, candidate, _)| *candidate == weekday)
        .map_or("", |(name, _, _)| name)
}

fn reference_date(weekday: Weekday) -> Date {
    WEEKDAYS
        .iter()
        .find(|(_, candidate, _)| *candidate == weekday)
        .map_or(WEEKDAYS[0].2, |(_, _, date)| *date)
}

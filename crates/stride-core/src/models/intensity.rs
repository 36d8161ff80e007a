//! Intensity zones attached to activities.

use std::{fmt, str::FromStr};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// One of five ordinal effort zones, from lightest to hardest.
///
/// On the wire a zone is the string `"1"` through `"5"`. Integers are
/// accepted when reading so hand-written plans can use either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl Intensity {
    /// All zones in ascending order.
    pub const ALL: [Intensity; 5] = [
        Intensity::Zone1,
        Intensity::Zone2,
        Intensity::Zone3,
        Intensity::Zone4,
        Intensity::Zone5,
    ];

    /// Zone number, 1 through 5.
    pub fn level(&self) -> u8 {
        match self {
            Intensity::Zone1 => 1,
            Intensity::Zone2 => 2,
            Intensity::Zone3 => 3,
            Intensity::Zone4 => 4,
            Intensity::Zone5 => 5,
        }
    }

    /// Build a zone from its number.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            1 => Some(Intensity::Zone1),
            2 => Some(Intensity::Zone2),
            3 => Some(Intensity::Zone3),
            4 => Some(Intensity::Zone4),
            5 => Some(Intensity::Zone5),
            _ => None,
        }
    }

    /// Fixed human-readable description of the zone.
    pub fn description(&self) -> &'static str {
        match self {
            Intensity::Zone1 => "Very Light - 50-60% of max heart rate",
            Intensity::Zone2 => "Light - 60-70% of max heart rate",
            Intensity::Zone3 => "Moderate - 70-80% of max heart rate",
            Intensity::Zone4 => "Hard - 80-90% of max heart rate",
            Intensity::Zone5 => "Maximum - 90-100% of max heart rate",
        }
    }

    /// Wire representation, `"1"` through `"5"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Zone1 => "1",
            Intensity::Zone2 => "2",
            Intensity::Zone3 => "3",
            Intensity::Zone4 => "4",
            Intensity::Zone5 => "5",
        }
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("Zone ")
            .or_else(|| trimmed.strip_prefix("zone "))
            .unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .ok()
            .and_then(Intensity::from_level)
            .ok_or_else(|| format!("Invalid intensity zone: {s} (expected 1-5)"))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {} ({})", self.level(), self.description())
    }
}

impl Serialize for Intensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct IntensityVisitor;

impl<'de> Visitor<'de> for IntensityVisitor {
    type Value = Option<Intensity>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an intensity zone from \"1\" to \"5\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            return Ok(None);
        }
        v.parse().map(Some).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Intensity::from_level(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("Invalid intensity zone: {v} (expected 1-5)")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        let level = u64::try_from(v)
            .map_err(|_| E::custom(format!("Invalid intensity zone: {v} (expected 1-5)")))?;
        self.visit_u64(level)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(IntensityVisitor)
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(IntensityVisitor)?
            .ok_or_else(|| de::Error::custom("intensity zone must not be empty"))
    }
}

/// Deserialize an optional zone, treating `null` and `""` as absent.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Intensity>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(IntensityVisitor)
}

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EpiError;

/// Label of the synthetic snapshot date.
pub const NOW_LABEL: &str = "Now";

/// Upstream column label format (`1/22/20`) used for parsing.
const PARSE_FORMAT: &str = "%m/%d/%y";
/// Same format without zero padding, used for rendering.
const RENDER_FORMAT: &str = "%-m/%-d/%y";

/// One entry of the served date ordering.
///
/// Calendar days compare chronologically and `Now` sorts after every day, so
/// it is always the last entry of a `dateList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateKey {
    /// A trailing calendar date column from the historical feed.
    Day(NaiveDate),
    /// The latest point-in-time snapshot.
    Now,
}

impl DateKey {
    /// Parse an upstream `M/D/YY` column label.
    ///
    /// # Errors
    /// Returns `EpiError::ShapeMismatch` when the label is not a date column.
    pub fn parse_label(label: &str) -> Result<Self, EpiError> {
        let trimmed = label.trim();
        if trimmed == NOW_LABEL {
            return Ok(Self::Now);
        }
        NaiveDate::parse_from_str(trimmed, PARSE_FORMAT)
            .map(Self::Day)
            .map_err(|e| EpiError::shape(format!("invalid date column '{trimmed}': {e}")))
    }

    /// Returns `true` for the synthetic snapshot date.
    #[must_use]
    pub const fn is_now(self) -> bool {
        matches!(self, Self::Now)
    }

    /// The calendar day, if any.
    #[must_use]
    pub const fn day(self) -> Option<NaiveDate> {
        match self {
            Self::Day(d) => Some(d),
            Self::Now => None,
        }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(d: NaiveDate) -> Self {
        Self::Day(d)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(d) => write!(f, "{}", d.format(RENDER_FORMAT)),
            Self::Now => f.write_str(NOW_LABEL),
        }
    }
}

impl FromStr for DateKey {
    type Err = EpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_label(&s).map_err(serde::de::Error::custom)
    }
}

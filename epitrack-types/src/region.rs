use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::counts::Counts;
use crate::date::DateKey;

/// Per-region record of the merged history.
///
/// `lat`/`long` are only set when the record was first seen through a direct
/// feed row; records created by a state roll-up carry no coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionRecord {
    /// Parent country (the record's own name for country-level records).
    pub country: String,
    /// `true` for state/province-level records.
    pub is_state: bool,
    /// Latitude from the historical feed.
    pub lat: Option<f64>,
    /// Longitude from the historical feed.
    pub long: Option<f64>,
    /// Counts per date, including `Now` once a snapshot was merged.
    pub counts: BTreeMap<DateKey, Counts>,
}

impl RegionRecord {
    /// A country-level record with no coordinates and no counts.
    pub fn country(name: impl Into<String>) -> Self {
        Self {
            country: name.into(),
            is_state: false,
            lat: None,
            long: None,
            counts: BTreeMap::new(),
        }
    }

    /// Counts on a date, if present.
    #[must_use]
    pub fn at(&self, date: DateKey) -> Option<Counts> {
        self.counts.get(&date).copied()
    }

    /// Counts of the synthetic `Now` date, if a snapshot was merged.
    #[must_use]
    pub fn now(&self) -> Option<Counts> {
        self.at(DateKey::Now)
    }
}

// Served shape: metadata fields side by side with one key per date label.
impl Serialize for RegionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let coords = usize::from(self.lat.is_some()) + usize::from(self.long.is_some());
        let mut map = serializer.serialize_map(Some(2 + coords + self.counts.len()))?;
        map.serialize_entry("country", &self.country)?;
        map.serialize_entry("isState", &self.is_state)?;
        if let Some(lat) = self.lat {
            map.serialize_entry("lat", &lat)?;
        }
        if let Some(long) = self.long {
            map.serialize_entry("long", &long)?;
        }
        for (date, counts) in &self.counts {
            map.serialize_entry(date, counts)?;
        }
        map.end()
    }
}

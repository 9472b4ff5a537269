use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::counts::Counts;
use crate::date::DateKey;
use crate::region::RegionRecord;

/// Key of the synthetic world total in the served document.
pub const WORLD_KEY: &str = "World";

/// Aggregate root served to callers: the date ordering, the world totals and
/// every state- and country-level record keyed by region name.
///
/// Invariants produced by the aggregator:
/// - `world[d]` is the sum of every feed row on `d`;
/// - a country with states holds the sum of its states on each date, plus its
///   own direct row when the feed also carries one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryData {
    /// Trailing window of calendar dates followed by `Now`.
    pub date_list: Vec<DateKey>,
    /// World totals per date.
    pub world: BTreeMap<DateKey, Counts>,
    /// Region records keyed by region name.
    pub regions: BTreeMap<String, RegionRecord>,
}

impl HistoryData {
    /// Look up a region record by key.
    #[must_use]
    pub fn region(&self, key: &str) -> Option<&RegionRecord> {
        self.regions.get(key)
    }

    /// Mutable access to a region record.
    pub fn region_mut(&mut self, key: &str) -> Option<&mut RegionRecord> {
        self.regions.get_mut(key)
    }

    /// World totals on a date.
    #[must_use]
    pub fn world_at(&self, date: DateKey) -> Option<Counts> {
        self.world.get(&date).copied()
    }

    /// Country-level records (`is_state == false`).
    pub fn countries(&self) -> impl Iterator<Item = (&str, &RegionRecord)> {
        self.regions
            .iter()
            .filter(|(_, r)| !r.is_state)
            .map(|(k, r)| (k.as_str(), r))
    }

    /// State-level records whose parent is `country`.
    pub fn states_of<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a RegionRecord)> + 'a {
        self.regions
            .iter()
            .filter(move |(_, r)| r.is_state && r.country == country)
            .map(|(k, r)| (k.as_str(), r))
    }

    /// Calendar dates of the window, without the trailing `Now`.
    pub fn days(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.date_list.iter().copied().filter(|d| !d.is_now())
    }

    /// Returns `true` when no region was aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

// Served shape: `{ "dateList": [...], "World": {...}, "<region>": {...}, ... }`.
impl Serialize for HistoryData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.regions.len()))?;
        map.serialize_entry("dateList", &self.date_list)?;
        map.serialize_entry(WORLD_KEY, &self.world)?;
        for (key, record) in &self.regions {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

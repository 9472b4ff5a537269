use serde::{Deserialize, Serialize};

use crate::counts::Counts;

/// One per-country row of the daily snapshot source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotItem {
    /// Country name, normalized when produced by the snapshot parser.
    pub country: String,
    /// Confirmed cases.
    pub confirmed: u64,
    /// Deaths.
    pub deaths: u64,
    /// Recovered cases.
    pub recovered: u64,
}

impl SnapshotItem {
    /// Build a snapshot item.
    pub fn new(country: impl Into<String>, confirmed: u64, deaths: u64, recovered: u64) -> Self {
        Self {
            country: country.into(),
            confirmed,
            deaths,
            recovered,
        }
    }

    /// The item's metrics as a `Counts` triple.
    #[must_use]
    pub const fn counts(&self) -> Counts {
        Counts::new(self.confirmed, self.deaths, self.recovered)
    }
}

//! Parsed shape of the row-oriented historical feed.

use serde::{Deserialize, Serialize};

/// Number of leading metadata columns (`Province/State`, `Country/Region`,
/// `Lat`, `Long`) before the date columns.
pub const METADATA_COLUMNS: usize = 4;

/// One geographic unit of a historical feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRow {
    /// Raw `Province/State` cell; empty for a bare-country row.
    pub province_state: String,
    /// Raw `Country/Region` cell, before name normalization.
    pub country_region: String,
    /// Raw latitude cell.
    pub lat: String,
    /// Raw longitude cell.
    pub long: String,
    /// One raw cell per entry of [`FeedTable::date_columns`].
    pub values: Vec<String>,
}

impl FeedRow {
    /// Raw cell at a date column position; missing cells read as empty.
    #[must_use]
    pub fn value(&self, column: usize) -> &str {
        self.values.get(column).map_or("", String::as_str)
    }
}

/// One metric's parsed feed: date headers plus one row per geographic unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTable {
    /// Date column labels in source order (`M/D/YY`).
    pub date_columns: Vec<String>,
    /// Rows in source order.
    pub rows: Vec<FeedRow>,
}

impl FeedTable {
    /// Position of a date column by its label.
    #[must_use]
    pub fn column_of(&self, label: &str) -> Option<usize> {
        self.date_columns.iter().position(|c| c == label)
    }

    /// Returns `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The three parallel, index-aligned metric feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalFeeds {
    /// Confirmed-case feed.
    pub confirmed: FeedTable,
    /// Deaths feed.
    pub deaths: FeedTable,
    /// Recovered feed.
    pub recovered: FeedTable,
}

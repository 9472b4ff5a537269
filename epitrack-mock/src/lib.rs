//! epitrack-mock
//!
//! Connectors for CI-safe tests and demos:
//! - [`MockConnector`] serves a fixed four-day slice of the historical feeds
//!   and a matching snapshot table;
//! - [`DynamicMockConnector`] defers every fetch to a test-side controller.
use async_trait::async_trait;
use epitrack_core::connector::{FeedConnector, HistorySource, SnapshotSource};
use epitrack_core::{
    EpiError, HistoricalFeeds, SnapshotItem, SnapshotLayout, parse_feed_csv, parse_snapshot_rows,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Parse the fixture feeds.
///
/// # Errors
/// Only fails if the embedded fixtures are malformed.
pub fn fixture_feeds() -> Result<HistoricalFeeds, EpiError> {
    Ok(HistoricalFeeds {
        confirmed: parse_feed_csv(fixtures::history::CONFIRMED)?,
        deaths: parse_feed_csv(fixtures::history::DEATHS)?,
        recovered: parse_feed_csv(fixtures::history::RECOVERED)?,
    })
}

/// Raw snapshot table rows, header row first, as a page extractor yields them.
#[must_use]
pub fn fixture_snapshot_rows() -> Vec<String> {
    fixtures::snapshot::rows()
}

/// Fixture snapshot parsed with the default layout.
#[must_use]
pub fn fixture_snapshot() -> Vec<SnapshotItem> {
    parse_snapshot_rows(&fixture_snapshot_rows(), &SnapshotLayout::default())
}

/// Date labels present in every fixture feed, oldest first.
#[must_use]
pub fn fixture_dates() -> Vec<&'static str> {
    fixtures::history::date_labels()
}

/// Mock connector providing deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FeedConnector for MockConnector {
    fn name(&self) -> &'static str {
        "epitrack-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_source(&self) -> Option<&dyn HistorySource> {
        Some(self as &dyn HistorySource)
    }

    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        Some(self as &dyn SnapshotSource)
    }
}

#[async_trait]
impl HistorySource for MockConnector {
    async fn fetch_history(&self) -> Result<HistoricalFeeds, EpiError> {
        fixture_feeds()
    }
}

#[async_trait]
impl SnapshotSource for MockConnector {
    async fn fetch_snapshot(&self) -> Result<Vec<SnapshotItem>, EpiError> {
        Ok(fixture_snapshot())
    }
}

use async_trait::async_trait;

pub use epitrack_types::ConnectorKey;
use epitrack_types::{EpiError, HistoricalFeeds, SnapshotItem};

/// Focused role trait for connectors that provide the three historical feeds.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch and parse the confirmed, deaths and recovered feeds.
    ///
    /// The three tables must be row-aligned; the aggregator checks row counts
    /// and date columns but not per-row identity.
    async fn fetch_history(&self) -> Result<HistoricalFeeds, EpiError>;
}

/// Focused role trait for connectors that provide the same-day snapshot.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the snapshot and return one item per country.
    async fn fetch_snapshot(&self) -> Result<Vec<SnapshotItem>, EpiError>;
}

/// Umbrella trait implemented by every upstream connector.
///
/// Capabilities are advertised through the `as_*` accessors; a connector that
/// returns `None` does not serve that dataset.
pub trait FeedConnector: Send + Sync {
    /// A stable identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise the historical feeds by returning a usable trait object.
    fn as_history_source(&self) -> Option<&dyn HistorySource> {
        None
    }

    /// Advertise the snapshot by returning a usable trait object.
    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        None
    }
}

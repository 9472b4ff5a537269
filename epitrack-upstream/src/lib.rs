//! epitrack-upstream
//!
//! Connector that implements `FeedConnector` over HTTP: the three historical
//! CSV feeds and the HTML page carrying the same-day snapshot table.
#![warn(missing_docs)]

/// Fetcher abstraction and the production `reqwest` fetcher.
pub mod adapter;
/// Connector builder and default upstream locations.
pub mod builder;

use std::sync::Arc;

use adapter::TextFetcher;
use async_trait::async_trait;
pub use builder::{
    DEFAULT_HISTORY_BASE, DEFAULT_SNAPSHOT_URL, SNAPSHOT_ROW_SELECTOR, UpstreamConnectorBuilder,
};
use epitrack_core::{
    EpiError, HistoricalFeeds, SnapshotItem, SnapshotLayout, parse_feed_csv, parse_snapshot_rows,
    connector::{ConnectorKey, FeedConnector, HistorySource, SnapshotSource},
};
use scraper::{Html, Selector};
use url::Url;

pub(crate) struct FeedUrls {
    pub(crate) confirmed: Url,
    pub(crate) deaths: Url,
    pub(crate) recovered: Url,
}

/// Public connector type. Construct with [`UpstreamConnector::builder`].
pub struct UpstreamConnector {
    fetcher: Arc<dyn TextFetcher>,
    feeds: FeedUrls,
    snapshot_url: Url,
    row_selector: Selector,
    layout: SnapshotLayout,
}

impl UpstreamConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("epitrack-upstream");

    /// Text content of every row matched by the row selector, in document order.
    ///
    /// # Errors
    /// Returns `EpiError::ShapeMismatch` when the page has no matching rows.
    pub fn extract_rows(&self, html: &str) -> Result<Vec<String>, EpiError> {
        let document = Html::parse_document(html);
        let rows: Vec<String> = document
            .select(&self.row_selector)
            .map(|row| row.text().collect::<String>())
            .collect();
        if rows.is_empty() {
            return Err(EpiError::shape("snapshot page has no table rows"));
        }
        Ok(rows)
    }

    async fn fetch_feed(&self, url: &Url) -> Result<epitrack_core::FeedTable, EpiError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "fetching historical feed");
        let text = self.fetcher.fetch_text(url.as_str()).await?;
        parse_feed_csv(&text)
    }
}

#[async_trait]
impl HistorySource for UpstreamConnector {
    async fn fetch_history(&self) -> Result<HistoricalFeeds, EpiError> {
        let (confirmed, deaths, recovered) = futures::try_join!(
            self.fetch_feed(&self.feeds.confirmed),
            self.fetch_feed(&self.feeds.deaths),
            self.fetch_feed(&self.feeds.recovered),
        )?;
        Ok(HistoricalFeeds {
            confirmed,
            deaths,
            recovered,
        })
    }
}

#[async_trait]
impl SnapshotSource for UpstreamConnector {
    async fn fetch_snapshot(&self) -> Result<Vec<SnapshotItem>, EpiError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.snapshot_url, "fetching snapshot page");
        let html = self.fetcher.fetch_text(self.snapshot_url.as_str()).await?;
        let rows = self.extract_rows(&html)?;
        let items = parse_snapshot_rows(&rows, &self.layout);
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), items = items.len(), "parsed snapshot table");
        Ok(items)
    }
}

impl FeedConnector for UpstreamConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "covid19-daily-data + Worldometer"
    }

    fn as_history_source(&self) -> Option<&dyn HistorySource> {
        Some(self as &dyn HistorySource)
    }

    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        Some(self as &dyn SnapshotSource)
    }
}

use std::sync::Arc;
use std::time::Duration;

use epitrack_core::{EpiError, SnapshotLayout};
use scraper::Selector;
use url::Url;

use crate::adapter::{ReqwestFetcher, TextFetcher};
use crate::{FeedUrls, UpstreamConnector};

/// Default prefix of the three historical CSV feeds.
pub const DEFAULT_HISTORY_BASE: &str =
    "https://raw.githubusercontent.com/bumbeishvili/covid19-daily-data/master/time_series_19-covid";
/// Default snapshot page.
pub const DEFAULT_SNAPSHOT_URL: &str = "https://www.worldometers.info/coronavirus/";
/// CSS selector for the rows of the snapshot table.
pub const SNAPSHOT_ROW_SELECTOR: &str = "#main_table_countries_today tr";

/// Builder for [`UpstreamConnector`].
#[derive(Clone)]
pub struct UpstreamConnectorBuilder {
    history_base: String,
    snapshot_url: String,
    row_selector: String,
    layout: SnapshotLayout,
    timeout: Duration,
    client: Option<reqwest::Client>,
    fetcher: Option<Arc<dyn TextFetcher>>,
}

impl Default for UpstreamConnectorBuilder {
    fn default() -> Self {
        Self {
            history_base: DEFAULT_HISTORY_BASE.to_string(),
            snapshot_url: DEFAULT_SNAPSHOT_URL.to_string(),
            row_selector: SNAPSHOT_ROW_SELECTOR.to_string(),
            layout: SnapshotLayout::default(),
            timeout: Duration::from_secs(30),
            client: None,
            fetcher: None,
        }
    }
}

impl UpstreamConnectorBuilder {
    /// Start from the deployed defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix of the historical feeds; `-Confirmed.csv`, `-Deaths.csv` and
    /// `-Recovered.csv` are appended.
    #[must_use]
    pub fn history_base(mut self, base: impl Into<String>) -> Self {
        self.history_base = base.into();
        self
    }

    /// URL of the snapshot page.
    #[must_use]
    pub fn snapshot_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot_url = url.into();
        self
    }

    /// CSS selector matching one element per snapshot table row.
    #[must_use]
    pub fn row_selector(mut self, selector: impl Into<String>) -> Self {
        self.row_selector = selector.into();
        self
    }

    /// Column offsets of the snapshot table.
    #[must_use]
    pub const fn layout(mut self, layout: SnapshotLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Per-request timeout for the default HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-provided HTTP client; the timeout setting is then ignored.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Replace HTTP entirely with a custom fetcher.
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn TextFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Validate the URLs and selector and build the connector.
    ///
    /// # Errors
    /// Returns `EpiError::InvalidArg` for an unparseable URL or selector, or
    /// when the default HTTP client cannot be built.
    pub fn build(self) -> Result<UpstreamConnector, EpiError> {
        let feed_url = |metric: &str| {
            Url::parse(&format!("{}-{metric}.csv", self.history_base))
                .map_err(|e| EpiError::invalid(format!("history base '{}': {e}", self.history_base)))
        };
        let feeds = FeedUrls {
            confirmed: feed_url("Confirmed")?,
            deaths: feed_url("Deaths")?,
            recovered: feed_url("Recovered")?,
        };
        let snapshot_url = Url::parse(&self.snapshot_url)
            .map_err(|e| EpiError::invalid(format!("snapshot url '{}': {e}", self.snapshot_url)))?;
        let row_selector = Selector::parse(&self.row_selector)
            .map_err(|e| EpiError::invalid(format!("row selector '{}': {e:?}", self.row_selector)))?;

        let fetcher: Arc<dyn TextFetcher> = match (self.fetcher, self.client) {
            (Some(fetcher), _) => fetcher,
            (None, Some(client)) => Arc::new(ReqwestFetcher::new(client)),
            (None, None) => Arc::new(ReqwestFetcher::with_timeout(self.timeout)?),
        };

        Ok(UpstreamConnector {
            fetcher,
            feeds,
            snapshot_url,
            row_selector,
            layout: self.layout,
        })
    }
}

impl UpstreamConnector {
    /// Returns a builder preset with the deployed upstream URLs.
    #[must_use]
    pub fn builder() -> UpstreamConnectorBuilder {
        UpstreamConnectorBuilder::new()
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use epitrack_core::EpiError;

/// Text retrieval abstraction (so we can inject fakes in tests).
///
/// Every failure, including a non-success HTTP status, surfaces as
/// `EpiError::SourceUnavailable`.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch the body at `url` as text.
    async fn fetch_text(&self, url: &str) -> Result<String, EpiError>;
}

/// Production fetcher backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Wrap an existing client.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    /// Returns `EpiError::InvalidArg` if the HTTP client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, EpiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("epitrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EpiError::invalid(format!("http client: {e}")))?;
        Ok(Self::new(client))
    }
}

fn map_http_err(e: &reqwest::Error, url: &str) -> EpiError {
    match e.status() {
        Some(status) => EpiError::unavailable(url, format!("status {status}")),
        None if e.is_timeout() => EpiError::unavailable(url, "request timed out"),
        None => EpiError::unavailable(url, e.to_string()),
    }
}

#[async_trait]
impl TextFetcher for ReqwestFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, EpiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_http_err(&e, url))?
            .error_for_status()
            .map_err(|e| map_http_err(&e, url))?;
        resp.text().await.map_err(|e| map_http_err(&e, url))
    }
}

impl dyn TextFetcher {
    /// Build a `TextFetcher` from a closure taking the requested URL.
    pub fn from_fn<F>(f: F) -> Arc<dyn TextFetcher>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<String, EpiError>,
    {
        struct FnFetcher<F>(F);

        #[async_trait]
        impl<F> TextFetcher for FnFetcher<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<String, EpiError>,
        {
            async fn fetch_text(&self, url: &str) -> Result<String, EpiError> {
                (self.0)(url)
            }
        }

        Arc::new(FnFetcher(f))
    }
}

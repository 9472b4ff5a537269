use std::sync::Arc;
use std::time::Duration;

use epitrack_core::flight::{FlightFlag, FlightGuard};
use epitrack_core::{
    CacheState, DataSource, EpiError, FeedConnector, HistoryData, RefreshConfig, RefreshOutcome,
    RefreshReport, SnapshotItem, TrackerStatus, aggregate_history, merge_snapshot,
};

use crate::clock::{Clock, SystemClock};
use crate::slot::Slot;

/// What a reader sees: the composite history, or that it was never built.
#[derive(Debug, Clone)]
pub enum CacheView {
    /// History has never been aggregated successfully.
    NotReady,
    /// The last published history, possibly stale.
    Ready(Arc<HistoryData>),
}

impl CacheView {
    /// Returns `true` for [`CacheView::Ready`].
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The published history, if any.
    #[must_use]
    pub fn into_data(self) -> Option<Arc<HistoryData>> {
        match self {
            Self::Ready(data) => Some(data),
            Self::NotReady => None,
        }
    }
}

/// Bounded-staleness cache over the historical feeds and the same-day snapshot.
///
/// Each source has its own TTL and at most one refresh pass in flight. Readers
/// never wait on a refresh: they get the last published value or
/// [`CacheView::NotReady`].
pub struct Tracker {
    pub(crate) history_connector: Arc<dyn FeedConnector>,
    pub(crate) snapshot_connector: Arc<dyn FeedConnector>,
    pub(crate) cfg: RefreshConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) history: Slot<HistoryData>,
    pub(crate) snapshot: Slot<Vec<SnapshotItem>>,
}

/// Builder for constructing a [`Tracker`].
pub struct TrackerBuilder {
    history_connector: Option<Arc<dyn FeedConnector>>,
    snapshot_connector: Option<Arc<dyn FeedConnector>>,
    cfg: RefreshConfig,
    clock: Arc<dyn Clock>,
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerBuilder {
    /// Create a builder with the deployed defaults and the system clock.
    ///
    /// Starts with no connectors; register one via [`with_connector`](Self::with_connector)
    /// or the per-source setters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history_connector: None,
            snapshot_connector: None,
            cfg: RefreshConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Register a connector for every source it advertises and that is not
    /// already taken by an earlier registration.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FeedConnector>) -> Self {
        if self.history_connector.is_none() && c.as_history_source().is_some() {
            self.history_connector = Some(Arc::clone(&c));
        }
        if self.snapshot_connector.is_none() && c.as_snapshot_source().is_some() {
            self.snapshot_connector = Some(c);
        }
        self
    }

    /// Use `c` for the historical feeds, replacing any earlier choice.
    #[must_use]
    pub fn history_connector(mut self, c: Arc<dyn FeedConnector>) -> Self {
        self.history_connector = Some(c);
        self
    }

    /// Use `c` for the snapshot, replacing any earlier choice.
    #[must_use]
    pub fn snapshot_connector(mut self, c: Arc<dyn FeedConnector>) -> Self {
        self.snapshot_connector = Some(c);
        self
    }

    /// Replace the whole refresh configuration.
    #[must_use]
    pub const fn config(mut self, cfg: RefreshConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Maximum age of the aggregated history before it is rebuilt.
    #[must_use]
    pub const fn history_ttl(mut self, ttl: Duration) -> Self {
        self.cfg.history_ttl = ttl;
        self
    }

    /// Maximum age of the snapshot before it is fetched again.
    #[must_use]
    pub const fn snapshot_ttl(mut self, ttl: Duration) -> Self {
        self.cfg.snapshot_ttl = ttl;
        self
    }

    /// Period of the background refresh started by
    /// [`Tracker::spawn_periodic`].
    #[must_use]
    pub const fn refresh_interval(mut self, interval: Duration) -> Self {
        self.cfg.refresh_interval = interval;
        self
    }

    /// Number of trailing calendar dates kept from the feeds.
    #[must_use]
    pub const fn window_days(mut self, days: usize) -> Self {
        self.cfg.window_days = days;
        self
    }

    /// Inject the time source used for TTL decisions.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the `Tracker`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configuration has a zero duration or window,
    /// or if no registered connector provides one of the two sources.
    pub fn build(self) -> Result<Tracker, EpiError> {
        self.cfg.validate()?;

        let history_connector = self
            .history_connector
            .filter(|c| c.as_history_source().is_some())
            .ok_or_else(|| {
                EpiError::invalid("no history connector; add one via with_connector(...)")
            })?;
        let snapshot_connector = self
            .snapshot_connector
            .filter(|c| c.as_snapshot_source().is_some())
            .ok_or_else(|| {
                EpiError::invalid("no snapshot connector; add one via with_connector(...)")
            })?;

        Ok(Tracker {
            history_connector,
            snapshot_connector,
            cfg: self.cfg,
            clock: self.clock,
            history: Slot::default(),
            snapshot: Slot::default(),
        })
    }
}

impl Tracker {
    /// Start building a new `Tracker`.
    #[must_use]
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    /// The effective refresh configuration.
    #[must_use]
    pub const fn config(&self) -> &RefreshConfig {
        &self.cfg
    }

    /// Current composite history without triggering anything.
    #[must_use]
    pub fn current(&self) -> CacheView {
        self.history
            .value()
            .map_or(CacheView::NotReady, CacheView::Ready)
    }

    /// The read operation behind the serving layer.
    ///
    /// Same as [`current`](Self::current), except that while the history is
    /// empty and no history pass is running a background [`refresh`](Self::refresh)
    /// is spawned. Must be called from within a tokio runtime.
    pub fn serve(self: &Arc<Self>) -> CacheView {
        let view = self.current();
        if !view.is_ready() && !self.history.in_flight.is_active() {
            #[cfg(feature = "tracing")]
            tracing::info!("history not ready; spawning on-demand refresh");
            let tracker = Arc::clone(self);
            tokio::spawn(async move {
                let _report = tracker.refresh().await;
            });
        }
        view
    }

    /// Freshness and in-flight state of both sources.
    #[must_use]
    pub fn status(&self) -> TrackerStatus {
        let now = self.clock.now();
        TrackerStatus {
            history: self.history.status(now, self.cfg.history_ttl),
            snapshot: self.snapshot.status(now, self.cfg.snapshot_ttl),
        }
    }

    /// Run one refresh pass: history first, then the snapshot.
    ///
    /// Fresh sources are skipped, as are sources with a pass already in
    /// flight. Failures are reported, never propagated; the previously
    /// published values stay in place.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "epitrack::tracker::refresh", skip(self))
    )]
    pub async fn refresh(&self) -> RefreshReport {
        let history = self.refresh_history().await;
        let snapshot = self.refresh_snapshot().await;
        RefreshReport { history, snapshot }
    }

    async fn refresh_history(&self) -> RefreshOutcome {
        if self.history.state(self.clock.now(), self.cfg.history_ttl) == CacheState::Fresh {
            return RefreshOutcome::Fresh;
        }
        let Some(_guard) = FlightGuard::try_acquire(&self.history.in_flight) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("history pass already in flight");
            return RefreshOutcome::InFlight;
        };
        // A pass may have finished between the check above and the guard.
        if self.history.state(self.clock.now(), self.cfg.history_ttl) == CacheState::Fresh {
            return RefreshOutcome::Fresh;
        }

        let Some(source) = self.history_connector.as_history_source() else {
            return self.history_failed(EpiError::Unsupported(DataSource::History.to_string()));
        };
        let fetched = source
            .fetch_history()
            .await
            .and_then(|feeds| aggregate_history(&feeds, self.cfg.window_days));

        match fetched {
            Ok(data) => {
                self.publish_history(&data);
                #[cfg(feature = "tracing")]
                tracing::info!(
                    connector = self.history_connector.name(),
                    "history rebuilt"
                );
                RefreshOutcome::Refreshed
            }
            Err(e) => self.history_failed(e),
        }
    }

    /// Publish a rebuilt history with the latest snapshot applied as `Now`.
    fn publish_history(&self, data: &HistoryData) {
        loop {
            let items = self.snapshot.value();
            let mut next = data.clone();
            if let Some(items) = &items {
                merge_snapshot(&mut next, items);
            }
            // A snapshot published after `items` was read may already have
            // tried to merge into the old history; build again with it.
            let snapshot_unchanged = || match (self.snapshot.value(), &items) {
                (Some(current), Some(seen)) => Arc::ptr_eq(&current, seen),
                (None, None) => true,
                _ => false,
            };
            if self
                .history
                .publish_when(next, self.clock.now(), snapshot_unchanged)
            {
                return;
            }
        }
    }

    fn history_failed(&self, e: EpiError) -> RefreshOutcome {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %e, "history pass failed; keeping previous value");
        self.history.record_error(e.clone());
        RefreshOutcome::Failed(e)
    }

    async fn refresh_snapshot(&self) -> RefreshOutcome {
        if self.snapshot.state(self.clock.now(), self.cfg.snapshot_ttl) == CacheState::Fresh {
            return RefreshOutcome::Fresh;
        }
        let Some(_guard) = FlightGuard::try_acquire(&self.snapshot.in_flight) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("snapshot pass already in flight");
            return RefreshOutcome::InFlight;
        };
        if self.snapshot.state(self.clock.now(), self.cfg.snapshot_ttl) == CacheState::Fresh {
            return RefreshOutcome::Fresh;
        }

        let Some(source) = self.snapshot_connector.as_snapshot_source() else {
            return self.snapshot_failed(EpiError::Unsupported(DataSource::Snapshot.to_string()));
        };
        match source.fetch_snapshot().await {
            Ok(items) => {
                self.snapshot.publish(items, self.clock.now());
                if let Some(items) = self.snapshot.value() {
                    self.history.modify(|data| {
                        let _summary = merge_snapshot(data, &items);
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            items = items.len(),
                            matched = _summary.matched,
                            dropped = ?_summary.dropped,
                            "snapshot merged into history"
                        );
                    });
                }
                RefreshOutcome::Refreshed
            }
            Err(e) => self.snapshot_failed(e),
        }
    }

    fn snapshot_failed(&self, e: EpiError) -> RefreshOutcome {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %e, "snapshot pass failed; keeping previous value");
        self.snapshot.record_error(e.clone());
        RefreshOutcome::Failed(e)
    }
}

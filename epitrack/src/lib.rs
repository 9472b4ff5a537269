//! epitrack keeps an aggregated, bounded-staleness view of epidemiological
//! case counts.
//!
//! Overview
//! - Pulls three row-aligned historical feeds (confirmed, deaths, recovered)
//!   from a `FeedConnector` and rolls them up state → country → world over a
//!   trailing window of dates.
//! - Pulls a same-day per-country snapshot and overlays it as the synthetic
//!   `Now` date.
//! - Caches both with independent TTLs and at most one refresh in flight per
//!   source. Readers never wait on a refresh.
//!
//! Key behaviors
//! - A failed pass keeps the previously published value; the source stays
//!   stale and the next trigger retries.
//! - The history pass always finishes before the snapshot pass of the same
//!   `refresh()`, and a rebuilt history re-applies the latest snapshot before
//!   it is published.
//! - Snapshot merges are copy-on-write: readers holding an `Arc<HistoryData>`
//!   never observe a partially applied `Now`.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use epitrack::{CacheView, Tracker};
//! use epitrack_upstream::UpstreamConnector;
//!
//! let upstream = Arc::new(UpstreamConnector::builder().build()?);
//! let tracker = Arc::new(Tracker::builder().with_connector(upstream).build()?);
//! let handle = tracker.spawn_periodic();
//!
//! match tracker.serve() {
//!     CacheView::Ready(history) => println!("{}", serde_json::to_string(&*history)?),
//!     CacheView::NotReady => println!("NOT_READY"),
//! }
//! handle.stop().await;
//! ```
//!
//! See `epitrack/examples/` for a runnable demonstration.
#![warn(missing_docs)]

/// Time source abstraction.
pub mod clock;
pub(crate) mod core;
mod scheduler;
mod slot;

pub use clock::{Clock, SystemClock};
pub use core::{CacheView, Tracker, TrackerBuilder};
pub use scheduler::RefreshHandle;

// Re-export core types for convenience
pub use epitrack_core::{
    CacheState, ConnectorKey, Counts, DataSource, DateKey, EpiError, FeedConnector, HistoryData,
    HistorySource, RefreshConfig, RefreshOutcome, RefreshReport, RegionRecord, SnapshotItem,
    SnapshotLayout, SnapshotSource, SourceStatus, TrackerStatus, WORLD_KEY,
};

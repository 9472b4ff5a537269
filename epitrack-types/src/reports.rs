//! Report envelopes produced by the refresh cache.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EpiError;

/// Freshness of one cached source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheState {
    /// Never fetched successfully.
    Empty,
    /// Populated and younger than its TTL.
    Fresh,
    /// Populated and at least as old as its TTL; the next trigger refreshes it.
    Stale,
}

/// What one refresh pass did for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshOutcome {
    /// Fetched and published a new value.
    Refreshed,
    /// Skipped: the cached value is still fresh.
    Fresh,
    /// Skipped: another pass for this source is running.
    InFlight,
    /// The pass failed; the previous value stays published.
    Failed(EpiError),
}

impl RefreshOutcome {
    /// Returns `true` when a new value was published.
    #[must_use]
    pub const fn is_refreshed(&self) -> bool {
        matches!(self, Self::Refreshed)
    }

    /// The failure, if the pass failed.
    #[must_use]
    pub const fn error(&self) -> Option<&EpiError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of one `refresh()` call: the history pass always runs (or is
/// skipped) before the snapshot pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshReport {
    /// Outcome of the historical aggregation pass.
    pub history: RefreshOutcome,
    /// Outcome of the snapshot fetch and merge pass.
    pub snapshot: RefreshOutcome,
}

/// Point-in-time view of one cached source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStatus {
    /// Freshness relative to the source's TTL.
    pub state: CacheState,
    /// Whether a pass for this source is currently running.
    pub in_flight: bool,
    /// Time since the last successful fetch.
    pub age: Option<Duration>,
    /// Error of the most recent pass, cleared by the next success.
    pub last_error: Option<EpiError>,
}

/// Status of both cached sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStatus {
    /// Historical dataset.
    pub history: SourceStatus,
    /// Snapshot dataset.
    pub snapshot: SourceStatus,
}

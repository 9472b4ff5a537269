//! Configuration types for the refresh cache and the snapshot extractor.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EpiError;

/// Timing and window configuration of the refresh cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Age after which the historical data is eligible for a rebuild.
    /// The upstream series updates at most daily, so this is measured in hours.
    pub history_ttl: Duration,
    /// Age after which the snapshot is eligible for a re-fetch.
    pub snapshot_ttl: Duration,
    /// Period of the scheduled refresh trigger.
    pub refresh_interval: Duration,
    /// Number of trailing calendar-date columns kept from the feeds.
    pub window_days: usize,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            history_ttl: Duration::from_secs(2 * 60 * 60),
            snapshot_ttl: Duration::from_secs(5 * 60),
            refresh_interval: Duration::from_secs(5 * 60),
            window_days: 27,
        }
    }
}

impl RefreshConfig {
    /// Check that every duration and the window are non-zero.
    ///
    /// # Errors
    /// Returns `EpiError::InvalidArg` naming the first offending field.
    pub fn validate(&self) -> Result<(), EpiError> {
        if self.history_ttl.is_zero() {
            return Err(EpiError::invalid("history_ttl must be non-zero"));
        }
        if self.snapshot_ttl.is_zero() {
            return Err(EpiError::invalid("snapshot_ttl must be non-zero"));
        }
        if self.refresh_interval.is_zero() {
            return Err(EpiError::invalid("refresh_interval must be non-zero"));
        }
        if self.window_days == 0 {
            return Err(EpiError::invalid("window_days must be at least 1"));
        }
        Ok(())
    }
}

/// Positional layout of the snapshot table.
///
/// The offsets are a contract with the upstream page layout; when the page
/// changes, only these numbers need to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLayout {
    /// Leading rows discarded (table header).
    pub skip_rows: usize,
    /// Leading fields of each row discarded before the offsets apply.
    pub skip_fields: usize,
    /// Offset of the country name.
    pub country: usize,
    /// Offset of the confirmed count.
    pub confirmed: usize,
    /// Offset of the deaths count.
    pub deaths: usize,
    /// Offset of the recovered count.
    pub recovered: usize,
}

impl Default for SnapshotLayout {
    fn default() -> Self {
        Self {
            skip_rows: 1,
            skip_fields: 1,
            country: 1,
            confirmed: 2,
            deaths: 4,
            recovered: 6,
        }
    }
}

//! epitrack-core
//!
//! The aggregation engine behind epitrack.
//!
//! - `normalize`: canonical country names shared by both upstream sources.
//! - `sanitize`: locale-formatted count parsing that never fails.
//! - `feed` / `snapshot`: parsing of the historical CSV feeds and of the
//!   snapshot table rows into their typed shapes.
//! - `timeseries`: the state → country → world rollup and the `Now` overlay.
//! - `connector`: the `FeedConnector` trait and its source role traits.
//! - `flight`: at-most-one-in-flight guard used by the refresh cache.
#![warn(missing_docs)]

/// Connector role traits and the primary `FeedConnector` interface.
pub mod connector;
/// Parsing of the historical feed text.
pub mod feed;
/// In-flight guard for refresh passes.
pub mod flight;
/// Canonical region names.
pub mod normalize;
/// Count sanitizing.
pub mod sanitize;
/// Snapshot row extraction.
pub mod snapshot;
/// Rollup and overlay over per-region time series.
pub mod timeseries;
pub mod types;

pub use connector::{FeedConnector, HistorySource, SnapshotSource};
pub use feed::parse_feed_csv;
pub use flight::{FlightFlag, FlightGuard};
pub use normalize::normalize_country;
pub use sanitize::sanitize_count;
pub use snapshot::parse_snapshot_rows;
pub use timeseries::aggregate::{MAINLAND_SUFFIX, aggregate_history};
pub use timeseries::merge::{MergeSummary, merge_snapshot};
pub use types::*;

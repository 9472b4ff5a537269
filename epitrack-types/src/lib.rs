//! Epitrack-specific data transfer objects and configuration primitives.
//!
//! - `Counts`, `DateKey`, `RegionRecord` and `HistoryData` model the merged
//!   state → country → world rollup served to callers.
//! - `FeedTable`/`HistoricalFeeds` and `SnapshotItem` are the parsed shapes of
//!   the two upstream sources.
//! - `RefreshConfig` and `SnapshotLayout` configure the refresh cache and the
//!   snapshot table extraction.
#![warn(missing_docs)]

mod config;
mod counts;
mod date;
mod error;
mod feed;
mod history;
mod region;
mod reports;
mod snapshot;
mod source;

pub use config::{RefreshConfig, SnapshotLayout};
pub use counts::Counts;
pub use date::{DateKey, NOW_LABEL};
pub use error::EpiError;
pub use feed::{FeedRow, FeedTable, HistoricalFeeds, METADATA_COLUMNS};
pub use history::{HistoryData, WORLD_KEY};
pub use region::RegionRecord;
pub use reports::{CacheState, RefreshOutcome, RefreshReport, SourceStatus, TrackerStatus};
pub use snapshot::SnapshotItem;
pub use source::{ConnectorKey, DataSource};

//! Re-export of the shared data model from `epitrack-types`.
// Consolidated re-exports so downstream crates can depend on `epitrack-core` only

pub use epitrack_types::{
    CacheState, ConnectorKey, Counts, DataSource, DateKey, EpiError, FeedRow, FeedTable,
    HistoricalFeeds, HistoryData, METADATA_COLUMNS, NOW_LABEL, RefreshConfig, RefreshOutcome,
    RefreshReport, RegionRecord, SnapshotItem, SnapshotLayout, SourceStatus, TrackerStatus,
    WORLD_KEY,
};

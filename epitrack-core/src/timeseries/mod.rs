//! Time-series utilities over the per-region, per-date record set.
//!
//! - `aggregate`: build the state → country → world rollup from the feeds
//! - `merge`: overlay a same-day snapshot as the synthetic `Now` date
/// Rollup of the three historical feeds.
pub mod aggregate;
/// Snapshot overlay onto aggregated history.
pub mod merge;

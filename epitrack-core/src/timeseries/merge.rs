use epitrack_types::{DateKey, HistoryData, SnapshotItem, WORLD_KEY};

use crate::normalize::normalize_country;

/// What a snapshot merge touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Items whose country matched a region (or the world total).
    pub matched: usize,
    /// Normalized names of items with no matching region, in input order.
    pub dropped: Vec<String>,
}

/// Overlay a snapshot onto `history` as its `Now` date.
///
/// Each item's country is normalized and, when a region with that key exists,
/// the region's `Now` counts are replaced by the item's counts. An item named
/// `World` replaces the world total's `Now`. Items with no match are dropped;
/// no region is ever created here. Merging the same snapshot twice leaves the
/// same values.
pub fn merge_snapshot(history: &mut HistoryData, items: &[SnapshotItem]) -> MergeSummary {
    let mut summary = MergeSummary::default();

    if !history.date_list.contains(&DateKey::Now) {
        history.date_list.push(DateKey::Now);
    }

    for item in items {
        let key = normalize_country(item.country.trim());
        let counts = item.counts();
        if key == WORLD_KEY {
            history.world.insert(DateKey::Now, counts);
            summary.matched += 1;
        } else if let Some(record) = history.region_mut(key) {
            record.counts.insert(DateKey::Now, counts);
            summary.matched += 1;
        } else {
            summary.dropped.push(key.to_string());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        matched = summary.matched,
        dropped = summary.dropped.len(),
        "merged snapshot into history"
    );

    summary
}

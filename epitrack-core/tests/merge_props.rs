use epitrack_core::{
    Counts, DateKey, HistoryData, RegionRecord, SnapshotItem, WORLD_KEY, merge_snapshot,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

const NAMES: [&str; 5] = ["USA", "Italy", "China", "Hubei", "Atlantis"];

fn day() -> DateKey {
    DateKey::parse_label("3/20/20").unwrap()
}

fn base_history() -> HistoryData {
    let mut regions = BTreeMap::new();
    for (name, is_state, parent) in [
        ("USA", false, "USA"),
        ("Italy", false, "Italy"),
        ("China", false, "China"),
        ("Hubei", true, "China"),
    ] {
        let mut record = RegionRecord::country(parent);
        record.is_state = is_state;
        record.counts.insert(day(), Counts::new(10, 1, 2));
        regions.insert(name.to_string(), record);
    }
    HistoryData {
        date_list: vec![day(), DateKey::Now],
        world: BTreeMap::from([(day(), Counts::new(40, 4, 8))]),
        regions,
    }
}

fn arb_items() -> impl Strategy<Value = Vec<SnapshotItem>> {
    proptest::collection::vec(
        (0..NAMES.len(), 0u64..1_000_000, 0u64..10_000, 0u64..100_000),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(i, c, d, r)| SnapshotItem::new(NAMES[i], c, d, r))
            .collect()
    })
}

proptest! {
    #[test]
    fn merge_is_idempotent(items in arb_items()) {
        let mut once = base_history();
        merge_snapshot(&mut once, &items);
        let mut twice = once.clone();
        merge_snapshot(&mut twice, &items);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_never_creates_regions_or_touches_past_days(items in arb_items()) {
        let before = base_history();
        let mut after = before.clone();
        let summary = merge_snapshot(&mut after, &items);

        prop_assert_eq!(summary.matched + summary.dropped.len(), items.len());
        prop_assert_eq!(
            before.regions.keys().collect::<Vec<_>>(),
            after.regions.keys().collect::<Vec<_>>()
        );
        for (key, record) in &after.regions {
            prop_assert_eq!(record.at(day()), before.regions[key].at(day()));
        }
        prop_assert_eq!(after.world_at(day()), before.world_at(day()));
    }

    #[test]
    fn last_item_for_a_region_wins(items in arb_items()) {
        let mut history = base_history();
        merge_snapshot(&mut history, &items);
        for name in &NAMES[..4] {
            let last = items.iter().rev().find(|i| i.country == *name);
            let now = history.region(name).and_then(RegionRecord::now);
            prop_assert_eq!(now, last.map(SnapshotItem::counts));
        }
    }
}

#[test]
fn aliased_and_world_items_are_matched() {
    let mut history = base_history();
    let summary = merge_snapshot(
        &mut history,
        &[
            SnapshotItem::new("US", 100, 5, 7),
            SnapshotItem::new(WORLD_KEY, 1000, 50, 70),
            SnapshotItem::new("Atlantis", 1, 1, 1),
        ],
    );
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.dropped, vec!["Atlantis".to_string()]);
    assert_eq!(history.region("USA").unwrap().now(), Some(Counts::new(100, 5, 7)));
    assert_eq!(history.world_at(DateKey::Now), Some(Counts::new(1000, 50, 70)));
    assert!(history.region("Atlantis").is_none());
}

#[test]
fn missing_now_is_appended_once() {
    let mut history = base_history();
    history.date_list.pop();
    merge_snapshot(&mut history, &[]);
    merge_snapshot(&mut history, &[]);
    assert_eq!(history.date_list, vec![day(), DateKey::Now]);
}

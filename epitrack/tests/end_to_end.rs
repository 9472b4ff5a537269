use std::sync::Arc;

use epitrack::{CacheView, Counts, DateKey, Tracker, WORLD_KEY};
use epitrack_mock::{MockConnector, fixture_dates};
use serde_json::Value;

#[tokio::test]
async fn fixture_connector_serves_merged_history() {
    let tracker = Tracker::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let report = tracker.refresh().await;
    assert!(report.history.is_refreshed());
    assert!(report.snapshot.is_refreshed());

    let CacheView::Ready(history) = tracker.current() else {
        panic!("history should be ready after a successful refresh");
    };

    let last = DateKey::parse_label("3/20/20").unwrap();
    let countries: Counts = history.countries().filter_map(|(_, r)| r.at(last)).sum();
    assert_eq!(history.world_at(last), Some(countries));

    let json = serde_json::to_value(&*history).unwrap();
    let dates: Vec<&str> = json["dateList"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    let mut expected = fixture_dates();
    expected.push("Now");
    assert_eq!(dates, expected);

    assert_eq!(json[WORLD_KEY]["Now"]["confirmed"], 275_469);
    assert_eq!(json["China"]["isState"], false);
    assert_eq!(json["Hubei"]["country"], "China");
    assert_eq!(json["Hubei"]["isState"], true);
    assert_eq!(json["China"]["3/20/20"]["confirmed"], 67_800 + 504);
    assert_eq!(json["China"]["Now"]["deaths"], 3_255);
    assert!(json.get("Diamond Princess").is_none());
    assert!(json["Hubei"].get("Now").is_none());
}

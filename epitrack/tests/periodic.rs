mod helpers;

use std::time::Duration;

use epitrack::Tracker;
use epitrack_mock::{DynamicMockConnector, MockBehavior, fixture_feeds, fixture_snapshot};
use helpers::RacingClock;

#[tokio::test(start_paused = true)]
async fn periodic_loop_ticks_until_stopped() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_history_behavior(MockBehavior::Return(fixture_feeds().unwrap()))
        .await;
    ctl.set_snapshot_behavior(MockBehavior::Return(fixture_snapshot()))
        .await;
    let tracker = std::sync::Arc::new(
        Tracker::builder()
            .with_connector(mock)
            .refresh_interval(Duration::from_secs(60))
            .clock(RacingClock::new())
            .build()
            .unwrap(),
    );

    let handle = tracker.spawn_periodic();
    // first tick fires immediately, then one per interval
    tokio::time::sleep(Duration::from_secs(150)).await;
    assert!(tracker.current().is_ready());
    assert_eq!(ctl.snapshot_calls(), 3);

    handle.stop().await;
    let calls = ctl.snapshot_calls();
    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(ctl.snapshot_calls(), calls);
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_ends_loop() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_history_behavior(MockBehavior::Return(fixture_feeds().unwrap()))
        .await;
    ctl.set_snapshot_behavior(MockBehavior::Return(fixture_snapshot()))
        .await;
    let tracker = std::sync::Arc::new(
        Tracker::builder()
            .with_connector(mock)
            .refresh_interval(Duration::from_secs(60))
            .clock(RacingClock::new())
            .build()
            .unwrap(),
    );

    let handle = tracker.spawn_periodic();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!handle.is_finished());
    drop(handle);

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(ctl.history_calls(), 1);
}

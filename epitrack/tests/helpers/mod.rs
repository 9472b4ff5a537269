#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use epitrack::{Clock, Tracker};
use epitrack_mock::{DynamicMockConnector, DynamicMockController};

/// Clock that only moves when the test says so.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
    skew_once: Mutex<Option<Duration>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
            skew_once: Mutex::new(None),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }

    /// Only the next reading is `by` ahead; later readings are back on time.
    pub fn skew_next_reading(&self, by: Duration) {
        *self.skew_once.lock().unwrap() = Some(by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let skew = self.skew_once.lock().unwrap().take().unwrap_or_default();
        self.base + *self.offset.lock().unwrap() + skew
    }
}

/// Clock that jumps a day on every reading, so every source is always stale.
pub struct RacingClock {
    base: Instant,
    ticks: Mutex<u32>,
}

impl RacingClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            ticks: Mutex::new(0),
        })
    }
}

impl Clock for RacingClock {
    fn now(&self) -> Instant {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        self.base + Duration::from_secs(86_400) * *ticks
    }
}

pub const HISTORY_TTL: Duration = Duration::from_secs(2 * 60 * 60);
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(5 * 60);

pub fn tracker_with(clock: Arc<dyn Clock>) -> (Arc<Tracker>, DynamicMockController) {
    let (mock, controller) = DynamicMockConnector::new_with_controller("dyn");
    let tracker = Tracker::builder()
        .with_connector(mock)
        .history_ttl(HISTORY_TTL)
        .snapshot_ttl(SNAPSHOT_TTL)
        .clock(clock)
        .build()
        .expect("valid tracker");
    (Arc::new(tracker), controller)
}

pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..500 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("condition not reached in time");
}

use std::sync::Arc;
use std::time::Duration;

use epitrack::{CacheView, FeedConnector, Tracker};

fn connector() -> Result<Arc<dyn FeedConnector>, epitrack::EpiError> {
    if std::env::var("EPITRACK_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(epitrack_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(epitrack_upstream::UpstreamConnector::builder().build()?))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build the tracker over the live feeds (or the fixtures in CI).
    let tracker = Arc::new(Tracker::builder().with_connector(connector()?).build()?);

    // 2. The first read finds an empty cache and kicks off a refresh.
    if let CacheView::NotReady = tracker.serve() {
        println!("NOT_READY");
    }

    // 3. Keep refreshing in the background and poll until history is up.
    let handle = tracker.spawn_periodic();
    let history = loop {
        if let CacheView::Ready(history) = tracker.serve() {
            break history;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    };

    let days = history.date_list.len();
    println!("{} regions over {days} dates", history.regions.len());
    if let Some(now) = history.world_at(epitrack::DateKey::Now) {
        println!("World now: {now:?}");
    }
    println!("{:#?}", tracker.status());

    handle.stop().await;
    Ok(())
}

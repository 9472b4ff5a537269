use epitrack_core::{EpiError, FeedConnector};
use epitrack_upstream::UpstreamConnector;
use httpmock::prelude::*;

const CSV: &str = "Province/State,Country/Region,Lat,Long,3/1/20\n,Italy,43,12,\"1,000\"\n";

#[tokio::test]
async fn fetches_feeds_over_http() {
    let server = MockServer::start_async().await;
    let mut mocks = Vec::new();
    for metric in ["Confirmed", "Deaths", "Recovered"] {
        let path = format!("/series-{metric}.csv");
        mocks.push(
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).body(CSV);
                })
                .await,
        );
    }

    let conn = UpstreamConnector::builder()
        .history_base(server.url("/series"))
        .build()
        .unwrap();
    let feeds = conn.as_history_source().unwrap().fetch_history().await.unwrap();

    for m in &mocks {
        m.assert_async().await;
    }
    assert_eq!(feeds.confirmed.rows.len(), 1);
    assert_eq!(feeds.recovered.rows[0].value(0), "1,000");
}

#[tokio::test]
async fn non_success_status_is_source_unavailable() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/today");
            then.status(502).body("bad gateway");
        })
        .await;

    let conn = UpstreamConnector::builder()
        .snapshot_url(server.url("/today"))
        .build()
        .unwrap();
    let err = conn.as_snapshot_source().unwrap().fetch_snapshot().await.unwrap_err();

    page.assert_async().await;
    match err {
        EpiError::SourceUnavailable { msg, .. } => assert!(msg.contains("502")),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

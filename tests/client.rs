mod common;

use std::net::TcpListener;

use httpmock::Method::GET;
use serde_json::json;
use url::Url;

use alphavantage_rs::AvClient;
use common::{client_for, daily_body, setup_server};

#[tokio::test]
async fn transport_failure_is_absorbed_as_absent() {
    // Bind to an ephemeral port and release it so the connect is refused.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = AvClient::builder()
        .api_key("demo")
        .base_url(Url::parse(&format!("http://{addr}/")).unwrap())
        .build()
        .unwrap();

    let result = client.time_series_daily("IBM", None).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn non_json_body_is_absorbed_as_absent() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body("<html>service unavailable</html>");
    });

    let result = client_for(&server).market_status().await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn archive_writes_the_raw_body_once_per_call() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(daily_body("IBM"));
    });

    let dir = tempfile::tempdir().unwrap();
    let client = AvClient::builder()
        .api_key("demo")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .archive_dir(dir.path())
        .build()
        .unwrap();

    client.time_series_daily("IBM", None).await.unwrap().unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.contains("TIME_SERIES_DAILY&symbol=IBM"));
    assert!(name.ends_with(".json"));

    let body: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(entries[0].path()).unwrap()).unwrap();
    assert!(body.get("Time Series (Daily)").is_some());
}

#[tokio::test]
async fn archive_write_failure_does_not_fail_the_call() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(daily_body("IBM"));
    });

    // A plain file where the archive directory should be: every write fails.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let client = AvClient::builder()
        .api_key("demo")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .archive_dir(blocker.path())
        .build()
        .unwrap();

    let candles = client.time_series_daily("IBM", None).await.unwrap();
    assert!(candles.is_some());
}

#[tokio::test]
async fn soft_errors_are_not_archived_differently() {
    // The archive captures the raw body before classification, soft errors
    // included.
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(json!({ "Information": "rate limited" }));
    });

    let dir = tempfile::tempdir().unwrap();
    let client = AvClient::builder()
        .api_key("demo")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .archive_dir(dir.path())
        .build()
        .unwrap();

    let result = client.market_status().await.unwrap();
    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn a_shared_client_serves_concurrent_calls() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(daily_body("IBM"));
    });

    let client = client_for(&server);
    let (a, b, c) = tokio::join!(
        client.time_series_daily("IBM", None),
        client.time_series_daily("IBM", None),
        client.time_series_daily("IBM", None),
    );
    assert!(a.unwrap().is_some());
    assert!(b.unwrap().is_some());
    assert!(c.unwrap().is_some());
}

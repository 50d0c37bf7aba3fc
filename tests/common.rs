#![allow(dead_code)]

use httpmock::MockServer;
use serde_json::{Map, Value, json};
use url::Url;

use alphavantage_rs::AvClient;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server, keyed with the vendor's demo key.
pub fn client_for(server: &MockServer) -> AvClient {
    AvClient::builder()
        .api_key("demo")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn candle_fields(open: &str, high: &str, low: &str, close: &str, volume: Option<&str>) -> Value {
    let mut fields = Map::new();
    fields.insert("1. open".into(), json!(open));
    fields.insert("2. high".into(), json!(high));
    fields.insert("3. low".into(), json!(low));
    fields.insert("4. close".into(), json!(close));
    if let Some(v) = volume {
        fields.insert("5. volume".into(), json!(v));
    }
    Value::Object(fields)
}

/// A small daily envelope with the rows deliberately out of order.
pub fn daily_body(symbol: &str) -> Value {
    json!({
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": symbol,
            "3. Last Refreshed": "2024-11-29",
            "4. Output Size": "Compact",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2024-11-29": candle_fields("224.91", "227.18", "224.85", "227.04", Some("2892631")),
            "2024-11-26": candle_fields("225.00", "228.36", "224.54", "226.92", Some("4449655")),
            "2024-11-27": candle_fields("226.00", "227.94", "225.06", "226.40", Some("2911491")),
        }
    })
}

pub fn one_key_body(key: &str, message: &str) -> Value {
    json!({ key: message })
}

mod common;

use chrono::NaiveDate;
use httpmock::Method::GET;
use serde_json::{Value, json};

use alphavantage_rs::AvError;
use common::{client_for, one_key_body, setup_server};

fn contract_record(id: &str, contract_type: &str, strike: &str) -> Value {
    json!({
        "contractID": id,
        "symbol": "IBM",
        "expiration": "2024-12-20",
        "strike": strike,
        "type": contract_type,
        "last": "8.30",
        "mark": "8.45",
        "bid": "8.20",
        "bid_size": "12",
        "ask": "8.70",
        "ask_size": "9",
        "volume": "151",
        "open_interest": "1377",
        "date": "2024-11-29",
        "implied_volatility": "0.23193",
        "delta": "0.62071",
        "gamma": "0.02502",
        "theta": "-0.05440",
        "vega": "0.28860",
        "rho": "0.09307",
    })
}

fn chain_body(records: Vec<Value>) -> Value {
    json!({
        "endpoint": "Historical Options",
        "message": "success",
        "data": records,
    })
}

#[tokio::test]
async fn historical_chain_is_flattened_into_contracts() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "HISTORICAL_OPTIONS")
            .query_param("symbol", "IBM")
            .query_param("date", "2024-11-29");
        then.status(200).json_body(chain_body(vec![
            contract_record("IBM241220C00220000", "call", "220.00"),
            contract_record("IBM241220P00220000", "put", "220.00"),
        ]));
    });

    let contracts = client_for(&server)
        .historical_options("IBM", Some("2024-11-29"))
        .await
        .unwrap()
        .expect("successful response should yield contracts");

    mock.assert();
    assert_eq!(contracts.len(), 2);

    let call = &contracts[0];
    assert_eq!(call.contract_id, "IBM241220C00220000");
    assert!(call.is_call);
    assert!(!contracts[1].is_call);
    assert_eq!(call.date, NaiveDate::from_ymd_opt(2024, 11, 29).unwrap());
    assert_eq!(call.expiration, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
    assert_eq!(call.strike, 220.0_f32);
    assert_eq!(call.open_interest, 1377_i32);
    assert_eq!(call.theta, -0.0544_f32);
}

#[tokio::test]
async fn date_is_omitted_for_the_previous_session_chain() {
    let server = setup_server();
    let dated = server.mock(|when, then| {
        when.method(GET).path("/query").query_param("date", "2024-11-29");
        then.status(200).json_body(chain_body(vec![]));
    });
    let result = client_for(&server)
        .historical_options("IBM", None)
        .await
        .unwrap();

    // No mock without `date` exists, so the call falls through unmatched.
    assert!(result.is_none());
    dated.assert_hits(0);
}

#[tokio::test]
async fn pre_2008_dates_surface_the_vendor_rejection_as_absent() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(one_key_body(
            "Error Message",
            "No data available for HISTORICAL_OPTIONS before 2008-01-01.",
        ));
    });

    let result = client_for(&server)
        .historical_options("IBM", Some("2007-12-31"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn malformed_contract_record_is_a_hard_error() {
    let mut record = contract_record("IBM241220C00220000", "call", "220.00");
    record["volume"] = json!("lots");

    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).json_body(chain_body(vec![record]));
    });

    let err = client_for(&server)
        .historical_options("IBM", None)
        .await
        .unwrap_err();
    assert!(matches!(err, AvError::Data(_)));
}

#[tokio::test]
async fn realtime_options_pass_the_payload_through() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "REALTIME_OPTIONS")
            .query_param("symbol", "IBM")
            .query_param("contract", "IBM241220C00220000");
        then.status(200).json_body(json!({
            "endpoint": "Realtime Options",
            "data": [],
        }));
    });

    let value = client_for(&server)
        .realtime_options("IBM", Some("IBM241220C00220000"))
        .await
        .unwrap()
        .unwrap();
    mock.assert();
    assert_eq!(value["endpoint"], "Realtime Options");
}

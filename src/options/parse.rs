//! Flattening of the `HISTORICAL_OPTIONS` record list into contract rows.

use serde_json::Value;

use crate::core::AvError;
use crate::core::num::{parse_date, parse_f32, parse_i32};

use super::model::OptionContract;
use super::wire::ContractRow;

pub(crate) fn parse_contracts(data: Value) -> Result<Vec<OptionContract>, AvError> {
    let rows: Vec<ContractRow> = serde_json::from_value(data)
        .map_err(|e| AvError::Data(format!("options records: {e}")))?;
    rows.into_iter().map(contract_from_row).collect()
}

fn contract_from_row(row: ContractRow) -> Result<OptionContract, AvError> {
    let what = &row.contract_id;
    let f = |raw: &str, col: &str| parse_f32(raw, &format!("'{col}' of {what}"));
    let i = |raw: &str, col: &str| parse_i32(raw, &format!("'{col}' of {what}"));
    Ok(OptionContract {
        date: parse_date(&row.date, what)?,
        expiration: parse_date(&row.expiration, what)?,
        is_call: row.contract_type == "call",
        strike: f(&row.strike, "strike")?,
        mark: f(&row.mark, "mark")?,
        bid: f(&row.bid, "bid")?,
        ask: f(&row.ask, "ask")?,
        implied_volatility: f(&row.implied_volatility, "implied_volatility")?,
        delta: f(&row.delta, "delta")?,
        gamma: f(&row.gamma, "gamma")?,
        theta: f(&row.theta, "theta")?,
        vega: f(&row.vega, "vega")?,
        rho: f(&row.rho, "rho")?,
        bid_size: i(&row.bid_size, "bid_size")?,
        ask_size: i(&row.ask_size, "ask_size")?,
        volume: i(&row.volume, "volume")?,
        open_interest: i(&row.open_interest, "open_interest")?,
        last: f(&row.last, "last")?,
        contract_id: row.contract_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(contract_type: &str) -> Value {
        json!({
            "contractID": "IBM241220C00220000",
            "symbol": "IBM",
            "expiration": "2024-12-20",
            "strike": "220.00",
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

    #[test]
    fn call_flag_is_derived_and_type_dropped() {
        let calls = parse_contracts(json!([record("call")])).unwrap();
        let puts = parse_contracts(json!([record("put")])).unwrap();
        assert!(calls[0].is_call);
        assert!(!puts[0].is_call);
        assert_eq!(calls[0].contract_id, "IBM241220C00220000");
        assert_eq!(calls[0].bid_size, 12);
        assert_eq!(calls[0].strike, 220.0);
    }

    #[test]
    fn symbol_column_is_not_carried() {
        let rows = parse_contracts(json!([record("call")])).unwrap();
        let rendered = serde_json::to_string(&rows[0]).unwrap();
        assert!(!rendered.contains("\"symbol\""));
    }

    #[test]
    fn missing_column_is_a_hard_error() {
        let mut rec = record("call");
        rec.as_object_mut().unwrap().remove("delta");
        assert!(parse_contracts(json!([rec])).is_err());
    }

    #[test]
    fn unparsable_size_is_a_hard_error() {
        let mut rec = record("put");
        rec["bid_size"] = json!("many");
        let err = parse_contracts(json!([rec])).unwrap_err();
        assert!(err.to_string().contains("bid_size"));
    }
}

use serde::Serialize;
use serde_json::Value;

use crate::core::AvError;
use crate::core::num::parse_f32;

/// Realtime bid/ask for a currency pair, physical or digital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeRate {
    pub bid: f32,
    pub ask: f32,
}

/// Pulls bid and ask out of the `CURRENCY_EXCHANGE_RATE` payload. The
/// remaining fields (names, refresh time) are metadata and dropped.
pub(super) fn parse_exchange_rate(data: &Value) -> Result<ExchangeRate, AvError> {
    let fields = data
        .as_object()
        .ok_or_else(|| AvError::Data("exchange rate payload is not an object".into()))?;
    let price = |key: &str| -> Result<f32, AvError> {
        let raw = fields
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| AvError::Data(format!("missing '{key}' in exchange rate")))?;
        parse_f32(raw, key)
    };
    Ok(ExchangeRate {
        bid: price("8. Bid Price")?,
        ask: price("9. Ask Price")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bid_and_ask_are_extracted() {
        let data = json!({
            "1. From_Currency Code": "USD",
            "3. To_Currency Code": "JPY",
            "5. Exchange Rate": "151.02000000",
            "6. Last Refreshed": "2024-11-29 21:42:48",
            "8. Bid Price": "151.01500000",
            "9. Ask Price": "151.02500000",
        });
        let rate = parse_exchange_rate(&data).unwrap();
        assert_eq!(rate.bid, 151.015);
        assert_eq!(rate.ask, 151.025);
    }

    #[test]
    fn missing_price_is_a_hard_error() {
        let data = json!({ "8. Bid Price": "1.0" });
        let err = parse_exchange_rate(&data).unwrap_err();
        assert!(err.to_string().contains("9. Ask Price"));
    }
}

//! Conversion of a raw series payload into ordered, typed candles.
//!
//! The payload is a map of timestamp string to a map of labeled
//! numeric-string fields (`"1. open"`, `"2. high"`, ...). Labels are
//! renamed to their canonical columns, values cast to fixed widths, and
//! rows sorted by ascending timestamp; vendor order is not trusted.

use serde_json::Value;

use crate::core::AvError;
use crate::core::num::{parse_f32, parse_i32};

use super::model::{Candle, Timescale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Open,
    High,
    Low,
    Close,
    Volume,
}

/// Canonical column for a vendor label.
///
/// Accepts the numbered form (`"2. high"`) and the already-canonical form
/// (`"High"`), so renaming an already-normalized label is a no-op. Labels
/// outside the candle contract (adjusted close, market cap, ...) map to
/// `None` and are ignored.
fn canonical_column(label: &str) -> Option<Column> {
    let name = label
        .split_once(". ")
        .map_or(label, |(_, rest)| rest)
        .trim();
    match name.to_ascii_lowercase().as_str() {
        "open" => Some(Column::Open),
        "high" => Some(Column::High),
        "low" => Some(Column::Low),
        "close" => Some(Column::Close),
        "volume" => Some(Column::Volume),
        _ => None,
    }
}

pub(crate) fn parse_candles(data: &Value, scale: Timescale) -> Result<Vec<Candle>, AvError> {
    let rows = data
        .as_object()
        .ok_or_else(|| AvError::Data("series payload is not an object".into()))?;

    let mut candles = Vec::with_capacity(rows.len());
    for (raw_ts, fields) in rows {
        let ts = scale.parse_ts(raw_ts)?;
        let fields = fields.as_object().ok_or_else(|| {
            AvError::Data(format!("row at '{raw_ts}' is not a field object"))
        })?;

        let mut open = None;
        let mut high = None;
        let mut low = None;
        let mut close = None;
        let mut volume = None;
        for (label, value) in fields {
            let Some(column) = canonical_column(label) else {
                continue;
            };
            let raw = value.as_str().ok_or_else(|| {
                AvError::Data(format!("field '{label}' at '{raw_ts}' is not a string"))
            })?;
            let what = format!("'{label}' at '{raw_ts}'");
            match column {
                Column::Open => open = Some(parse_f32(raw, &what)?),
                Column::High => high = Some(parse_f32(raw, &what)?),
                Column::Low => low = Some(parse_f32(raw, &what)?),
                Column::Close => close = Some(parse_f32(raw, &what)?),
                Column::Volume => volume = Some(parse_i32(raw, &what)?),
            }
        }

        candles.push(Candle {
            ts,
            open: require(open, "open", raw_ts)?,
            high: require(high, "high", raw_ts)?,
            low: require(low, "low", raw_ts)?,
            close: require(close, "close", raw_ts)?,
            volume,
        });
    }

    // One table, one field set: volume everywhere or nowhere.
    let with_volume = candles.iter().filter(|c| c.volume.is_some()).count();
    if with_volume != 0 && with_volume != candles.len() {
        return Err(AvError::Data(
            "volume column present on some rows but not all".into(),
        ));
    }

    candles.sort_by_key(|c| c.ts);
    Ok(candles)
}

fn require(value: Option<f32>, column: &str, raw_ts: &str) -> Result<f32, AvError> {
    value.ok_or_else(|| AvError::Data(format!("missing '{column}' column at '{raw_ts}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renaming_is_idempotent() {
        assert_eq!(canonical_column("1. open"), canonical_column("Open"));
        assert_eq!(canonical_column("5. volume"), canonical_column("Volume"));
        assert_eq!(canonical_column("2. high"), Some(Column::High));
    }

    #[test]
    fn labels_outside_the_contract_are_ignored() {
        assert_eq!(canonical_column("5. adjusted close"), None);
        assert_eq!(canonical_column("6. market cap (USD)"), None);
        assert_eq!(canonical_column("7. dividend amount"), None);
    }

    #[test]
    fn rows_are_sorted_ascending_regardless_of_vendor_order() {
        let data = json!({
            "2024-11-29": { "1. open": "2.0", "2. high": "3.0", "3. low": "1.0", "4. close": "2.5", "5. volume": "100" },
            "2024-11-27": { "1. open": "1.0", "2. high": "2.0", "3. low": "0.5", "4. close": "1.5", "5. volume": "200" },
            "2024-11-28": { "1. open": "1.5", "2. high": "2.5", "3. low": "1.0", "4. close": "2.0", "5. volume": "300" },
        });
        let candles = parse_candles(&data, Timescale::Day).unwrap();
        let days: Vec<u32> = candles
            .iter()
            .map(|c| chrono::Datelike::day(&c.ts.date()))
            .collect();
        assert_eq!(days, [27, 28, 29]);
        assert!(candles.windows(2).all(|w| w[0].ts < w[1].ts));
    }

    #[test]
    fn missing_column_is_a_hard_error() {
        let data = json!({
            "2024-11-29": { "1. open": "2.0", "2. high": "3.0", "3. low": "1.0" },
        });
        let err = parse_candles(&data, Timescale::Day).unwrap_err();
        assert!(err.to_string().contains("close"));
    }

    #[test]
    fn unparsable_number_is_a_hard_error() {
        let data = json!({
            "2024-11-29": { "1. open": "x", "2. high": "3.0", "3. low": "1.0", "4. close": "2.5" },
        });
        assert!(parse_candles(&data, Timescale::Day).is_err());
    }

    #[test]
    fn unparsable_timestamp_is_a_hard_error() {
        let data = json!({
            "yesterday": { "1. open": "2.0", "2. high": "3.0", "3. low": "1.0", "4. close": "2.5" },
        });
        assert!(parse_candles(&data, Timescale::Day).is_err());
    }

    #[test]
    fn mixed_volume_presence_is_rejected() {
        let data = json!({
            "2024-11-28": { "1. open": "1.0", "2. high": "2.0", "3. low": "0.5", "4. close": "1.5", "5. volume": "200" },
            "2024-11-29": { "1. open": "2.0", "2. high": "3.0", "3. low": "1.0", "4. close": "2.5" },
        });
        assert!(parse_candles(&data, Timescale::Day).is_err());
    }

    #[test]
    fn intraday_keys_carry_the_time_of_day() {
        let data = json!({
            "2024-11-29 19:55:00": { "1. open": "2.0", "2. high": "3.0", "3. low": "1.0", "4. close": "2.5", "5. volume": "10" },
        });
        let candles = parse_candles(&data, Timescale::Intraday).unwrap();
        assert_eq!(
            candles[0].ts,
            chrono::NaiveDate::from_ymd_opt(2024, 11, 29)
                .unwrap()
                .and_hms_opt(19, 55, 0)
                .unwrap()
        );
    }
}

use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::core::AvError;
use crate::core::num::{date_at_midnight, parse_date, parse_datetime};

/// One OHLC(V) row of a normalized time series.
///
/// Prices are 32-bit floats and volume a 32-bit integer, matching the
/// widths the vendor's values fit in; nothing is left as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub ts: NaiveDateTime,
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
    /// Absent for series that carry no volume (FX).
    pub volume: Option<i32>,
}

impl Candle {
    /// The row timestamp interpreted as UTC.
    #[must_use]
    pub fn datetime_utc(&self) -> chrono::DateTime<Utc> {
        Utc.from_utc_datetime(&self.ts)
    }
}

/// Granularity of the outer timestamp keys of a series payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timescale {
    /// `%Y-%m-%d` keys: daily, weekly and monthly series.
    Day,
    /// `%Y-%m-%d %H:%M:%S` keys.
    Intraday,
}

impl Timescale {
    pub(crate) fn parse_ts(self, raw: &str) -> Result<NaiveDateTime, AvError> {
        match self {
            Self::Day => parse_date(raw, "series index").map(date_at_midnight),
            Self::Intraday => parse_datetime(raw, "series index"),
        }
    }
}

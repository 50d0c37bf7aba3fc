//! Strict numeric and timestamp parsing for payload shaping.
//!
//! The vendor serializes every numeric field as a string. Normalization
//! casts them to fixed-width types; a failed cast is a contract violation
//! and surfaces as [`AvError::Data`], never a silently dropped row.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::AvError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn parse_f32(raw: &str, what: &str) -> Result<f32, AvError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| AvError::Data(format!("cannot cast '{raw}' to float for {what}")))
}

pub(crate) fn parse_i32(raw: &str, what: &str) -> Result<i32, AvError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AvError::Data(format!("cannot cast '{raw}' to integer for {what}")))
}

pub(crate) fn parse_date(raw: &str, what: &str) -> Result<NaiveDate, AvError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AvError::Data(format!("cannot parse date '{raw}' for {what}")))
}

pub(crate) fn parse_datetime(raw: &str, what: &str) -> Result<NaiveDateTime, AvError> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
        .map_err(|_| AvError::Data(format!("cannot parse timestamp '{raw}' for {what}")))
}

pub(crate) fn date_at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

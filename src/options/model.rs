use chrono::NaiveDate;
use serde::Serialize;

/// One row of a historical options chain, keyed by its contract id.
///
/// Column set and widths follow the chain table contract: eleven f32
/// price/greek columns, four i32 size columns, and `is_call` derived from
/// the vendor's `type` column (which is dropped).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionContract {
    pub contract_id: String,
    pub date: NaiveDate,
    pub expiration: NaiveDate,
    pub is_call: bool,
    pub strike: f32,
    pub mark: f32,
    pub bid: f32,
    pub ask: f32,
    pub implied_volatility: f32,
    pub delta: f32,
    pub gamma: f32,
    pub theta: f32,
    pub vega: f32,
    pub rho: f32,
    pub bid_size: i32,
    pub ask_size: i32,
    pub volume: i32,
    pub open_interest: i32,
    pub last: f32,
}

//! alphavantage-rs: ergonomic Alpha Vantage client.
//!
//! One [`AvClient`] instance wraps the vendor's `query` endpoint. Stock, FX
//! and crypto series come back as typed [`Candle`] tables, historical
//! options chains as [`OptionContract`] rows, and everything else (quotes,
//! fundamentals, technical indicators, economic series) as raw
//! [`serde_json::Value`] payloads.
//!
//! Vendor rejections and transport failures are absorbed: every endpoint
//! method returns `Ok(None)` for them, so `?` only propagates contract
//! violations ([`AvError`]).
//!
//! ```no_run
//! use alphavantage_rs::{AvClient, OutputSize};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AvClient::from_env()?;
//! if let Some(candles) = client
//!     .time_series_daily("IBM", Some(OutputSize::Compact))
//!     .await?
//! {
//!     let last = candles.last().unwrap();
//!     println!("{}: close {}", last.ts, last.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
/// Exchange rates and FX candle series.
pub mod fx;
/// Historical options chains.
pub mod options;
/// Normalized candle tables.
pub mod series;

mod commodities;
mod crypto;
mod economy;
mod fundamentals;
mod indicators;
mod intelligence;
mod stock;

pub use crate::core::{
    ApiParams, AvClient, AvClientBuilder, AvError, Envelope, Interval, NewsSort, NewsTopic,
    OutputSize, SeriesType,
};
pub use fx::ExchangeRate;
pub use options::OptionContract;
pub use series::{Candle, Timescale};

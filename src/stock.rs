//! Core stock endpoints: TIME_SERIES candles, quotes, search, market status.

use serde_json::Value;
use tracing::debug;

use crate::core::envelope::take_data;
use crate::core::{ApiParams, AvClient, AvError, Interval, OutputSize};
use crate::series::{Candle, Timescale, parse_candles};

impl AvClient {
    /// Intraday OHLCV candles for an equity, ascending by timestamp.
    ///
    /// `interval` must be one of the minute variants; the daily and longer
    /// intervals are only accepted by the indicator endpoints. `month`
    /// selects a historical month as `YYYY-MM`.
    pub async fn time_series_intraday(
        &self,
        symbol: &str,
        interval: Interval,
        adjusted: Option<bool>,
        extended_hours: Option<bool>,
        month: Option<&str>,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("adjusted", adjusted)
            .push_opt("extended_hours", extended_hours)
            .push_opt("month", month)
            .push_opt("outputsize", outputsize);
        let Some(mut map) = self.request_envelope("TIME_SERIES_INTRADAY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, &format!("Time Series ({interval})"))?;
        let candles = parse_candles(&data, Timescale::Intraday)?;
        debug!("pulled {} {interval} candles for {symbol}", candles.len());
        Ok(Some(candles))
    }

    /// Daily OHLCV candles, ascending by date.
    pub async fn time_series_daily(
        &self,
        symbol: &str,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("symbol", symbol)
            .push_opt("outputsize", outputsize);
        let Some(mut map) = self.request_envelope("TIME_SERIES_DAILY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Time Series (Daily)")?;
        let candles = parse_candles(&data, Timescale::Day)?;
        debug!("pulled {} daily candles for {symbol}", candles.len());
        Ok(Some(candles))
    }

    /// Split/dividend-adjusted daily series, returned raw: the adjusted
    /// payload carries extra columns outside the candle contract.
    pub async fn time_series_daily_adjusted(
        &self,
        symbol: &str,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "TIME_SERIES_DAILY_ADJUSTED",
            ApiParams::new()
                .push("symbol", symbol)
                .push_opt("outputsize", outputsize),
        )
        .await
    }

    /// Weekly OHLCV candles, ascending by date.
    pub async fn time_series_weekly(&self, symbol: &str) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new().push("symbol", symbol);
        let Some(mut map) = self.request_envelope("TIME_SERIES_WEEKLY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Weekly Time Series")?;
        let candles = parse_candles(&data, Timescale::Day)?;
        debug!("pulled {} weekly candles for {symbol}", candles.len());
        Ok(Some(candles))
    }

    pub async fn time_series_weekly_adjusted(
        &self,
        symbol: &str,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "TIME_SERIES_WEEKLY_ADJUSTED",
            ApiParams::new().push("symbol", symbol),
        )
        .await
    }

    /// Monthly OHLCV candles, ascending by date.
    pub async fn time_series_monthly(&self, symbol: &str) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new().push("symbol", symbol);
        let Some(mut map) = self.request_envelope("TIME_SERIES_MONTHLY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Monthly Time Series")?;
        let candles = parse_candles(&data, Timescale::Day)?;
        debug!("pulled {} monthly candles for {symbol}", candles.len());
        Ok(Some(candles))
    }

    pub async fn time_series_monthly_adjusted(
        &self,
        symbol: &str,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "TIME_SERIES_MONTHLY_ADJUSTED",
            ApiParams::new().push("symbol", symbol),
        )
        .await
    }

    /// Latest quote for one symbol.
    pub async fn global_quote(&self, symbol: &str) -> Result<Option<Value>, AvError> {
        self.send_request("GLOBAL_QUOTE", ApiParams::new().push("symbol", symbol))
            .await
    }

    /// Realtime quotes for up to 100 comma-separated symbols.
    pub async fn realtime_bulk_quotes(&self, symbol: &str) -> Result<Option<Value>, AvError> {
        self.send_request(
            "REALTIME_BULK_QUOTES",
            ApiParams::new().push("symbol", symbol),
        )
        .await
    }

    /// Symbols and names best matching the search keywords.
    pub async fn symbol_search(&self, keywords: &str) -> Result<Option<Value>, AvError> {
        self.send_request("SYMBOL_SEARCH", ApiParams::new().push("keywords", keywords))
            .await
    }

    /// Open/closed status of the major trading venues.
    pub async fn market_status(&self) -> Result<Option<Value>, AvError> {
        self.send_request("MARKET_STATUS", ApiParams::new()).await
    }
}

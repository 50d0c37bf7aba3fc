use tracing::debug;

use crate::core::envelope::take_data;
use crate::core::{ApiParams, AvClient, AvError, Interval, OutputSize};
use crate::series::{Candle, Timescale, parse_candles};

use super::model::{ExchangeRate, parse_exchange_rate};

impl AvClient {
    /// Realtime exchange rate for a currency pair. Both physical (`"USD"`)
    /// and digital (`"BTC"`) currency codes are accepted on either side.
    pub async fn currency_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Option<ExchangeRate>, AvError> {
        let params = ApiParams::new()
            .push("from_currency", from_currency)
            .push("to_currency", to_currency);
        let Some(mut map) = self
            .request_envelope("CURRENCY_EXCHANGE_RATE", &params)
            .await?
        else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Realtime Currency Exchange Rate")?;
        Ok(Some(parse_exchange_rate(&data)?))
    }

    /// Intraday FX candles. FX series carry no volume.
    pub async fn fx_intraday(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        interval: Interval,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push("interval", interval)
            .push_opt("outputsize", outputsize);
        let Some(mut map) = self.request_envelope("FX_INTRADAY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, &format!("Time Series FX ({interval})"))?;
        let candles = parse_candles(&data, Timescale::Intraday)?;
        debug!(
            "pulled {} {interval} fx candles for {from_symbol}/{to_symbol}",
            candles.len()
        );
        Ok(Some(candles))
    }

    /// Daily FX candles, ascending by date.
    pub async fn fx_daily(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push_opt("outputsize", outputsize);
        let Some(mut map) = self.request_envelope("FX_DAILY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Time Series FX (Daily)")?;
        let candles = parse_candles(&data, Timescale::Day)?;
        debug!(
            "pulled {} daily fx candles for {from_symbol}/{to_symbol}",
            candles.len()
        );
        Ok(Some(candles))
    }

    pub async fn fx_weekly(
        &self,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol);
        let Some(mut map) = self.request_envelope("FX_WEEKLY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Time Series FX (Weekly)")?;
        Ok(Some(parse_candles(&data, Timescale::Day)?))
    }

    pub async fn fx_monthly(
        &self,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<Option<Vec<Candle>>, AvError> {
        let params = ApiParams::new()
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol);
        let Some(mut map) = self.request_envelope("FX_MONTHLY", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "Time Series FX (Monthly)")?;
        Ok(Some(parse_candles(&data, Timescale::Day)?))
    }
}

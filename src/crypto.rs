//! Digital-currency endpoints.
//!
//! Crypto series are returned raw: the vendor reports fractional volumes
//! (base-currency amounts), which do not fit the integer volume column of
//! the candle table contract.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError, Interval, OutputSize};

impl AvClient {
    /// Intraday crypto series for a symbol in a given market (e.g. `"BTC"`
    /// in `"USD"`).
    pub async fn crypto_intraday(
        &self,
        symbol: &str,
        market: &str,
        interval: Interval,
        outputsize: Option<OutputSize>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "CRYPTO_INTRADAY",
            ApiParams::new()
                .push("symbol", symbol)
                .push("market", market)
                .push("interval", interval)
                .push_opt("outputsize", outputsize),
        )
        .await
    }

    pub async fn digital_currency_daily(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "DIGITAL_CURRENCY_DAILY",
            ApiParams::new().push("symbol", symbol).push("market", market),
        )
        .await
    }

    pub async fn digital_currency_weekly(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "DIGITAL_CURRENCY_WEEKLY",
            ApiParams::new().push("symbol", symbol).push("market", market),
        )
        .await
    }

    pub async fn digital_currency_monthly(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "DIGITAL_CURRENCY_MONTHLY",
            ApiParams::new().push("symbol", symbol).push("market", market),
        )
        .await
    }
}

use serde_json::Value;
use tracing::debug;

use crate::core::envelope::take_data;
use crate::core::{ApiParams, AvClient, AvError};

use super::model::OptionContract;
use super::parse::parse_contracts;

impl AvClient {
    /// Full historical options chain for a symbol, one row per contract.
    ///
    /// Without `date` the vendor returns the previous trading session;
    /// with `date` (`YYYY-MM-DD`) the chain as of that session. The vendor
    /// serves no chains before 2008-01-01 and rejects such dates with a
    /// soft error, surfaced here as `Ok(None)`.
    pub async fn historical_options(
        &self,
        symbol: &str,
        date: Option<&str>,
    ) -> Result<Option<Vec<OptionContract>>, AvError> {
        let params = ApiParams::new().push("symbol", symbol).push_opt("date", date);
        let Some(mut map) = self.request_envelope("HISTORICAL_OPTIONS", &params).await? else {
            return Ok(None);
        };
        let data = take_data(&mut map, "data")?;
        let contracts = parse_contracts(data)?;
        debug!("pulled {} option contracts for {symbol}", contracts.len());
        Ok(Some(contracts))
    }

    /// Realtime options chain, returned raw. Requires a premium key.
    pub async fn realtime_options(
        &self,
        symbol: &str,
        contract: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "REALTIME_OPTIONS",
            ApiParams::new()
                .push("symbol", symbol)
                .push_opt("contract", contract),
        )
        .await
    }
}

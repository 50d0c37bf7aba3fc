//! US economic indicator series, all returned raw.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError};

impl AvClient {
    /// Annual or quarterly real GDP of the United States.
    pub async fn real_gdp(&self, interval: Option<&str>) -> Result<Option<Value>, AvError> {
        self.send_request("REAL_GDP", ApiParams::new().push_opt("interval", interval))
            .await
    }

    pub async fn real_gdp_per_capita(&self) -> Result<Option<Value>, AvError> {
        self.send_request("REAL_GDP_PER_CAPITA", ApiParams::new()).await
    }

    /// Treasury yields; `maturity` ranges from `3month` to `30year`.
    pub async fn treasury_yield(
        &self,
        interval: Option<&str>,
        maturity: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "TREASURY_YIELD",
            ApiParams::new()
                .push_opt("interval", interval)
                .push_opt("maturity", maturity),
        )
        .await
    }

    pub async fn federal_funds_rate(
        &self,
        interval: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "FEDERAL_FUNDS_RATE",
            ApiParams::new().push_opt("interval", interval),
        )
        .await
    }

    /// Consumer price index, monthly or semiannual.
    pub async fn cpi(&self, interval: Option<&str>) -> Result<Option<Value>, AvError> {
        self.send_request("CPI", ApiParams::new().push_opt("interval", interval))
            .await
    }

    pub async fn inflation(&self) -> Result<Option<Value>, AvError> {
        self.send_request("INFLATION", ApiParams::new()).await
    }

    pub async fn retail_sales(&self) -> Result<Option<Value>, AvError> {
        self.send_request("RETAIL_SALES", ApiParams::new()).await
    }

    /// Durable goods orders.
    pub async fn durables(&self) -> Result<Option<Value>, AvError> {
        self.send_request("DURABLES", ApiParams::new()).await
    }

    pub async fn unemployment(&self) -> Result<Option<Value>, AvError> {
        self.send_request("UNEMPLOYMENT", ApiParams::new()).await
    }

    pub async fn nonfarm_payroll(&self) -> Result<Option<Value>, AvError> {
        self.send_request("NONFARM_PAYROLL", ApiParams::new()).await
    }
}

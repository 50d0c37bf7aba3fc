//! Fundamental data endpoints, all returned raw: the payloads are wide,
//! versioned objects whose field sets the vendor extends regularly.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError};

macro_rules! symbol_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(&self, symbol: &str) -> Result<Option<Value>, AvError> {
            self.send_request($function, ApiParams::new().push("symbol", symbol))
                .await
        }
    };
}

impl AvClient {
    symbol_endpoint!(
        /// Company information, financial ratios and key metrics.
        overview, "OVERVIEW"
    );
    symbol_endpoint!(etf_profile, "ETF_PROFILE");
    symbol_endpoint!(
        /// Historical and declared dividend distributions.
        dividends, "DIVIDENDS"
    );
    symbol_endpoint!(splits, "SPLITS");
    symbol_endpoint!(income_statement, "INCOME_STATEMENT");
    symbol_endpoint!(balance_sheet, "BALANCE_SHEET");
    symbol_endpoint!(cash_flow, "CASH_FLOW");
    symbol_endpoint!(
        /// Annual and quarterly EPS history.
        earnings, "EARNINGS"
    );

    /// Listing and delisting status of US symbols; `date` selects a
    /// historical snapshot, `state` filters for `active` or `delisted`.
    pub async fn listing_status(
        &self,
        date: Option<&str>,
        state: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "LISTING_STATUS",
            ApiParams::new().push_opt("date", date).push_opt("state", state),
        )
        .await
    }

    /// Expected earnings in the next 3, 6 or 12 months (`horizon`).
    pub async fn earnings_calendar(
        &self,
        symbol: Option<&str>,
        horizon: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "EARNINGS_CALENDAR",
            ApiParams::new()
                .push_opt("symbol", symbol)
                .push_opt("horizon", horizon),
        )
        .await
    }
}

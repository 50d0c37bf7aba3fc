//! Commodity price series, all returned raw.
//!
//! `interval` is the vendor's commodity granularity (`daily`, `weekly`,
//! `monthly`, `quarterly` or `annual` depending on the commodity), left as
//! a string because the accepted set varies per endpoint.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError};

macro_rules! commodity_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(&self, interval: Option<&str>) -> Result<Option<Value>, AvError> {
            self.send_request($function, ApiParams::new().push_opt("interval", interval))
                .await
        }
    };
}

impl AvClient {
    commodity_endpoint!(
        /// West Texas Intermediate crude oil prices.
        wti, "WTI"
    );
    commodity_endpoint!(
        /// Brent crude oil prices.
        brent, "BRENT"
    );
    commodity_endpoint!(natural_gas, "NATURAL_GAS");
    commodity_endpoint!(copper, "COPPER");
    commodity_endpoint!(aluminum, "ALUMINUM");
    commodity_endpoint!(wheat, "WHEAT");
    commodity_endpoint!(corn, "CORN");
    commodity_endpoint!(cotton, "COTTON");
    commodity_endpoint!(sugar, "SUGAR");
    commodity_endpoint!(coffee, "COFFEE");
    commodity_endpoint!(
        /// The global commodity price index.
        all_commodities, "ALL_COMMODITIES"
    );
}

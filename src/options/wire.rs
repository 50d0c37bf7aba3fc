use serde::Deserialize;

/// One raw record of the `HISTORICAL_OPTIONS` payload. Every value is a
/// string on the wire; the `symbol` field is intentionally not mapped.
#[derive(Deserialize)]
pub(crate) struct ContractRow {
    #[serde(rename = "contractID")]
    pub(crate) contract_id: String,
    pub(crate) expiration: String,
    pub(crate) date: String,
    #[serde(rename = "type")]
    pub(crate) contract_type: String,
    pub(crate) strike: String,
    pub(crate) last: String,
    pub(crate) mark: String,
    pub(crate) bid: String,
    pub(crate) bid_size: String,
    pub(crate) ask: String,
    pub(crate) ask_size: String,
    pub(crate) volume: String,
    pub(crate) open_interest: String,
    pub(crate) implied_volatility: String,
    pub(crate) delta: String,
    pub(crate) gamma: String,
    pub(crate) theta: String,
    pub(crate) vega: String,
    pub(crate) rho: String,
}

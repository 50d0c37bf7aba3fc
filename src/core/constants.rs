pub(crate) const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";

/// Environment variable `AvClient::from_env` reads the key from.
pub(crate) const API_KEY_ENV_VAR: &str = "API_KEY_ALPHAVANTAGE";

/// The vendor's public demo key, exempt from obfuscation.
pub(crate) const DEMO_KEY: &str = "demo";

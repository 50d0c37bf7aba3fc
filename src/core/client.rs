//! Public client surface + builder.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::core::AvError;
use crate::core::constants::{API_KEY_ENV_VAR, DEFAULT_BASE_URL};
use crate::core::util::obfuscate_api_key;

/// Client for the Alpha Vantage REST API.
///
/// The client holds the API key, the base URL and a connection pool, all
/// immutable after construction, so one instance can be shared freely
/// across tasks. Endpoint methods live in the per-section modules
/// (`time_series_daily`, `fx_daily`, `sma`, ...).
///
/// # Example
///
/// ```no_run
/// # use alphavantage_rs::AvClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AvClient::new("demo")?;
/// if let Some(candles) = client.time_series_daily("IBM", None).await? {
///     println!("fetched {} daily candles", candles.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AvClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    archive_dir: Option<PathBuf>,
}

impl AvClient {
    /// Creates a client with default settings and the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AvError> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client with the key from the `API_KEY_ALPHAVANTAGE`
    /// environment variable.
    pub fn from_env() -> Result<Self, AvError> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| AvError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn archive_dir(&self) -> Option<&Path> {
        self.archive_dir.as_deref()
    }
}

impl fmt::Debug for AvClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvClient")
            .field("api_key", &obfuscate_api_key(&self.api_key))
            .field("base_url", &self.base_url.as_str())
            .field("archive_dir", &self.archive_dir)
            .finish_non_exhaustive()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    archive_dir: Option<PathBuf>,
}

impl AvClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the vendor base URL (e.g. a mock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none, the
    /// transport's behavior applies.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Archive every raw response body under `dir`, one write-once file per
    /// call, for offline debugging. A failed write is logged and never
    /// fails the call. If not set, nothing is persisted.
    #[must_use]
    pub fn archive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.archive_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<AvClient, AvError> {
        let api_key = self.api_key.ok_or(AvError::MissingApiKey)?;
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let client = AvClient {
            http,
            base_url,
            api_key,
            archive_dir: self.archive_dir,
        };
        debug!("created {client:?}");
        Ok(client)
    }
}

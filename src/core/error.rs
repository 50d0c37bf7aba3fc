use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Vendor rejections ("soft errors") and transport failures are *not*
/// errors: they are absorbed at the request boundary and surfaced to the
/// caller as an absent result. What remains here are contract violations
/// worth stopping on.
#[derive(Debug, Error)]
pub enum AvError {
    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// CSV output was requested; only JSON is supported.
    #[error("csv output is not implemented, request json instead")]
    UnsupportedFormat,

    /// No API key was configured.
    #[error("no api key configured; pass one to the builder or set API_KEY_ALPHAVANTAGE")]
    MissingApiKey,
}

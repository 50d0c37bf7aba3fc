//! Request assembly, envelope classification and the optional raw archive.

use serde_json::{Map, Value};
use tracing::{debug, error, warn};
use url::Url;

use crate::core::envelope::{Envelope, infer_data, take_data};
use crate::core::params::ApiParams;
use crate::core::util::{format_byte_size, obfuscate_request_url, utc_timestamp_ms};
use crate::core::{AvClient, AvError};

impl AvClient {
    /// Issues one GET for `function` with the given ordered arguments and
    /// returns the full response object.
    ///
    /// `Ok(None)` means the vendor rejected the request (rate limit,
    /// unknown symbol, ...) or the transport failed; both are logged and
    /// absorbed here, and a single failure is final; there is no retry.
    ///
    /// # Errors
    ///
    /// Fails fast with [`AvError::UnsupportedFormat`] when the arguments
    /// request `datatype=csv`, before any network I/O.
    pub async fn send_request(
        &self,
        function: &str,
        params: ApiParams,
    ) -> Result<Option<Value>, AvError> {
        Ok(self
            .request_envelope(function, &params)
            .await?
            .map(Value::Object))
    }

    /// Like [`AvClient::send_request`], but extracts just the data payload.
    ///
    /// The data-bearing key is inconsistent across endpoints; pass it as
    /// `data_key` when known. Without it, the single key left after
    /// discarding `"Meta Data"` is taken, which fails on payloads with
    /// several candidate keys.
    pub async fn send_request_data(
        &self,
        function: &str,
        params: ApiParams,
        data_key: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        let Some(mut map) = self.request_envelope(function, &params).await? else {
            return Ok(None);
        };
        let data = match data_key {
            Some(key) => take_data(&mut map, key)?,
            None => infer_data(map)?,
        };
        Ok(Some(data))
    }

    pub(crate) async fn request_envelope(
        &self,
        function: &str,
        params: &ApiParams,
    ) -> Result<Option<Map<String, Value>>, AvError> {
        if params.contains("datatype", "csv") {
            return Err(AvError::UnsupportedFormat);
        }

        let url = self.request_url(function, params)?;

        let response = match self.http().get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("request got transport error '{e}'");
                return Ok(None);
            }
        };
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                error!("reading response body failed with '{e}'");
                return Ok(None);
            }
        };
        debug!("'{function}' payload size: {}.", format_byte_size(body.len()));

        self.archive_response(function, params, &body);

        let map: Map<String, Value> = match serde_json::from_str(&body) {
            Ok(m) => m,
            Err(e) => {
                error!("response is not a json object: {e}");
                return Ok(None);
            }
        };

        match Envelope::classify(map) {
            Envelope::SoftError(msg) => {
                warn!("vendor rejected '{function}': {msg}");
                Ok(None)
            }
            Envelope::Success(map) => {
                debug!(
                    "successfully sent request '{}'",
                    obfuscate_request_url(url.as_str(), self.api_key())
                );
                Ok(Some(map))
            }
        }
    }

    /// `<base>/query?function=F&<args in order>&apikey=K`.
    fn request_url(&self, function: &str, params: &ApiParams) -> Result<Url, AvError> {
        let mut url = self.base_url().join("query")?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("function", function);
            for (key, value) in params.iter() {
                qp.append_pair(key, value);
            }
            qp.append_pair("apikey", self.api_key());
        }
        Ok(url)
    }

    /// Best-effort write of the raw body; never fails the call.
    fn archive_response(&self, function: &str, params: &ApiParams, body: &str) {
        let Some(dir) = self.archive_dir() else {
            return;
        };
        let mut stem = function.to_owned();
        if !params.is_empty() {
            stem.push('&');
            stem.push_str(&params.join());
        }
        let path = dir.join(format!("{}__{stem}.json", utc_timestamp_ms()));
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("cannot create archive dir {}: {e}", dir.display());
            return;
        }
        if let Err(e) = std::fs::write(&path, body) {
            warn!("failed to archive response to {}: {e}", path.display());
        }
    }
}

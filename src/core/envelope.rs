//! Classification of the vendor's top-level response object.
//!
//! Every endpoint returns one JSON object. A well-formed rejection carries a
//! single `"Information"` or `"Error Message"` key; anything else is a
//! success whose data sits under an endpoint-specific key next to optional
//! metadata.

use serde_json::{Map, Value};

use crate::core::AvError;

pub(crate) const INFORMATION_KEY: &str = "Information";
pub(crate) const ERROR_MESSAGE_KEY: &str = "Error Message";
pub(crate) const META_DATA_KEY: &str = "Meta Data";

/// A classified top-level response object.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The full object of a successful response.
    Success(Map<String, Value>),
    /// A vendor-reported rejection (rate limit, unknown symbol, malformed
    /// request). The payload is the vendor's message.
    SoftError(String),
}

impl Envelope {
    /// Classifies a parsed response object.
    ///
    /// A rejection envelope is expected to carry exactly one key; this is
    /// checked defensively in debug builds only.
    #[must_use]
    pub fn classify(map: Map<String, Value>) -> Self {
        if let Some(msg) = map.get(INFORMATION_KEY) {
            debug_assert_eq!(map.len(), 1, "'Information' key but also other keys!");
            return Self::SoftError(render_message(msg));
        }
        if let Some(msg) = map.get(ERROR_MESSAGE_KEY) {
            debug_assert_eq!(map.len(), 1, "'Error Message' key but also other keys!");
            return Self::SoftError(render_message(msg));
        }
        Self::Success(map)
    }
}

fn render_message(msg: &Value) -> String {
    match msg.as_str() {
        Some(s) => s.to_owned(),
        None => msg.to_string(),
    }
}

/// Removes the payload under an explicit, per-endpoint data key.
pub(crate) fn take_data(map: &mut Map<String, Value>, key: &str) -> Result<Value, AvError> {
    map.remove(key).ok_or_else(|| {
        let available: Vec<&str> = map.keys().map(String::as_str).collect();
        AvError::Data(format!(
            "expected data key '{key}', response has {available:?}"
        ))
    })
}

/// Fallback for callers that do not know the data key: the single key left
/// after discarding `"Meta Data"`. The key layout is inconsistent across
/// endpoints, so the typed wrappers always pass an explicit key instead.
pub(crate) fn infer_data(mut map: Map<String, Value>) -> Result<Value, AvError> {
    map.remove(META_DATA_KEY);
    if map.len() != 1 {
        let available: Vec<&str> = map.keys().map(String::as_str).collect();
        return Err(AvError::Data(format!(
            "cannot infer data key, candidates: {available:?}"
        )));
    }
    let key = map
        .keys()
        .next()
        .map(String::to_owned)
        .ok_or_else(|| AvError::Data("empty response object".into()))?;
    take_data(&mut map, &key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().expect("test body must be an object")
    }

    #[test]
    fn information_is_a_soft_error() {
        let env = Envelope::classify(obj(json!({ "Information": "rate limited" })));
        assert_eq!(env, Envelope::SoftError("rate limited".into()));
    }

    #[test]
    fn error_message_is_a_soft_error() {
        let env = Envelope::classify(obj(json!({ "Error Message": "bad symbol" })));
        assert_eq!(env, Envelope::SoftError("bad symbol".into()));
    }

    #[test]
    fn anything_else_is_a_success() {
        let env = Envelope::classify(obj(json!({ "Meta Data": {}, "Time Series (Daily)": {} })));
        assert!(matches!(env, Envelope::Success(_)));
    }

    #[test]
    fn take_data_reports_available_keys() {
        let mut map = obj(json!({ "Meta Data": {}, "Weekly Time Series": {} }));
        let err = take_data(&mut map, "Time Series (Daily)").unwrap_err();
        assert!(err.to_string().contains("Weekly Time Series"));
    }

    #[test]
    fn infer_data_skips_metadata() {
        let map = obj(json!({ "Meta Data": {}, "Time Series (Daily)": { "a": 1 } }));
        let data = infer_data(map).unwrap();
        assert_eq!(data, json!({ "a": 1 }));
    }

    #[test]
    fn infer_data_rejects_ambiguous_envelopes() {
        let map = obj(json!({ "annualEarnings": [], "quarterlyEarnings": [] }));
        assert!(infer_data(map).is_err());
    }
}

//! Ordered request-argument list.
//!
//! The vendor's query strings are assembled from `key=value` fragments in a
//! fixed order: `function` first, endpoint arguments in their documented
//! order, `apikey` last. [`ApiParams`] preserves insertion order so the
//! endpoint methods can marshal arguments exactly as documented.

use std::fmt;

/// An ordered sequence of `key=value` request arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiParams {
    entries: Vec<(String, String)>,
}

impl ApiParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one argument.
    #[must_use]
    pub fn push(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.entries.push((key.to_owned(), value.to_string()));
        self
    }

    /// Appends one argument only when a value is present.
    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn contains(&self, key: &str, value: &str) -> bool {
        self.iter().any(|(k, v)| k == key && v == value)
    }

    /// Raw `k=v&k=v` rendering, used for archive file names.
    pub(crate) fn join(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

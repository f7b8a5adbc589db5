// ── Runtime-supplied UI configuration ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key holding the brand display name.
pub const BRAND_KEY: &str = "brand";
/// Key holding raw SVG markup for the brand icon.
pub const BRAND_ICON_KEY: &str = "brandicon";

/// Flat key/value configuration handed over by the backend once per session.
///
/// A key is "configured" only when it holds a non-empty string. Missing keys,
/// empty strings, and non-string values all read as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynVars(BTreeMap<String, Value>);

impl DynVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a string value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Value::String(value.into()));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// The configured string value of `key`, if any.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn brand(&self) -> Option<&str> {
        self.get_str(BRAND_KEY)
    }

    pub fn brand_icon(&self) -> Option<&str> {
        self.get_str(BRAND_ICON_KEY)
    }

    /// Fill every unset key of `self` from `fallback`.
    ///
    /// A key explicitly set to an empty string counts as unset, so the
    /// fallback still applies to it.
    pub fn with_fallback(mut self, fallback: &DynVars) -> Self {
        for (key, value) in &fallback.0 {
            if self.get_str(key).is_none() && fallback.get_str(key).is_some() {
                self.0.insert(key.clone(), value.clone());
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for DynVars {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }
}

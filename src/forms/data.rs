//! Submitted form payloads

use super::field::bool_key;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw submitted values keyed by field name
///
/// A field may carry several values (multi-selects). Single-value fields read
/// the last one, as browsers send repeated keys in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Option<JsonValue>>")]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from `(name, value)` pairs, repeated names accumulate
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (name, value) in pairs {
            data.append(name, value);
        }
        data
    }

    /// Set a field to a single value, replacing anything submitted before
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), vec![value.into()]);
    }

    /// Add another value to a field
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Set a field to a list of values
    pub fn insert_list<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Get the value of a single-value field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Get every value submitted for a field
    pub fn get_list(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|values| !values.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// JSON payload value before it is flattened to strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum JsonValue {
    Scalar(JsonScalar),
    List(Vec<JsonScalar>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum JsonScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl JsonScalar {
    fn into_submitted(self) -> String {
        match self {
            JsonScalar::Bool(b) => bool_key(b).to_string(),
            JsonScalar::Int(n) => n.to_string(),
            JsonScalar::Float(f) => f.to_string(),
            JsonScalar::Text(s) => s,
        }
    }
}

impl From<HashMap<String, Option<JsonValue>>> for FormData {
    fn from(raw: HashMap<String, Option<JsonValue>>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(name, value)| {
                let values = match value? {
                    JsonValue::Scalar(s) => vec![s.into_submitted()],
                    JsonValue::List(items) => {
                        items.into_iter().map(JsonScalar::into_submitted).collect()
                    }
                };
                Some((name, values))
            })
            .collect();
        Self { values }
    }
}

//! Form trait and cleaned values

use super::data::FormData;
use super::errors::FormErrors;
use super::field::{bool_key, FormField};
use crate::catalog::{Country, LanguageSpec};
use serde::Serialize;
use std::collections::BTreeMap;

/// Trait for common form operations
pub trait Form {
    type Cleaned: CleanedData;

    /// Short identifier of the form
    fn name(&self) -> &'static str;

    /// Declared fields, in display order
    fn fields(&self) -> Vec<&FormField>;

    /// Clean every field, collecting all errors
    fn validate(&self, data: &FormData) -> Result<Self::Cleaned, FormErrors>;

    fn is_valid(&self, data: &FormData) -> bool {
        self.validate(data).is_ok()
    }

    fn get_field(&self, name: &str) -> Option<&FormField> {
        self.fields().into_iter().find(|f| f.name == name)
    }
}

/// A typed, cleaned value of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CleanedValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<String>),
    Country(Country),
    Language(LanguageSpec),
}

impl CleanedValue {
    /// Values to submit to reproduce this cleaned value
    pub fn to_submitted(&self) -> Vec<String> {
        match self {
            CleanedValue::Text(s) => vec![s.clone()],
            CleanedValue::Integer(n) => vec![n.to_string()],
            CleanedValue::Boolean(b) => vec![bool_key(*b).to_string()],
            CleanedValue::List(items) => items.clone(),
            CleanedValue::Country(c) => vec![c.id.to_string()],
            CleanedValue::Language(l) => vec![l.id.to_string()],
        }
    }
}

/// Result record of a successful validation
pub trait CleanedData {
    /// Cleaned values keyed by field name
    fn cleaned_data(&self) -> BTreeMap<&'static str, CleanedValue>;

    /// Payload that pre-fills a form with these values
    fn to_form_data(&self) -> FormData {
        let mut data = FormData::new();
        for (name, value) in self.cleaned_data() {
            data.insert_list(name, value.to_submitted());
        }
        data
    }
}

//! Per-field validation errors

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Message used for missing values when a field declares none
pub const DEFAULT_REQUIRED: &str = "This field is required.";

/// Required message for the free-text answers
pub const ENTER_ONE_WORD: &str = "You must enter at least one word!";

/// Required message for the background questionnaire
pub const REQUIRED_FIELD: &str = "Required field";

/// A single problem with one submitted field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    Required(String),
    #[error("Ensure this value has at least {min} characters (it has {actual}).")]
    TooShort { min: usize, actual: usize },
    #[error("Enter a whole number.")]
    InvalidInteger,
    #[error("Enter a valid boolean.")]
    InvalidBoolean,
    #[error("Select a valid choice. {0} is not one of the available choices.")]
    InvalidChoice(String),
    /// Key does not match any current row of the lookup table
    #[error("Select a valid choice. That choice is not one of the available choices.")]
    UnknownRow,
}

/// All errors of one submission, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error to a field
    pub fn add(&mut self, field: &str, error: FieldError) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(error.to_string());
    }

    /// Keep the value of a successful clean, or record its error
    pub fn record<T>(&mut self, field: &str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            }
        }
    }

    /// Like [`record`](Self::record) for cleaners reporting several errors
    pub fn record_all<T>(&mut self, field: &str, result: Result<T, Vec<FieldError>>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                for error in errors {
                    self.add(field, error);
                }
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages for one field, empty if it validated
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::InvalidInteger.to_string(), "Enter a whole number.");
        assert_eq!(
            FieldError::InvalidChoice("xx".to_string()).to_string(),
            "Select a valid choice. xx is not one of the available choices."
        );
        assert_eq!(
            FieldError::UnknownRow.to_string(),
            "Select a valid choice. That choice is not one of the available choices."
        );
        assert_eq!(
            FieldError::TooShort { min: 3, actual: 1 }.to_string(),
            "Ensure this value has at least 3 characters (it has 1)."
        );
    }

    #[test]
    fn test_new_is_empty() {
        let errors = FormErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.get("txt").is_empty());
    }

    #[test]
    fn test_add_accumulates_per_field() {
        let mut errors = FormErrors::new();
        errors.add("pos", FieldError::InvalidChoice("X".to_string()));
        errors.add("pos", FieldError::InvalidChoice("Y".to_string()));
        errors.add("txt", FieldError::Required(ENTER_ONE_WORD.to_string()));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("pos").len(), 2);
        assert_eq!(errors.get("txt"), &[ENTER_ONE_WORD.to_string()]);
    }

    #[test]
    fn test_record_keeps_value() {
        let mut errors = FormErrors::new();
        assert_eq!(errors.record("n", Ok(5)), Some(5));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_record_stores_error() {
        let mut errors = FormErrors::new();
        let value: Option<i64> = errors.record("n", Err(FieldError::InvalidInteger));
        assert!(value.is_none());
        assert!(errors.contains("n"));
    }

    #[test]
    fn test_record_all_stores_every_error() {
        let mut errors = FormErrors::new();
        let value: Option<Vec<String>> = errors.record_all(
            "pos",
            Err(vec![FieldError::InvalidChoice("a".into()), FieldError::InvalidChoice("b".into())]),
        );
        assert!(value.is_none());
        assert_eq!(errors.get("pos").len(), 2);
    }

    #[test]
    fn test_fields_are_sorted() {
        let mut errors = FormErrors::new();
        errors.add("txt_tgt", FieldError::InvalidInteger);
        errors.add("hours", FieldError::InvalidInteger);
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["hours", "txt_tgt"]);
    }

    #[test]
    fn test_serializes_as_mapping() {
        let mut errors = FormErrors::new();
        errors.add("hours_per_week", FieldError::Required(REQUIRED_FIELD.to_string()));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"hours_per_week": ["Required field"]}));
    }

    #[test]
    fn test_display() {
        let mut errors = FormErrors::new();
        errors.add("a", FieldError::InvalidInteger);
        errors.add("b", FieldError::InvalidBoolean);
        assert_eq!(
            errors.to_string(),
            "a: Enter a whole number.; b: Enter a valid boolean."
        );
    }
}

//! Field cleaners: turn submitted strings into typed values

use super::choices::Choice;
use super::data::FormData;
use super::errors::FieldError;
use super::field::{bool_key, parse_bool, FormField};
use crate::catalog::{find_row, LookupRow};

/// Trimmed submitted value, `None` when missing or blank
fn submitted<'a>(field: &FormField, data: &'a FormData) -> Option<&'a str> {
    data.get(field.name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Trimmed submitted value, or the field's required error
fn required_value<'a>(field: &FormField, data: &'a FormData) -> Result<&'a str, FieldError> {
    submitted(field, data).ok_or_else(|| field.required_error())
}

/// Clean a text field: surrounding whitespace is stripped before checks
pub fn clean_text(field: &FormField, data: &FormData) -> Result<String, FieldError> {
    let Some(value) = submitted(field, data) else {
        return if field.required {
            Err(field.required_error())
        } else {
            Ok(String::new())
        };
    };

    if let Some(min) = field.min_length {
        let actual = value.chars().count();
        if actual < min {
            return Err(FieldError::TooShort { min, actual });
        }
    }

    Ok(value.to_string())
}

/// Parse a whole number; a trailing ".0" is accepted
pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let whole = match raw.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => raw,
    };
    whole.parse().ok()
}

pub fn clean_integer(field: &FormField, data: &FormData) -> Result<i64, FieldError> {
    let value = required_value(field, data)?;
    parse_integer(value).ok_or(FieldError::InvalidInteger)
}

/// Clean an optional boolean flag.
///
/// Only an omitted key falls back to the field's initial value. A present
/// but blank value is `false`, so an explicit "False" or "" stays
/// distinguishable from an absent flag.
pub fn clean_boolean(field: &FormField, data: &FormData) -> Result<bool, FieldError> {
    match data.get(field.name).map(str::trim) {
        Some("") if field.required => Err(field.required_error()),
        Some("") => Ok(false),
        Some(value) => parse_bool(value).ok_or(FieldError::InvalidBoolean),
        None if field.required => Err(field.required_error()),
        None => Ok(field
            .initial
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false)),
    }
}

pub fn clean_choice<C: Choice>(field: &FormField, data: &FormData) -> Result<C, FieldError> {
    let value = required_value(field, data)?;
    C::from_key(value).ok_or_else(|| FieldError::InvalidChoice(value.to_string()))
}

/// Clean a multi-select, reporting every key outside the declared set
pub fn clean_multiple_choice<C: Choice>(
    field: &FormField,
    data: &FormData,
) -> Result<Vec<C>, Vec<FieldError>> {
    let values = data.get_list(field.name);
    if values.is_empty() && field.required {
        return Err(vec![field.required_error()]);
    }

    let mut selected = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for value in values {
        match C::from_key(value.trim()) {
            Some(choice) => selected.push(choice),
            None => errors.push(FieldError::InvalidChoice(value.clone())),
        }
    }

    if errors.is_empty() {
        Ok(selected)
    } else {
        Err(errors)
    }
}

/// Clean a Yes/No choice to the boolean it stands for.
/// Only the exact option keys "True" and "False" are accepted.
pub fn clean_yes_no(field: &FormField, data: &FormData) -> Result<bool, FieldError> {
    let value = required_value(field, data)?;
    if value == bool_key(true) {
        Ok(true)
    } else if value == bool_key(false) {
        Ok(false)
    } else {
        Err(FieldError::InvalidChoice(value.to_string()))
    }
}

/// Resolve a submitted primary key against the current rows.
/// The key must be a plain integer; "1.0" is not a primary key.
pub fn clean_model_choice<R: LookupRow>(
    field: &FormField,
    data: &FormData,
    rows: &[R],
) -> Result<R, FieldError> {
    let value = required_value(field, data)?;
    value
        .parse::<i64>()
        .ok()
        .and_then(|pk| find_row(rows, pk))
        .cloned()
        .ok_or(FieldError::UnknownRow)
}

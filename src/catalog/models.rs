//! Lookup table rows referenced by the forms

use crate::forms::ChoiceOption;
use serde::{Deserialize, Serialize};

/// A row of an external lookup table, selectable by primary key
pub trait LookupRow: Clone {
    fn pk(&self) -> i64;

    /// Text shown for this row in option lists
    fn display_name(&self) -> String;
}

/// Country a participant was born in or lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

impl LookupRow for Country {
    fn pk(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Target language of a translation task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub id: i64,
    /// Language code, e.g. "ar" or "de"
    pub code: String,
    pub name: String,
}

impl LookupRow for LanguageSpec {
    fn pk(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Option list for a set of rows, keyed by primary key
pub fn row_options<R: LookupRow>(rows: &[R]) -> Vec<ChoiceOption> {
    rows.iter()
        .map(|row| ChoiceOption::new(row.pk().to_string(), row.display_name()))
        .collect()
}

/// Find the row with the given primary key
pub fn find_row<R: LookupRow>(rows: &[R], pk: i64) -> Option<&R> {
    rows.iter().find(|row| row.pk() == pk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<Country> {
        vec![
            Country {
                id: 1,
                name: "Egypt".to_string(),
            },
            Country {
                id: 7,
                name: "Germany".to_string(),
            },
        ]
    }

    #[test]
    fn test_row_options_use_pk() {
        let options = row_options(&countries());
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].key, "7");
        assert_eq!(options[1].label, "Germany");
    }

    #[test]
    fn test_find_row() {
        let rows = countries();
        assert_eq!(find_row(&rows, 7).map(|c| c.name.as_str()), Some("Germany"));
        assert!(find_row(&rows, 2).is_none());
    }

    #[test]
    fn test_language_display_name() {
        let lang = LanguageSpec {
            id: 3,
            code: "ar".to_string(),
            name: "Arabic".to_string(),
        };
        assert_eq!(lang.display_name(), "Arabic (ar)");
    }

    #[test]
    fn test_country_deserialize() {
        let json = r#"{"id": 4, "name": "France"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.pk(), 4);
    }
}

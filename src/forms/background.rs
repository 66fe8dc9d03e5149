//! Self-submitted background of a participant

use super::clean::{clean_integer, clean_model_choice, clean_yes_no};
use super::data::FormData;
use super::errors::{FormErrors, REQUIRED_FIELD};
use super::field::FormField;
use super::form::{CleanedData, CleanedValue, Form};
use crate::catalog::{row_options, Country};
use serde::Serialize;
use std::collections::BTreeMap;

/// Background questionnaire, filled in once per participant.
///
/// Country choices are the rows handed to [`BackgroundForm::new`]; a key
/// validates only if it matches one of them.
#[derive(Debug, Clone)]
pub struct BackgroundForm {
    pub birth_country: FormField,
    pub home_country: FormField,
    pub is_pro_translator: FormField,
    pub hours_per_week: FormField,
    countries: Vec<Country>,
}

impl BackgroundForm {
    pub fn new(countries: &[Country]) -> Self {
        Self {
            birth_country: FormField::model_choice(
                "birth_country",
                "Where were you born?",
                row_options(countries),
            )
            .with_required_message(REQUIRED_FIELD),
            home_country: FormField::model_choice(
                "home_country",
                "Where do you currently live?",
                row_options(countries),
            )
            .with_required_message(REQUIRED_FIELD),
            is_pro_translator: FormField::yes_no(
                "is_pro_translator",
                "Do you consider yourself a professional translator?",
            ),
            hours_per_week: FormField::integer(
                "hours_per_week",
                "On average, how many hours per week do you work as a translator?",
            )
            .with_required_message(REQUIRED_FIELD),
            countries: countries.to_vec(),
        }
    }

    /// Rows the country fields choose from
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

/// Cleaned background answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundResponse {
    pub birth_country: Country,
    pub home_country: Country,
    pub is_pro_translator: bool,
    pub hours_per_week: i64,
}

impl CleanedData for BackgroundResponse {
    fn cleaned_data(&self) -> BTreeMap<&'static str, CleanedValue> {
        BTreeMap::from([
            ("birth_country", CleanedValue::Country(self.birth_country.clone())),
            ("home_country", CleanedValue::Country(self.home_country.clone())),
            ("is_pro_translator", CleanedValue::Boolean(self.is_pro_translator)),
            ("hours_per_week", CleanedValue::Integer(self.hours_per_week)),
        ])
    }
}

impl Form for BackgroundForm {
    type Cleaned = BackgroundResponse;

    fn name(&self) -> &'static str {
        "background"
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.birth_country,
            &self.home_country,
            &self.is_pro_translator,
            &self.hours_per_week,
        ]
    }

    fn validate(&self, data: &FormData) -> Result<BackgroundResponse, FormErrors> {
        let mut errors = FormErrors::new();

        let birth_country = errors.record(
            self.birth_country.name,
            clean_model_choice(&self.birth_country, data, &self.countries),
        );
        let home_country = errors.record(
            self.home_country.name,
            clean_model_choice(&self.home_country, data, &self.countries),
        );
        let is_pro_translator = errors.record(
            self.is_pro_translator.name,
            clean_yes_no(&self.is_pro_translator, data),
        );
        let hours_per_week = errors.record(
            self.hours_per_week.name,
            clean_integer(&self.hours_per_week, data),
        );

        match (birth_country, home_country, is_pro_translator, hours_per_week) {
            (Some(birth_country), Some(home_country), Some(is_pro_translator), Some(hours_per_week))
                if errors.is_empty() =>
            {
                Ok(BackgroundResponse {
                    birth_country,
                    home_country,
                    is_pro_translator,
                    hours_per_week,
                })
            }
            _ => {
                tracing::debug!(fields = errors.len(), "background form rejected");
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field::Widget;
    use pretty_assertions::assert_eq;

    fn country(id: i64, name: &str) -> Country {
        Country {
            id,
            name: name.to_string(),
        }
    }

    fn countries() -> Vec<Country> {
        vec![country(1, "Egypt"), country(2, "Germany"), country(3, "United States")]
    }

    fn valid_data() -> FormData {
        FormData::from_pairs([
            ("birth_country", "1"),
            ("home_country", "3"),
            ("is_pro_translator", "True"),
            ("hours_per_week", "20"),
        ])
    }

    #[test]
    fn test_country_options_follow_rows() {
        let form = BackgroundForm::new(&countries());
        assert_eq!(form.birth_country.widget, Widget::Select);
        assert_eq!(form.birth_country.choices.len(), 3);
        assert_eq!(form.home_country.choice_label("2"), Some("Germany"));
        assert_eq!(form.countries().len(), 3);
    }

    #[test]
    fn test_valid_submission() {
        let response = BackgroundForm::new(&countries()).validate(&valid_data()).unwrap();
        assert_eq!(response.birth_country, country(1, "Egypt"));
        assert_eq!(response.home_country, country(3, "United States"));
        assert!(response.is_pro_translator);
        assert_eq!(response.hours_per_week, 20);
    }

    #[test]
    fn test_unknown_country_then_row_added() {
        let mut data = valid_data();
        data.insert("home_country", "4");

        let errors = BackgroundForm::new(&countries()).validate(&data).unwrap_err();
        assert_eq!(
            errors.get("home_country"),
            &["Select a valid choice. That choice is not one of the available choices.".to_string()]
        );

        let mut rows = countries();
        rows.push(country(4, "Peru"));
        let response = BackgroundForm::new(&rows).validate(&data).unwrap();
        assert_eq!(response.home_country, country(4, "Peru"));
    }

    #[test]
    fn test_yes_no_coerces_to_bool() {
        let form = BackgroundForm::new(&countries());
        let mut data = valid_data();

        data.insert("is_pro_translator", "True");
        assert!(form.validate(&data).unwrap().is_pro_translator);

        data.insert("is_pro_translator", "False");
        assert!(!form.validate(&data).unwrap().is_pro_translator);

        data.remove("is_pro_translator");
        let errors = form.validate(&data).unwrap_err();
        assert_eq!(errors.get("is_pro_translator"), &["This field is required.".to_string()]);
    }

    #[test]
    fn test_required_fields_use_custom_message() {
        let errors = BackgroundForm::new(&countries())
            .validate(&FormData::new())
            .unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in ["birth_country", "home_country", "hours_per_week"] {
            assert_eq!(errors.get(field), &[REQUIRED_FIELD.to_string()]);
        }
    }

    #[test]
    fn test_hours_must_be_whole_number() {
        let mut data = valid_data();
        data.insert("hours_per_week", "about ten");
        let errors = BackgroundForm::new(&countries()).validate(&data).unwrap_err();
        assert_eq!(errors.get("hours_per_week"), &["Enter a whole number.".to_string()]);
    }

    #[test]
    fn test_empty_catalog_rejects_every_country() {
        let errors = BackgroundForm::new(&[]).validate(&valid_data()).unwrap_err();
        assert!(errors.contains("birth_country"));
        assert!(errors.contains("home_country"));
        assert!(!errors.contains("hours_per_week"));
    }

    #[test]
    fn test_round_trip() {
        let form = BackgroundForm::new(&countries());
        let first = form.validate(&valid_data()).unwrap();
        let second = form.validate(&first.to_form_data()).unwrap();
        assert_eq!(first, second);
    }
}

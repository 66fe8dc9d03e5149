//! Dispatch over the available forms

use super::background::BackgroundForm;
use super::data::FormData;
use super::errors::FormErrors;
use super::field::FormField;
use super::form::Form;
use super::survey::SurveyForm;
use super::translation::TranslationInputForm;
use crate::catalog::CatalogSource;
use anyhow::Result;
use serde::Serialize;

/// Enum naming every form the view layer can process
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormKind {
    Survey,
    Background,
    Translation,
}

/// Verdict of one validated submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Valid { cleaned_data: serde_json::Value },
    Invalid { errors: FormErrors },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid { .. })
    }
}

fn run<F>(form: &F, data: &FormData) -> Result<Outcome>
where
    F: Form,
    F::Cleaned: Serialize,
{
    let outcome = match form.validate(data) {
        Ok(cleaned) => Outcome::Valid {
            cleaned_data: serde_json::to_value(&cleaned)?,
        },
        Err(errors) => Outcome::Invalid { errors },
    };
    tracing::debug!(form = form.name(), valid = outcome.is_valid(), "Processed submission");
    Ok(outcome)
}

fn owned_fields<F: Form>(form: &F) -> Vec<FormField> {
    form.fields().into_iter().cloned().collect()
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Survey => "User study survey",
            Self::Background => "Background questionnaire",
            Self::Translation => "Translation",
        }
    }

    /// Field metadata, with model choices populated from the current rows
    pub async fn describe(&self, catalog: &dyn CatalogSource) -> Result<Vec<FormField>> {
        let fields = match self {
            Self::Survey => owned_fields(&SurveyForm::new()),
            Self::Background => owned_fields(&BackgroundForm::new(&catalog.countries().await?)),
            Self::Translation => {
                owned_fields(&TranslationInputForm::new(&catalog.languages().await?))
            }
        };
        Ok(fields)
    }

    /// Validate a payload against the current catalog rows.
    ///
    /// Only catalog failures are errors; rejected payloads are an `Invalid`
    /// outcome.
    pub async fn process(&self, catalog: &dyn CatalogSource, data: &FormData) -> Result<Outcome> {
        match self {
            Self::Survey => run(&SurveyForm::new(), data),
            Self::Background => run(&BackgroundForm::new(&catalog.countries().await?), data),
            Self::Translation => run(&TranslationInputForm::new(&catalog.languages().await?), data),
        }
    }
}

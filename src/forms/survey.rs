//! Post-task user study survey

use super::choices::{Choice, Interface, PartOfSpeech};
use super::clean::{clean_choice, clean_multiple_choice, clean_text};
use super::data::FormData;
use super::errors::{FormErrors, ENTER_ONE_WORD};
use super::field::FormField;
use super::form::{CleanedData, CleanedValue, Form};
use serde::Serialize;
use std::collections::BTreeMap;

/// Final survey of the user study
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub ui_select: FormField,
    pub hyp_likert: FormField,
    pub pos_select: FormField,
    pub txt: FormField,
    pub txt_tgt: FormField,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self {
            ui_select: FormField::choice(
                "ui_select",
                "Which translation interface/method was most efficient?",
                Interface::options(),
            ),
            hyp_likert: FormField::multiple_choice(
                "hyp_likert",
                "The machine-generated translation suggestions were useful:",
                PartOfSpeech::options(),
            ),
            pos_select: FormField::multiple_choice(
                "pos_select",
                "Which word categories were the most difficult to translate?",
                PartOfSpeech::options(),
            ),
            txt: FormField::text(
                "txt",
                "Please describe (in English) the English text that you found most difficult to translate:",
                true,
            )
            .with_min_length(1)
            .with_required_message(ENTER_ONE_WORD),
            txt_tgt: FormField::text(
                "txt_tgt",
                "Please describe (in English) the target text that you found most difficult to generate:",
                true,
            )
            .with_min_length(1)
            .with_required_message(ENTER_ONE_WORD),
        }
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Cleaned survey answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyResponse {
    pub ui_select: Interface,
    pub hyp_likert: Vec<PartOfSpeech>,
    pub pos_select: Vec<PartOfSpeech>,
    pub txt: String,
    pub txt_tgt: String,
}

fn keys(selected: &[PartOfSpeech]) -> Vec<String> {
    selected.iter().map(|p| p.key().to_string()).collect()
}

impl CleanedData for SurveyResponse {
    fn cleaned_data(&self) -> BTreeMap<&'static str, CleanedValue> {
        BTreeMap::from([
            ("ui_select", CleanedValue::Text(self.ui_select.key().to_string())),
            ("hyp_likert", CleanedValue::List(keys(&self.hyp_likert))),
            ("pos_select", CleanedValue::List(keys(&self.pos_select))),
            ("txt", CleanedValue::Text(self.txt.clone())),
            ("txt_tgt", CleanedValue::Text(self.txt_tgt.clone())),
        ])
    }
}

impl Form for SurveyForm {
    type Cleaned = SurveyResponse;

    fn name(&self) -> &'static str {
        "survey"
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.ui_select,
            &self.hyp_likert,
            &self.pos_select,
            &self.txt,
            &self.txt_tgt,
        ]
    }

    fn validate(&self, data: &FormData) -> Result<SurveyResponse, FormErrors> {
        let mut errors = FormErrors::new();

        let ui_select = errors.record(self.ui_select.name, clean_choice(&self.ui_select, data));
        let hyp_likert = errors.record_all(
            self.hyp_likert.name,
            clean_multiple_choice(&self.hyp_likert, data),
        );
        let pos_select = errors.record_all(
            self.pos_select.name,
            clean_multiple_choice(&self.pos_select, data),
        );
        let txt = errors.record(self.txt.name, clean_text(&self.txt, data));
        let txt_tgt = errors.record(self.txt_tgt.name, clean_text(&self.txt_tgt, data));

        match (ui_select, hyp_likert, pos_select, txt, txt_tgt) {
            (Some(ui_select), Some(hyp_likert), Some(pos_select), Some(txt), Some(txt_tgt))
                if errors.is_empty() =>
            {
                Ok(SurveyResponse {
                    ui_select,
                    hyp_likert,
                    pos_select,
                    txt,
                    txt_tgt,
                })
            }
            _ => {
                tracing::debug!(fields = errors.len(), "survey form rejected");
                Err(errors)
            }
        }
    }
}

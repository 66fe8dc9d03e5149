//! Translation submission with hidden task context

use super::clean::{clean_boolean, clean_integer, clean_model_choice, clean_text};
use super::data::FormData;
use super::errors::{FormErrors, ENTER_ONE_WORD};
use super::field::{FormField, Widget};
use super::form::{CleanedData, CleanedValue, Form};
use crate::catalog::{row_options, LanguageSpec};
use serde::Serialize;
use std::collections::BTreeMap;

/// Validates a translation submitted by a user.
///
/// Everything except `txt` is hidden context echoed back by the page, so a
/// rejected submission can be re-rendered without consulting the session.
#[derive(Debug, Clone)]
pub struct TranslationInputForm {
    /// Source segment being translated
    pub src_id: FormField,
    /// Interface variant the task was rendered with
    pub ui_id: FormField,
    pub tgt_lang: FormField,
    /// Text direction of the target language, e.g. "ltr" or "rtl"
    pub css_direction: FormField,
    /// Serialized log of user actions while translating
    pub action_log: FormField,
    pub is_valid: FormField,
    /// The only field visible to the user
    pub txt: FormField,
    languages: Vec<LanguageSpec>,
}

impl TranslationInputForm {
    pub fn new(languages: &[LanguageSpec]) -> Self {
        Self {
            src_id: FormField::integer("src_id", "").with_widget(Widget::Hidden),
            ui_id: FormField::integer("ui_id", "").with_widget(Widget::Hidden),
            tgt_lang: FormField::model_choice("tgt_lang", "", row_options(languages))
                .with_widget(Widget::Hidden),
            css_direction: FormField::text("css_direction", "", false).with_widget(Widget::Hidden),
            action_log: FormField::text("action_log", "", false).with_widget(Widget::Hidden),
            is_valid: FormField::boolean("is_valid", "", true),
            txt: FormField::text("txt", "", true)
                .with_min_length(1)
                .with_required_message(ENTER_ONE_WORD),
            languages: languages.to_vec(),
        }
    }

    pub fn languages(&self) -> &[LanguageSpec] {
        &self.languages
    }
}

/// Cleaned translation submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationSubmission {
    pub src_id: i64,
    pub ui_id: i64,
    pub tgt_lang: LanguageSpec,
    pub css_direction: String,
    pub action_log: String,
    pub is_valid: bool,
    pub txt: String,
}

impl CleanedData for TranslationSubmission {
    fn cleaned_data(&self) -> BTreeMap<&'static str, CleanedValue> {
        BTreeMap::from([
            ("src_id", CleanedValue::Integer(self.src_id)),
            ("ui_id", CleanedValue::Integer(self.ui_id)),
            ("tgt_lang", CleanedValue::Language(self.tgt_lang.clone())),
            ("css_direction", CleanedValue::Text(self.css_direction.clone())),
            ("action_log", CleanedValue::Text(self.action_log.clone())),
            ("is_valid", CleanedValue::Boolean(self.is_valid)),
            ("txt", CleanedValue::Text(self.txt.clone())),
        ])
    }
}

impl Form for TranslationInputForm {
    type Cleaned = TranslationSubmission;

    fn name(&self) -> &'static str {
        "translation"
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.src_id,
            &self.ui_id,
            &self.tgt_lang,
            &self.css_direction,
            &self.action_log,
            &self.is_valid,
            &self.txt,
        ]
    }

    fn validate(&self, data: &FormData) -> Result<TranslationSubmission, FormErrors> {
        let mut errors = FormErrors::new();

        let src_id = errors.record(self.src_id.name, clean_integer(&self.src_id, data));
        let ui_id = errors.record(self.ui_id.name, clean_integer(&self.ui_id, data));
        let tgt_lang = errors.record(
            self.tgt_lang.name,
            clean_model_choice(&self.tgt_lang, data, &self.languages),
        );
        let css_direction = errors.record(
            self.css_direction.name,
            clean_text(&self.css_direction, data),
        );
        let action_log = errors.record(self.action_log.name, clean_text(&self.action_log, data));
        let is_valid = errors.record(self.is_valid.name, clean_boolean(&self.is_valid, data));
        let txt = errors.record(self.txt.name, clean_text(&self.txt, data));

        match (src_id, ui_id, tgt_lang, css_direction, action_log, is_valid, txt) {
            (
                Some(src_id),
                Some(ui_id),
                Some(tgt_lang),
                Some(css_direction),
                Some(action_log),
                Some(is_valid),
                Some(txt),
            ) if errors.is_empty() => Ok(TranslationSubmission {
                src_id,
                ui_id,
                tgt_lang,
                css_direction,
                action_log,
                is_valid,
                txt,
            }),
            _ => {
                tracing::debug!(fields = errors.len(), "translation form rejected");
                Err(errors)
            }
        }
    }
}

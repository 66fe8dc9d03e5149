//! Form domain layer
//!
//! Field declarations, cleaning and validation for the study forms:
//! - `survey`: post-task survey
//! - `background`: one-time participant questionnaire
//! - `translation`: translation submission with hidden task context

mod background;
mod choices;
mod clean;
mod data;
mod errors;
mod field;
mod form;
mod kind;
mod survey;
mod translation;

pub use background::{BackgroundForm, BackgroundResponse};
pub use choices::{Choice, Interface, Likert, PartOfSpeech};
pub use clean::parse_integer;
pub use data::FormData;
pub use errors::{FieldError, FormErrors, DEFAULT_REQUIRED, ENTER_ONE_WORD, REQUIRED_FIELD};
pub use field::{bool_key, parse_bool, ChoiceOption, FieldKind, FormField, Widget};
pub use form::{CleanedData, CleanedValue, Form};
pub use kind::{FormKind, Outcome};
pub use survey::{SurveyForm, SurveyResponse};
pub use translation::{TranslationInputForm, TranslationSubmission};

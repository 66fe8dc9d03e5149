//! tm-forms - forms for translation-memory user studies
//!
//! Declares and validates the post-task survey, the participant background
//! questionnaire and the translation submission form. Country and language
//! lookup rows are supplied by a [`catalog::CatalogSource`].

pub mod catalog;
pub mod config;
pub mod forms;
pub mod render;

pub use catalog::{CatalogSource, Country, JsonCatalog, LanguageSpec, StaticCatalog};
pub use forms::{
    BackgroundForm, CleanedData, CleanedValue, FieldError, Form, FormData, FormErrors, FormField,
    FormKind, Outcome, SurveyForm, TranslationInputForm, Widget,
};

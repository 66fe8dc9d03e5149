//! Form field declarations and rendering metadata

use super::errors::{FieldError, DEFAULT_REQUIRED};
use serde::Serialize;

/// Recommended widget category for rendering a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// One option out of a small fixed set
    RadioSelect,
    /// Zero or more options out of a fixed set
    CheckboxSelectMultiple,
    /// Caller-supplied context, not shown to the user
    Hidden,
    TextInput,
    Textarea,
    /// Dropdown, used for long option lists
    Select,
}

impl Widget {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

/// How submitted values for a field are cleaned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    /// Optional flag; falls back to the field's initial value when absent
    Boolean,
    Choice,
    MultipleChoice,
    /// Choice over the primary keys of an external lookup table
    ModelChoice,
    /// Yes/no choice coerced to a boolean
    TypedChoice,
}

/// A selectable option shown for choice fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Represents a single form field with its configuration
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub widget: Widget,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceOption>,
}

impl FormField {
    fn base(name: &'static str, label: &'static str, kind: FieldKind, widget: Widget) -> Self {
        Self {
            name,
            label,
            kind,
            widget,
            required: true,
            min_length: None,
            required_message: None,
            initial: None,
            choices: Vec::new(),
        }
    }

    /// Create a new required text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        let widget = if is_multiline {
            Widget::Textarea
        } else {
            Widget::TextInput
        };
        Self::base(name, label, FieldKind::Text, widget)
    }

    /// Create a new required integer field
    pub fn integer(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Integer, Widget::TextInput)
    }

    /// Create an optional boolean flag with a default used when it is omitted
    pub fn boolean(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            required: false,
            initial: Some(bool_key(default).to_string()),
            ..Self::base(name, label, FieldKind::Boolean, Widget::Hidden)
        }
    }

    /// Create a new required single-choice field over a fixed option set
    pub fn choice(name: &'static str, label: &'static str, choices: Vec<ChoiceOption>) -> Self {
        Self {
            choices,
            ..Self::base(name, label, FieldKind::Choice, Widget::RadioSelect)
        }
    }

    /// Create an optional multi-choice field; zero selections are accepted
    pub fn multiple_choice(
        name: &'static str,
        label: &'static str,
        choices: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            required: false,
            choices,
            ..Self::base(
                name,
                label,
                FieldKind::MultipleChoice,
                Widget::CheckboxSelectMultiple,
            )
        }
    }

    /// Create a required choice over lookup rows, options are the rows' keys
    pub fn model_choice(name: &'static str, label: &'static str, choices: Vec<ChoiceOption>) -> Self {
        Self {
            choices,
            ..Self::base(name, label, FieldKind::ModelChoice, Widget::Select)
        }
    }

    /// Create a required Yes/No choice that cleans to a boolean
    pub fn yes_no(name: &'static str, label: &'static str) -> Self {
        Self {
            choices: vec![
                ChoiceOption::new(bool_key(true), "Yes"),
                ChoiceOption::new(bool_key(false), "No"),
            ],
            ..Self::base(name, label, FieldKind::TypedChoice, Widget::RadioSelect)
        }
    }

    /// Override the recommended widget
    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Replace the default "required" message
    pub fn with_required_message(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    /// The error reported when this field is missing
    pub fn required_error(&self) -> FieldError {
        FieldError::Required(self.required_message.unwrap_or(DEFAULT_REQUIRED).to_string())
    }

    pub fn is_hidden(&self) -> bool {
        self.widget.is_hidden()
    }

    /// Get the label of the option with the given key
    pub fn choice_label(&self, key: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
    }
}

/// Submitted key for a boolean value
pub fn bool_key(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Parse a submitted boolean, accepting the usual spellings in any case
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

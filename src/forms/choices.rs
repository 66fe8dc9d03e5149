//! Fixed choice sets used by the study forms

use super::field::ChoiceOption;
use serde::Serialize;

/// A value out of a fixed, declared option set
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Submitted key
    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Options for rendering
    fn options() -> Vec<ChoiceOption> {
        Self::ALL
            .iter()
            .map(|c| ChoiceOption::new(c.key(), c.label()))
            .collect()
    }
}

/// Translation interface shown during the study.
/// Keys match the interface names the experiment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interface {
    #[serde(rename = "tr")]
    BlankTextbox,
    #[serde(rename = "meedan")]
    PostEdit,
}

impl Choice for Interface {
    const ALL: &'static [Self] = &[Self::BlankTextbox, Self::PostEdit];

    fn key(&self) -> &'static str {
        match self {
            Self::BlankTextbox => "tr",
            Self::PostEdit => "meedan",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::BlankTextbox => "Blank textbox (Interface A)",
            Self::PostEdit => "Editing suggested translation (Interface B)",
        }
    }
}

/// Basic POS categories that may be difficult to translate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOfSpeech {
    #[serde(rename = "N")]
    Noun,
    #[serde(rename = "A")]
    Adjective,
    #[serde(rename = "V")]
    Verb,
    #[serde(rename = "P")]
    Preposition,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "O")]
    Other,
}

impl Choice for PartOfSpeech {
    const ALL: &'static [Self] = &[
        Self::Noun,
        Self::Adjective,
        Self::Verb,
        Self::Preposition,
        Self::Adverb,
        Self::Other,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::Noun => "N",
            Self::Adjective => "A",
            Self::Verb => "V",
            Self::Preposition => "P",
            Self::Adverb => "ADV",
            Self::Other => "O",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Noun => "Nouns",
            Self::Adjective => "Adjectives",
            Self::Verb => "Verbs",
            Self::Preposition => "Prepositions",
            Self::Adverb => "Adverbs",
            Self::Other => "Other",
        }
    }
}

/// Five-point agreement scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Likert {
    #[serde(rename = "1")]
    StronglyDisagree,
    #[serde(rename = "2")]
    Disagree,
    #[serde(rename = "3")]
    Neutral,
    #[serde(rename = "4")]
    Agree,
    #[serde(rename = "5")]
    StronglyAgree,
}

impl Choice for Likert {
    const ALL: &'static [Self] = &[
        Self::StronglyDisagree,
        Self::Disagree,
        Self::Neutral,
        Self::Agree,
        Self::StronglyAgree,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::StronglyDisagree => "1",
            Self::Disagree => "2",
            Self::Neutral => "3",
            Self::Agree => "4",
            Self::StronglyAgree => "5",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }
}

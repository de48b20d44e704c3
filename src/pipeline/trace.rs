//! Step-by-step record of a pipeline run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pipeline stage, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Original,
    Lowercase,
    SocialNoise,
    Emoji,
    Normalize,
    Numbers,
    Punctuation,
    SpecialChars,
    Whitespace,
    Tokenize,
    Negation,
    Stopwords,
    SpellCheck,
    Lemmatize,
    Stem,
    Cleanup,
    Final,
}

impl Stage {
    /// Stage number as shown in traces; lemmatization and stemming share 13.
    pub fn number(&self) -> u8 {
        match self {
            Stage::Original => 0,
            Stage::Lowercase => 1,
            Stage::SocialNoise => 2,
            Stage::Emoji => 3,
            Stage::Normalize => 4,
            Stage::Numbers => 5,
            Stage::Punctuation => 6,
            Stage::SpecialChars => 7,
            Stage::Whitespace => 8,
            Stage::Tokenize => 9,
            Stage::Negation => 10,
            Stage::Stopwords => 11,
            Stage::SpellCheck => 12,
            Stage::Lemmatize | Stage::Stem => 13,
            Stage::Cleanup => 14,
            Stage::Final => 15,
        }
    }

    /// Human-readable stage name.
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Original => "Original Text",
            Stage::Lowercase => "Lowercase",
            Stage::SocialNoise => "Remove URLs/Social",
            Stage::Emoji => "Remove Emojis",
            Stage::Normalize => "Normalize Characters",
            Stage::Numbers => "Remove Numbers",
            Stage::Punctuation => "Remove Punctuation",
            Stage::SpecialChars => "Remove Special Chars",
            Stage::Whitespace => "Clean Whitespace",
            Stage::Tokenize => "Tokenization",
            Stage::Negation => "Handle Negations",
            Stage::Stopwords => "Remove Stopwords",
            Stage::SpellCheck => "Spell Check",
            Stage::Lemmatize => "Lemmatization",
            Stage::Stem => "Stemming",
            Stage::Cleanup => "Final Token Cleanup",
            Stage::Final => "Final Result",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// The text after one stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStep {
    pub stage: Stage,
    pub text: String,
}

/// Intermediate texts of the stages that ran, plus the final output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTrace {
    pub steps: Vec<StageStep>,
    pub output: String,
}

impl StageTrace {
    /// Text recorded for `stage`, if it ran.
    pub fn text_at(&self, stage: Stage) -> Option<&str> {
        self.steps
            .iter()
            .find(|step| step.stage == stage)
            .map(|step| step.text.as_str())
    }

    /// Stages in the order they ran.
    pub fn stages(&self) -> Vec<Stage> {
        self.steps.iter().map(|step| step.stage).collect()
    }
}

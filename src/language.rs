//! Supported text languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MetinError, Result};

/// The languages the cleaning pipeline knows how to handle.
///
/// Serialized with lowercase names (`"turkish"`, `"english"`), which is also the
/// key format of the persisted stopword file.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Turkish,
    English,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Turkish, Language::English];

    /// The lowercase name used in files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
        }
    }

    /// Single-letter words that survive tokenization for this language.
    pub fn single_letter_words(&self) -> &'static [&'static str] {
        match self {
            Language::Turkish => &["a", "e", "i", "o", "u", "ı", "ö", "ü"],
            Language::English => &["a", "i", "o", "u", "e"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = MetinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "turkish" | "tr" | "türkçe" => Ok(Language::Turkish),
            "english" | "en" => Ok(Language::English),
            other => Err(MetinError::invalid_argument(format!(
                "Unsupported language: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("turkish".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!("TR".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert!("german".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_names() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"english\"");

        let lang: Language = serde_json::from_str("\"turkish\"").unwrap();
        assert_eq!(lang, Language::Turkish);
    }
}

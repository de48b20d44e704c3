//! Language-specific character normalization.

use super::CharFilter;
use crate::language::Language;

/// Character mappings applied before digits and punctuation are stripped.
///
/// Both tables are currently empty: Turkish text is passed through untouched
/// and the stage only reserves its place in the stage order.
const TURKISH_MAPPINGS: &[(&str, &str)] = &[];
const ENGLISH_MAPPINGS: &[(&str, &str)] = &[];

/// Applies the mapping table of one language.
#[derive(Clone, Debug)]
pub struct LanguageNormalizeCharFilter {
    language: Language,
    mappings: &'static [(&'static str, &'static str)],
}

impl LanguageNormalizeCharFilter {
    /// Create the normalizer for `language`.
    pub fn new(language: Language) -> Self {
        let mappings = match language {
            Language::Turkish => TURKISH_MAPPINGS,
            Language::English => ENGLISH_MAPPINGS,
        };
        LanguageNormalizeCharFilter { language, mappings }
    }

    /// The language this normalizer belongs to.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl CharFilter for LanguageNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        self.mappings
            .iter()
            .fold(input.to_string(), |text, (from, to)| text.replace(from, to))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}

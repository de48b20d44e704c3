//! Simple English stemmer.

use super::Stemmer;
use crate::analysis::token_filter::negation::reads_as_negated;
use crate::language::Language;

/// English stemmer that strips the longest matching suffix from a small list.
///
/// A suffix is removed only when the word is more than two characters longer
/// than it and the remaining stem would not read as negated (`presents` keeps
/// its `s` because `present` ends in `nt`).
#[derive(Debug, Clone)]
pub struct EnglishStemmer {
    /// Suffixes to remove, longest first.
    suffixes: Vec<String>,
}

impl EnglishStemmer {
    /// Create a new English stemmer.
    pub fn new() -> Self {
        Self::with_suffixes(
            ["ing", "ed", "er", "est", "ly", "tion", "ness", "ment", "s"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Create an English stemmer with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        EnglishStemmer { suffixes }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let word_len = word.chars().count();

        for suffix in &self.suffixes {
            let suffix_len = suffix.chars().count();
            if word_len > suffix_len + 2 && lower.ends_with(suffix.as_str()) {
                let stem: String = word.chars().take(word_len - suffix_len).collect();
                if !reads_as_negated(Language::English, &stem) {
                    return stem;
                }
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

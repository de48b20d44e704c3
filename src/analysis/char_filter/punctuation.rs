//! ASCII punctuation removal.

use super::CharFilter;

/// Removes ASCII punctuation characters.
///
/// The underscore is kept: it is a word character and joins rendered
/// negation tags (`güzel_NEG`) and lemma bigrams, so already-processed text
/// survives a second pass.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation char filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .filter(|&c| c == '_' || !c.is_ascii_punctuation())
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

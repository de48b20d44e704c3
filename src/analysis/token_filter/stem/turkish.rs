//! Conservative Turkish suffix stripper.
//!
//! Only a short list of inflectional suffixes is removed (plural, genitive,
//! ablative, locative and instrumental forms). A suffix is stripped when the
//! word is more than three characters longer than the suffix, the remaining
//! stem keeps at least three characters, and the stem is not one of the words
//! known to be damaged by stemming. A stem that the negation pass would read
//! as negated (`ödemeler` to `ödeme`) is rejected as well, so cleaning the
//! output again does not invent a `_NEG` tag.

use std::collections::HashSet;

use super::Stemmer;
use crate::analysis::token_filter::negation::reads_as_negated;
use crate::language::Language;

const SUFFIXES: &[&str] = &[
    "ları", "leri", // plural possessive
    "ların", "lerin", // plural genitive
    "lardan", "lerden", // plural ablative
    "larda", "lerde", // plural locative
    "lar", "ler", // plural
    "nin", "nın", "nun", "nün", // genitive
    "den", "dan", "ten", "tan", // ablative
    "nde", "nda", // locative
    "ile", "le", // instrumental
];

const OVER_STEMMING_GUARD: &[&str] = &["havalimanı", "yoğun", "güzel", "mükemmel"];

const MIN_WORD_LENGTH: usize = 4;
const MIN_STEM_LENGTH: usize = 3;

/// Turkish stemmer with an over-stemming guard.
#[derive(Debug, Clone)]
pub struct TurkishStemmer {
    /// Suffixes, longest first.
    suffixes: Vec<&'static str>,
    guard: HashSet<&'static str>,
}

impl TurkishStemmer {
    /// Create a new Turkish stemmer.
    pub fn new() -> Self {
        let mut suffixes = SUFFIXES.to_vec();
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        TurkishStemmer {
            suffixes,
            guard: OVER_STEMMING_GUARD.iter().copied().collect(),
        }
    }

    fn is_over_stemmed(&self, stem: &str) -> bool {
        stem.chars().count() < MIN_STEM_LENGTH
            || self.guard.contains(stem.to_lowercase().as_str())
            || reads_as_negated(Language::Turkish, stem)
    }
}

impl Default for TurkishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for TurkishStemmer {
    fn stem(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_WORD_LENGTH {
            return word.to_string();
        }

        for suffix in &self.suffixes {
            let suffix_len = suffix.chars().count();
            if chars.len() <= suffix_len + 3 {
                continue;
            }

            let split = chars.len() - suffix_len;
            let tail: String = chars[split..].iter().collect();
            if tail.to_lowercase() != *suffix {
                continue;
            }

            let stem: String = chars[..split].iter().collect();
            if !self.is_over_stemmed(&stem) {
                return stem;
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

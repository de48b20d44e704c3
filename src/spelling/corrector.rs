//! Main spelling corrector that combines the correction sources.
//!
//! For each token that is not negation-tagged and has at least three
//! characters, the corrector tries in order:
//!
//! 1. the user [`CorrectionDictionary`] (when custom corrections are enabled)
//! 2. for English, the optional [`DictionaryChecker`]
//! 3. for Turkish, the [`PatternCorrector`]
//!
//! The first source that applies decides the result.

use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::language::Language;
use crate::spelling::checker::DictionaryChecker;
use crate::spelling::dictionary::CorrectionDictionary;
use crate::spelling::pattern::PatternCorrector;

/// Tokens shorter than this are never corrected.
pub const MIN_CORRECTION_LENGTH: usize = 3;

/// Spelling corrector over shared, read-only correction sources.
#[derive(Clone)]
pub struct SpellCorrector {
    dictionary: Arc<CorrectionDictionary>,
    patterns: Arc<PatternCorrector>,
    checker: Option<Arc<dyn DictionaryChecker>>,
    use_custom: bool,
}

impl std::fmt::Debug for SpellCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCorrector")
            .field("dictionary_entries", &self.dictionary.len())
            .field("checker", &self.checker.as_ref().map(|c| c.name()))
            .field("use_custom", &self.use_custom)
            .finish()
    }
}

impl SpellCorrector {
    /// Create a corrector without an English checker.
    pub fn new(dictionary: Arc<CorrectionDictionary>, patterns: Arc<PatternCorrector>) -> Self {
        SpellCorrector {
            dictionary,
            patterns,
            checker: None,
            use_custom: true,
        }
    }

    /// Attach the dictionary checker used for English tokens.
    pub fn with_checker(mut self, checker: Option<Arc<dyn DictionaryChecker>>) -> Self {
        self.checker = checker;
        self
    }

    /// Enable or disable lookups in the correction dictionary.
    pub fn with_custom_corrections(mut self, enabled: bool) -> Self {
        self.use_custom = enabled;
        self
    }

    /// Whether an English checker is attached.
    pub fn has_checker(&self) -> bool {
        self.checker.is_some()
    }

    /// Correct a single word. Negation tags are not recognised here.
    pub fn correct_word(&self, word: &str, language: Language) -> String {
        if word.chars().count() < MIN_CORRECTION_LENGTH {
            return word.to_string();
        }

        if self.use_custom
            && let Some(replacement) = self.dictionary.get(word)
        {
            debug!("Custom correction: {word} -> {replacement}");
            return replacement.to_string();
        }

        match language {
            Language::English => self.correct_english(word),
            Language::Turkish => self.patterns.correct(word),
        }
    }

    fn correct_english(&self, word: &str) -> String {
        let Some(checker) = &self.checker else {
            return word.to_string();
        };

        let lower = word.to_lowercase();
        if checker.is_known(&lower) {
            return word.to_string();
        }
        match checker.suggest(&lower) {
            Some(suggestion) if suggestion != lower => {
                debug!("Dictionary correction: {word} -> {suggestion}");
                suggestion
            }
            _ => word.to_string(),
        }
    }

    /// Correct a token, leaving negation-tagged tokens untouched.
    pub fn correct_token(&self, token: &Token, language: Language) -> Token {
        if token.is_negated() {
            return token.clone();
        }
        token.with_text(self.correct_word(&token.text, language))
    }

    /// Correct a sequence of surface tokens.
    ///
    /// Tokens ending in a rendered negation tag are passed through as given.
    pub fn correct<S: AsRef<str>>(&self, tokens: &[S], language: Language) -> Vec<String> {
        tokens
            .iter()
            .map(|surface| {
                let surface = surface.as_ref();
                if Token::from_surface(surface, 0).is_negated() {
                    surface.to_string()
                } else {
                    self.correct_word(surface, language)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::NegationTag;
    use crate::spelling::checker::FrequencyChecker;

    fn corrector(pairs: &[(&str, &str)]) -> SpellCorrector {
        SpellCorrector::new(
            Arc::new(CorrectionDictionary::from_pairs(pairs.iter().copied())),
            Arc::new(PatternCorrector::new().unwrap()),
        )
    }

    #[test]
    fn test_dictionary_takes_precedence() {
        // "porgram" is also a pattern-table entry
        let corrector = corrector(&[("porgram", "programlama")]);
        assert_eq!(
            corrector.correct_word("porgram", Language::Turkish),
            "programlama"
        );

        let corrector = corrector.with_custom_corrections(false);
        assert_eq!(corrector.correct_word("porgram", Language::Turkish), "program");
    }

    #[test]
    fn test_short_and_negated_tokens_skipped() {
        let corrector = corrector(&[("ok", "okey"), ("gzl", "güzel")]);
        assert_eq!(corrector.correct_word("ok", Language::Turkish), "ok");

        let token = Token::new("gzl", 0).with_negation(NegationTag::Neg);
        assert_eq!(corrector.correct_token(&token, Language::Turkish), token);

        let corrected = corrector.correct(&["gzl_NEG", "gzl"], Language::Turkish);
        assert_eq!(corrected, ["gzl_NEG", "güzel"]);
    }

    #[test]
    fn test_english_uses_checker() {
        let checker: Arc<dyn DictionaryChecker> =
            Arc::new(FrequencyChecker::from_words(["quality", "product"]));
        let corrector = corrector(&[]).with_checker(Some(checker));

        assert_eq!(corrector.correct_word("qualty", Language::English), "quality");
        assert_eq!(corrector.correct_word("product", Language::English), "product");
        // no suggestion within reach
        assert_eq!(corrector.correct_word("xylophone", Language::English), "xylophone");
    }

    #[test]
    fn test_english_without_checker_keeps_words() {
        let corrector = corrector(&[]);
        assert!(!corrector.has_checker());
        // Turkish patterns do not apply to English text
        assert_eq!(corrector.correct_word("goooood", Language::English), "goooood");
    }
}

//! Word tokenizer.
//!
//! Splits text on Unicode word boundaries (UAX #29) and drops segments that
//! contain no letters or digits. Words shorter than two characters are removed
//! unless they are one of the language's single-letter words.
//!
//! # Examples
//!
//! ```
//! use metin::analysis::tokenizer::Tokenizer;
//! use metin::analysis::tokenizer::word::WordTokenizer;
//! use metin::language::Language;
//!
//! let tokenizer = WordTokenizer::new(Language::English);
//! let tokens: Vec<_> = tokenizer.tokenize("a b don't").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "a");
//! assert_eq!(tokens[1].text, "don't");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::language::Language;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Underscores and apostrophes between letters stay inside a word, so rendered
/// negation tags (`iyi_NEG`) come back as one token and are parsed into a tag.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    language: Language,
    min_length: usize,
}

impl WordTokenizer {
    /// Create a new word tokenizer for `language`.
    pub fn new(language: Language) -> Self {
        WordTokenizer {
            language,
            min_length: 2,
        }
    }

    /// The language whose single-letter allowlist is applied.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether `word` passes the minimum-length rule.
    pub fn keeps(&self, word: &str) -> bool {
        if word.chars().count() >= self.min_length {
            return true;
        }
        let lower = word.to_lowercase();
        self.language
            .single_letter_words()
            .iter()
            .any(|w| *w == lower)
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_words()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(|word| Token::from_surface(word, 0))
            .filter(|token| token.is_negated() || self.keeps(&token.text))
            .enumerate()
            .map(|(position, mut token)| {
                token.position = position;
                token
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

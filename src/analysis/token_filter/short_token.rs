//! Short token filter implementation.
//!
//! Final clean-up before tokens are joined: removes empty tokens and
//! single-character tokens that are not one of the vowels standing as words
//! on their own.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const SINGLE_LETTER_WORDS: &[char] = &['a', 'i', 'o', 'u', 'e', 'ı', 'ö', 'ü'];

/// A filter that removes empty and stray single-character tokens.
///
/// Length is measured on the rendered token, so `o_NEG` always survives.
///
/// # Examples
///
/// ```
/// use metin::analysis::token_filter::Filter;
/// use metin::analysis::token_filter::short_token::ShortTokenFilter;
/// use metin::analysis::token::Token;
///
/// let filter = ShortTokenFilter::new();
/// let tokens = vec![Token::new("x", 0), Token::new("o", 1), Token::new("", 2)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "o");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShortTokenFilter;

impl ShortTokenFilter {
    /// Create a new short token filter.
    pub fn new() -> Self {
        ShortTokenFilter
    }

    fn keeps(token: &Token) -> bool {
        if token.is_negated() {
            return !token.is_empty();
        }
        let mut chars = token.text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c
                .to_lowercase()
                .all(|lower| SINGLE_LETTER_WORDS.contains(&lower)),
            _ => true,
        }
    }
}

impl Filter for ShortTokenFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(Self::keeps).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "short_token"
    }
}

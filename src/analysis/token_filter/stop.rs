//! Stop filter implementation.
//!
//! Removes stop words from the token stream. Tokens are compared lowercased
//! and tokens carrying a negation tag are never removed.
//!
//! # Examples
//!
//! ```
//! use metin::analysis::token_filter::Filter;
//! use metin::analysis::token_filter::stop::StopFilter;
//! use metin::analysis::token::{NegationTag, Token};
//!
//! let filter = StopFilter::from_words(vec!["bu", "çok"]);
//! let tokens = vec![
//!     Token::new("Bu", 0),
//!     Token::new("çok", 1).with_negation(NegationTag::Neg),
//!     Token::new("güzel", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].rendered(), "çok_NEG");
//! assert_eq!(result[1].text, "güzel");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// The word set is shared through an [`Arc`], so building a filter from a
/// [`StopwordStore`](crate::stopwords::StopwordStore) snapshot does not copy it.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter over a shared word set.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::new(Arc::new(stop_words))
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| Into::<String>::into(s).to_lowercase())
            .collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_negated() || !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

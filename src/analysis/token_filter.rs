//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by the tokenizer and implement the
//! token-level stages of the cleaning pipeline. Every filter except
//! [`short_token::ShortTokenFilter`] leaves negation-tagged tokens alone.
//!
//! # Available Filters
//!
//! - [`negation::NegationFilter`] - Merges and marks negated tokens
//! - [`stop::StopFilter`] - Removes stop words
//! - [`spelling::SpellCorrectionFilter`] - Dictionary and pattern based correction
//! - [`stem::StemFilter`] - Conservative suffix stripping
//! - [`lemma::LemmaFilter`] - Lemmatization through a morphological analyzer
//! - [`short_token::ShortTokenFilter`] - Drops single-letter leftovers
//!
//! # Examples
//!
//! ```
//! use metin::analysis::token_filter::Filter;
//! use metin::analysis::token_filter::stop::StopFilter;
//! use metin::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["ve", "bu"]);
//! let tokens = vec![Token::new("bu", 0), Token::new("ürün", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "ürün");
//! ```
//!
//! # Filter Chaining
//!
//! The pipeline applies the filters in a fixed order:
//!
//! ```text
//! Tokenizer → Negation → Stop Words → Spelling → Stem/Lemma → Short Tokens
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use metin::analysis::token::{Token, TokenStream};
/// use metin::analysis::token_filter::Filter;
/// use metin::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for logging and traces).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod negation;
pub mod short_token;
pub mod spelling;
pub mod stem;
pub mod stop;

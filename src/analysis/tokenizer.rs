//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a cleaned record into word tokens. They carry no state
//! between calls, so one instance can serve every record of a batch.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries with a minimum-length rule
//! - [`whitespace::WhitespaceTokenizer`] - Plain whitespace split, used as the fallback
//!
//! # Examples
//!
//! ```
//! use metin::analysis::tokenizer::Tokenizer;
//! use metin::analysis::tokenizer::word::WordTokenizer;
//! use metin::language::Language;
//!
//! let tokenizer = WordTokenizer::new(Language::Turkish);
//! let tokens: Vec<_> = tokenizer.tokenize("bu bir ürün").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a pipeline can be shared across the
/// worker threads of a batch run.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use metin::analysis::token::{Token, TokenStream};
/// use metin::analysis::tokenizer::Tokenizer;
/// use metin::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for logging and traces).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word;

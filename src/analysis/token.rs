//! Token types for the cleaning pipeline.
//!
//! A [`Token`] carries its text, its position in the stream and an optional
//! [`NegationTag`]. The tag is kept apart from the text so later stages can
//! test it without string matching; it is rendered back as a `_NEG` / `_NOT`
//! suffix when tokens are joined.
//!
//! # Examples
//!
//! ```
//! use metin::analysis::token::{NegationTag, Token};
//!
//! let token = Token::new("güzel", 0).with_negation(NegationTag::Neg);
//! assert!(token.is_negated());
//! assert_eq!(token.to_string(), "güzel_NEG");
//!
//! // Rendered tags are recognised again on the way in.
//! let parsed = Token::from_surface("güzel_neg", 0);
//! assert_eq!(parsed.text, "güzel");
//! assert_eq!(parsed.negation, Some(NegationTag::Neg));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker attached to a token that falls under negation scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegationTag {
    /// Produced by a negation word or a Turkish negative suffix.
    Neg,
    /// Produced by an English contraction such as `n't`.
    Not,
}

impl NegationTag {
    /// The suffix used when the tag is rendered into text.
    pub fn suffix(&self) -> &'static str {
        match self {
            NegationTag::Neg => "_NEG",
            NegationTag::Not => "_NOT",
        }
    }

    /// Split a rendered tag off the end of `surface`, ignoring case.
    ///
    /// Returns `None` when there is no tag or nothing precedes it.
    pub fn strip_suffix(surface: &str) -> Option<(&str, NegationTag)> {
        for tag in [NegationTag::Neg, NegationTag::Not] {
            let suffix = tag.suffix();
            if surface.len() > suffix.len() {
                let split = surface.len() - suffix.len();
                if surface.is_char_boundary(split)
                    && surface[split..].eq_ignore_ascii_case(suffix)
                {
                    return Some((&surface[..split], tag));
                }
            }
        }
        None
    }

    /// Find a rendered tag anywhere inside `surface` (case-sensitive, as rendered).
    pub fn find_in(surface: &str) -> Option<NegationTag> {
        if surface.contains(NegationTag::Neg.suffix()) {
            Some(NegationTag::Neg)
        } else if surface.contains(NegationTag::Not.suffix()) {
            Some(NegationTag::Not)
        } else {
            None
        }
    }
}

/// A single word flowing through the token stages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, without any negation suffix
    pub text: String,

    /// The position of the token in the tokenizer output (0-based)
    pub position: usize,

    /// Negation tag, if the token is under negation scope
    pub negation: Option<NegationTag>,
}

impl Token {
    /// Create a new untagged token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            negation: None,
        }
    }

    /// Create a token from surface text, recognising a rendered negation suffix.
    pub fn from_surface(surface: &str, position: usize) -> Self {
        match NegationTag::strip_suffix(surface) {
            Some((base, tag)) => Token::new(base, position).with_negation(tag),
            None => Token::new(surface, position),
        }
    }

    /// Attach a negation tag.
    pub fn with_negation(mut self, tag: NegationTag) -> Self {
        self.negation = Some(tag);
        self
    }

    /// Clone this token with updated text, keeping position and tag.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Whether the token carries a negation tag.
    pub fn is_negated(&self) -> bool {
        self.negation.is_some()
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text with its negation suffix, as written to the output.
    pub fn rendered(&self) -> String {
        match self.negation {
            Some(tag) => format!("{}{}", self.text, tag.suffix()),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.negation {
            Some(tag) => write!(f, "{}{}", self.text, tag.suffix()),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A token stream represents a sequence of tokens between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Join tokens with single spaces using their rendered form.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::rendered)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

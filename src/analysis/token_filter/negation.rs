//! Negation tagging.
//!
//! A single left-to-right pass that attaches a [`NegationTag`] to tokens in
//! negation scope:
//!
//! - a negation word (`değil`, `not`, …) is merged into the following token,
//!   which is tagged `_NEG`; at the end of the stream it tags the preceding
//!   token instead, or itself when there is none;
//! - a Turkish word ending in a negative suffix (`-ma`, `-me`, `-maz`, `-mez`)
//!   loses the suffix and is tagged `_NEG`;
//! - an English word ending in a contraction (`n't`, `nt`) loses it and is
//!   tagged `_NOT`.
//!
//! # Examples
//!
//! ```
//! use metin::analysis::token_filter::negation::NegationFilter;
//! use metin::language::Language;
//!
//! let tagger = NegationFilter::new(Language::Turkish);
//! assert_eq!(tagger.tag_words(&["değil", "güzel"]), ["güzel_NEG"]);
//!
//! let tagger = NegationFilter::new(Language::English);
//! assert_eq!(tagger.tag_words(&["don't", "like"]), ["do_NOT", "like"]);
//! ```

use std::collections::HashSet;

use crate::analysis::token::{NegationTag, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::language::Language;

const TURKISH_NEGATION_WORDS: &[&str] = &[
    "değil", "yok", "hiç", "asla", "hayır", "olmaz", "imkansız",
];

const ENGLISH_NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere", "neither",
];

const TURKISH_NEGATION_SUFFIXES: &[&str] = &["ma", "me", "maz", "mez"];

const ENGLISH_CONTRACTIONS: &[&str] = &["n't", "nt"];

/// Marks tokens that fall under negation scope.
#[derive(Clone, Debug)]
pub struct NegationFilter {
    language: Language,
    words: HashSet<&'static str>,
}

impl NegationFilter {
    /// Create a negation tagger for `language`.
    pub fn new(language: Language) -> Self {
        let words = match language {
            Language::Turkish => TURKISH_NEGATION_WORDS,
            Language::English => ENGLISH_NEGATION_WORDS,
        };
        NegationFilter {
            language,
            words: words.iter().copied().collect(),
        }
    }

    /// Whether `word` (compared lowercased) is a negation word.
    pub fn is_negation_word(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Tag a token sequence. The result is the same length or shorter.
    pub fn tag(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut tagged: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];

            if token.is_negated() {
                tagged.push(token.clone());
                i += 1;
                continue;
            }

            if self.is_negation_word(&token.text) {
                if let Some(next) = tokens.get(i + 1) {
                    let mut merged = next.clone();
                    merged.negation.get_or_insert(NegationTag::Neg);
                    tagged.push(merged);
                    i += 2;
                } else {
                    let retag_previous = tagged.last().is_some_and(|prev| !prev.is_negated());
                    if let Some(prev) = tagged.last_mut()
                        && retag_previous
                    {
                        prev.negation = Some(NegationTag::Neg);
                    } else {
                        tagged.push(token.clone().with_negation(NegationTag::Neg));
                    }
                    i += 1;
                }
                continue;
            }

            let marked = match self.language {
                Language::Turkish => strip_turkish_suffix(&token.text)
                    .map(|stem| token.with_text(stem).with_negation(NegationTag::Neg)),
                Language::English => strip_contraction(&token.text)
                    .map(|base| token.with_text(base).with_negation(NegationTag::Not)),
            };
            tagged.push(marked.unwrap_or_else(|| token.clone()));
            i += 1;
        }

        tagged
    }

    /// Tag plain words and return their rendered form.
    pub fn tag_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(word.as_ref(), position))
            .collect();
        self.tag(tokens).iter().map(Token::rendered).collect()
    }
}

/// Whether the negation pass would tag `word` by itself, either as a negation
/// word or through a negative suffix or contraction.
///
/// Stemmers use this to avoid producing a form that reads as negated when the
/// output is cleaned again.
pub fn reads_as_negated(language: Language, word: &str) -> bool {
    let lower = word.to_lowercase();
    match language {
        Language::Turkish => {
            TURKISH_NEGATION_WORDS.contains(&lower.as_str()) || strip_turkish_suffix(word).is_some()
        }
        Language::English => {
            ENGLISH_NEGATION_WORDS.contains(&lower.as_str()) || strip_contraction(word).is_some()
        }
    }
}

/// Strip a Turkish negative suffix, keeping the original casing of the stem.
fn strip_turkish_suffix(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();

    TURKISH_NEGATION_SUFFIXES.iter().find_map(|suffix| {
        let suffix_len = suffix.chars().count();
        if lower.ends_with(suffix) && chars.len() > suffix_len {
            Some(chars[..chars.len() - suffix_len].iter().collect())
        } else {
            None
        }
    })
}

/// Strip an English contraction marker from the lowercased word.
fn strip_contraction(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    ENGLISH_CONTRACTIONS.iter().find_map(|marker| {
        lower
            .strip_suffix(marker)
            .filter(|base| !base.is_empty())
            .map(str::to_string)
    })
}

impl Filter for NegationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let tagged = self.tag(tokens.collect());
        Ok(Box::new(tagged.into_iter()))
    }

    fn name(&self) -> &'static str {
        "negation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_word_merges_with_following() {
        let tagger = NegationFilter::new(Language::Turkish);
        assert_eq!(tagger.tag_words(&["değil", "güzel"]), ["güzel_NEG"]);
        assert_eq!(
            tagger.tag_words(&["hiç", "iyi", "bir", "ürün"]),
            ["iyi_NEG", "bir", "ürün"]
        );

        let tagger = NegationFilter::new(Language::English);
        assert_eq!(tagger.tag_words(&["not", "bad"]), ["bad_NEG"]);
    }

    #[test]
    fn test_trailing_negation_word_tags_previous() {
        let tagger = NegationFilter::new(Language::Turkish);
        assert_eq!(tagger.tag_words(&["güzel", "değil"]), ["güzel_NEG"]);
        assert_eq!(tagger.tag_words(&["değil"]), ["değil_NEG"]);
    }

    #[test]
    fn test_turkish_suffix() {
        let tagger = NegationFilter::new(Language::Turkish);
        assert_eq!(tagger.tag_words(&["gelmez", "ürün"]), ["gel_NEG", "ürün"]);
        assert_eq!(tagger.tag_words(&["sevme"]), ["sev_NEG"]);
        // Nothing left after stripping
        assert_eq!(tagger.tag_words(&["ma"]), ["ma"]);
    }

    #[test]
    fn test_english_contraction() {
        let tagger = NegationFilter::new(Language::English);
        assert_eq!(tagger.tag_words(&["don't", "like"]), ["do_NOT", "like"]);
        assert_eq!(tagger.tag_words(&["Cant", "go"]), ["ca_NOT", "go"]);
        assert_eq!(tagger.tag_words(&["nt"]), ["nt"]);
    }

    #[test]
    fn test_negation_word_takes_precedence() {
        // "asla" would not match a suffix anyway, but "olmaz" ends with "maz".
        let tagger = NegationFilter::new(Language::Turkish);
        assert_eq!(tagger.tag_words(&["olmaz", "böyle"]), ["böyle_NEG"]);
    }

    #[test]
    fn test_tagged_tokens_untouched() {
        let tagger = NegationFilter::new(Language::Turkish);
        let tokens = vec![
            Token::new("iyi", 0).with_negation(NegationTag::Neg),
            Token::new("değil", 1),
        ];
        let rendered: Vec<_> = tagger.tag(tokens).iter().map(Token::rendered).collect();
        assert_eq!(rendered, ["iyi_NEG", "değil_NEG"]);
    }

    #[test]
    fn test_reads_as_negated() {
        assert!(reads_as_negated(Language::Turkish, "ödeme"));
        assert!(reads_as_negated(Language::Turkish, "Olmaz"));
        assert!(!reads_as_negated(Language::Turkish, "ödemeler"));
        assert!(reads_as_negated(Language::English, "present"));
        assert!(reads_as_negated(Language::English, "never"));
        assert!(!reads_as_negated(Language::English, "presents"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NegationFilter::new(Language::English).name(), "negation");
    }
}

//! Interface to an external morphological analyzer.
//!
//! The analyzer itself (a neural lemmatizer or similar) lives outside this
//! crate. The pipeline only needs lemmas and universal part-of-speech tags,
//! and treats the analyzer as optional: when none is ready, the built-in
//! stemmer is used instead.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Universal part-of-speech tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UPos {
    Noun,
    Verb,
    Adj,
    Adv,
    Propn,
    Pron,
    Det,
    Adp,
    Aux,
    Cconj,
    Sconj,
    Num,
    Part,
    Punct,
    Intj,
    Sym,
    X,
}

impl UPos {
    /// Parse a tag such as `"NOUN"`; unknown tags map to [`UPos::X`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "NOUN" => UPos::Noun,
            "VERB" => UPos::Verb,
            "ADJ" => UPos::Adj,
            "ADV" => UPos::Adv,
            "PROPN" => UPos::Propn,
            "PRON" => UPos::Pron,
            "DET" => UPos::Det,
            "ADP" => UPos::Adp,
            "AUX" => UPos::Aux,
            "CCONJ" => UPos::Cconj,
            "SCONJ" => UPos::Sconj,
            "NUM" => UPos::Num,
            "PART" => UPos::Part,
            "PUNCT" => UPos::Punct,
            "INTJ" => UPos::Intj,
            "SYM" => UPos::Sym,
            _ => UPos::X,
        }
    }

    /// Content-word tags whose lemmas are kept.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            UPos::Noun | UPos::Verb | UPos::Adj | UPos::Adv | UPos::Propn
        )
    }
}

/// One analyzed word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedWord {
    /// The word as it appeared in the input
    pub surface: String,
    /// Dictionary form
    pub lemma: String,
    /// Universal part-of-speech tag
    pub upos: UPos,
}

impl AnalyzedWord {
    pub fn new<S: Into<String>, L: Into<String>>(surface: S, lemma: L, upos: UPos) -> Self {
        AnalyzedWord {
            surface: surface.into(),
            lemma: lemma.into(),
            upos,
        }
    }
}

/// A sentence is the analyzer's unit of output.
pub type Sentence = Vec<AnalyzedWord>;

/// A morphological analyzer service.
///
/// Implementations are expected to be warmed up once and then shared across
/// a whole batch; `analyze` is called once per record.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Whether the analyzer is loaded and can be called.
    fn is_ready(&self) -> bool {
        true
    }

    /// Analyze a text into sentences of words.
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upos_from_tag() {
        assert_eq!(UPos::from_tag("NOUN"), UPos::Noun);
        assert_eq!(UPos::from_tag("propn"), UPos::Propn);
        assert_eq!(UPos::from_tag("???"), UPos::X);
    }

    #[test]
    fn test_content_tags() {
        assert!(UPos::Verb.is_content());
        assert!(UPos::Adv.is_content());
        assert!(!UPos::Det.is_content());
        assert!(!UPos::Punct.is_content());
    }
}

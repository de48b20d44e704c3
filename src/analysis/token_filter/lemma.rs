//! Lemmatization through a [`MorphologicalAnalyzer`].
//!
//! The current tokens are joined and handed to the analyzer as one text. Only
//! content words (nouns, verbs, adjectives, adverbs, proper nouns) survive, as
//! lowercased lemmas. A negation tag found in a word's surface form is put back
//! on its lemma. Bigrams of adjacent lemmas, joined with `_`, are appended
//! after the unigrams.

use std::sync::Arc;

use crate::analysis::morphology::MorphologicalAnalyzer;
use crate::analysis::token::{NegationTag, Token, TokenStream, join_tokens};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Replaces tokens with lemmas and lemma bigrams.
#[derive(Clone)]
pub struct LemmaFilter {
    analyzer: Arc<dyn MorphologicalAnalyzer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter over a shared analyzer.
    pub fn new(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        LemmaFilter { analyzer }
    }

    /// Whether the analyzer can be called.
    pub fn is_ready(&self) -> bool {
        self.analyzer.is_ready()
    }

    fn lemmatize(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let text = join_tokens(&tokens);
        if text.is_empty() {
            return Ok(tokens);
        }

        let sentences = self.analyzer.analyze(&text)?;

        let mut lemmas: Vec<Token> = sentences
            .into_iter()
            .flatten()
            .filter(|word| word.upos.is_content())
            .enumerate()
            .map(|(position, word)| {
                let lemma = Token::new(word.lemma.to_lowercase(), position);
                match NegationTag::find_in(&word.surface) {
                    Some(tag) => lemma.with_negation(tag),
                    None => lemma,
                }
            })
            .collect();

        let bigrams: Vec<Token> = lemmas
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                Token::new(
                    format!("{}_{}", pair[0].rendered(), pair[1].rendered()),
                    lemmas.len() + i,
                )
            })
            .collect();
        lemmas.extend(bigrams);

        Ok(lemmas)
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let tokens: Vec<Token> = tokens.collect();
        if !self.is_ready() {
            return Ok(Box::new(tokens.into_iter()));
        }
        let lemmas = self.lemmatize(tokens)?;
        Ok(Box::new(lemmas.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

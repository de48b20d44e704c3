//! Spelling correction filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::language::Language;
use crate::spelling::corrector::SpellCorrector;

/// A filter that runs each token through a [`SpellCorrector`].
///
/// A correction may expand into several words (`herşey` → `her şey`); the
/// result stays a single token and is split again only if the text is
/// re-tokenized.
#[derive(Clone, Debug)]
pub struct SpellCorrectionFilter {
    corrector: SpellCorrector,
    language: Language,
}

impl SpellCorrectionFilter {
    /// Create a new spelling filter for `language`.
    pub fn new(corrector: SpellCorrector, language: Language) -> Self {
        SpellCorrectionFilter {
            corrector,
            language,
        }
    }
}

impl Filter for SpellCorrectionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let corrected: Vec<Token> = tokens
            .map(|token| self.corrector.correct_token(&token, self.language))
            .collect();

        Ok(Box::new(corrected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "spelling"
    }
}

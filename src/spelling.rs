//! Spelling correction for noisy Turkish and English text.
//!
//! Corrections come from three sources, consulted by
//! [`corrector::SpellCorrector`] in a fixed order: the user-maintained
//! [`dictionary::CorrectionDictionary`], the rule tables of
//! [`pattern::PatternCorrector`] for Turkish, and an optional
//! [`checker::DictionaryChecker`] for English. The string similarity helpers
//! are shared with the corpus learner.

pub mod checker;
pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod pattern;
pub mod similarity;

//! Learning correction dictionary entries from processed corpora.
//!
//! A corpus is a set of CSV files holding raw comments next to the text
//! someone already cleaned by hand or with an earlier run. Every raw word that
//! is missing from the cleaned text but closely resembles one of its words is
//! a vote for a correction. Votes are counted over the whole corpus and only
//! well-supported, clear-majority corrections are kept.
//!
//! ```text
//! CSV files → CorpusReader → (raw, processed) records
//!           → CorrectionLearner::observe → CorrectionEvidence
//!           → collapse(min_support, min_share) → wrong → right map
//! ```

pub mod corpus;
pub mod evidence;
pub mod learner;

//! Mining corrections from raw/processed corpus pairs.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info, warn};
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MetinError, Result};
use crate::learning::corpus::{CorpusReader, CorpusRecord};
use crate::learning::evidence::CorrectionEvidence;
use crate::spelling::similarity::closest_match;

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-ZçğıöşüÇĞİÖŞÜ]+").unwrap());

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZçğıöşüÇĞİÖŞÜ]+$").unwrap());

/// Candidates must share this many leading characters with the raw word.
const PREFIX_CHARS: usize = 2;
/// Candidates may differ in length by at most this many characters.
const MAX_LENGTH_DIFF: usize = 3;
/// Words this short fall back to the whole processed vocabulary.
const SHORT_WORD_CHARS: usize = 4;

/// Configuration for [`CorrectionLearner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Column holding the raw text.
    pub raw_column: String,
    /// Column holding the processed text.
    pub processed_column: String,
    /// Minimum votes for the winning candidate.
    pub min_support: usize,
    /// Minimum similarity ratio for a candidate to get a vote.
    pub cutoff: f64,
    /// Minimum share of all votes the winning candidate must hold.
    pub min_share: f64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        LearnerConfig {
            raw_column: "comment".to_string(),
            processed_column: "comment_processed".to_string(),
            min_support: 3,
            cutoff: 0.84,
            min_share: 0.7,
        }
    }
}

impl LearnerConfig {
    /// Check that thresholds are in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(MetinError::invalid_config(format!(
                "cutoff must be between 0 and 1, got {}",
                self.cutoff
            )));
        }
        if !(0.0..=1.0).contains(&self.min_share) {
            return Err(MetinError::invalid_config(format!(
                "min_share must be between 0 and 1, got {}",
                self.min_share
            )));
        }
        if self.min_support == 0 {
            return Err(MetinError::invalid_config("min_support must be at least 1"));
        }
        Ok(())
    }
}

/// A corpus file that was not used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a learning pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnReport {
    /// Accepted corrections, wrong → right.
    pub corrections: BTreeMap<String, String>,
    /// Number of files that contributed records.
    pub files_scanned: usize,
    /// Files skipped because a required column was missing.
    pub skipped_files: Vec<SkippedFile>,
    /// Number of records read.
    pub records: usize,
    /// Number of votes cast before collapsing.
    pub votes: usize,
}

/// Tokens of raw text: lowercase letter runs.
pub fn raw_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    LETTER_RUN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens of processed text: whitespace-separated letter-only words.
///
/// Bigrams and negation-tagged tokens contain `_` and are dropped.
pub fn processed_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| !t.contains('_') && LETTERS_ONLY.is_match(t))
        .map(str::to_lowercase)
        .collect()
}

/// Learns correction dictionary entries from corpora.
///
/// # Examples
///
/// ```
/// use metin::learning::learner::{CorrectionLearner, LearnerConfig};
///
/// let learner = CorrectionLearner::new(LearnerConfig::default()).unwrap();
/// let rows = vec![("ürün çok güzeel", "ürün güzel"); 3];
///
/// let corrections = learner.learn_records(rows);
/// assert_eq!(corrections.get("güzeel").map(String::as_str), Some("güzel"));
/// ```
#[derive(Debug, Clone)]
pub struct CorrectionLearner {
    config: LearnerConfig,
}

impl CorrectionLearner {
    /// Create a learner, validating the configuration.
    pub fn new(config: LearnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(CorrectionLearner { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Cast the votes of one (raw, processed) pair.
    pub fn observe(&self, evidence: &mut CorrectionEvidence, raw: &str, processed: &str) {
        let raw = raw_tokens(raw);
        let processed: BTreeSet<String> = processed_tokens(processed).into_iter().collect();
        if raw.is_empty() || processed.is_empty() {
            return;
        }

        for word in &raw {
            if processed.contains(word) {
                continue;
            }

            let pool = candidate_pool(word, &processed);
            if let Some(candidate) = closest_match(word, pool, self.config.cutoff)
                && candidate != word.as_str()
            {
                evidence.record(word, candidate);
            }
        }
    }

    /// Learn from in-memory (raw, processed) pairs.
    pub fn learn_records<I, R, P>(&self, records: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (R, P)>,
        R: AsRef<str>,
        P: AsRef<str>,
    {
        let mut evidence = CorrectionEvidence::new();
        for (raw, processed) in records {
            self.observe(&mut evidence, raw.as_ref(), processed.as_ref());
        }
        evidence.collapse(self.config.min_support, self.config.min_share)
    }

    /// Learn from CSV corpus files.
    ///
    /// Files missing a required column are skipped and listed in the report.
    /// Any other read error fails the whole pass.
    pub fn learn_files<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Result<LearnReport> {
        let reader = CorpusReader::new(&self.config.raw_column, &self.config.processed_column);

        let per_file: Vec<Result<FileOutcome>> = paths
            .par_iter()
            .map(|path| {
                let path = path.as_ref();
                match reader.read_file(path) {
                    Ok(records) => {
                        let evidence = self.evidence_for(&records);
                        Ok(FileOutcome::Read(evidence, records.len()))
                    }
                    Err(MetinError::Corpus(reason)) => {
                        warn!("Skipping {}: {reason}", path.display());
                        Ok(FileOutcome::Skipped(SkippedFile {
                            path: path.to_path_buf(),
                            reason,
                        }))
                    }
                    Err(e) => Err(e),
                }
            })
            .collect();

        let mut evidence = CorrectionEvidence::new();
        let mut report = LearnReport::default();
        for outcome in per_file {
            match outcome? {
                FileOutcome::Read(file_evidence, records) => {
                    evidence.merge(file_evidence);
                    report.files_scanned += 1;
                    report.records += records;
                }
                FileOutcome::Skipped(skipped) => report.skipped_files.push(skipped),
            }
        }

        report.votes = evidence.total_votes();
        report.corrections = evidence.collapse(self.config.min_support, self.config.min_share);

        info!(
            "Learned {} corrections from {} records in {} files ({} skipped, {} votes)",
            report.corrections.len(),
            report.records,
            report.files_scanned,
            report.skipped_files.len(),
            report.votes
        );
        Ok(report)
    }

    fn evidence_for(&self, records: &[CorpusRecord]) -> CorrectionEvidence {
        let mut evidence = CorrectionEvidence::new();
        for record in records {
            self.observe(&mut evidence, &record.raw, &record.processed);
        }
        debug!(
            "Collected {} votes for {} tokens",
            evidence.total_votes(),
            evidence.len()
        );
        evidence
    }
}

enum FileOutcome {
    Read(CorrectionEvidence, usize),
    Skipped(SkippedFile),
}

/// Processed words that may be the correction of `word`, sorted.
fn candidate_pool<'a>(word: &str, processed: &'a BTreeSet<String>) -> Vec<&'a str> {
    let prefix: String = word.chars().take(PREFIX_CHARS).collect();
    let length = word.chars().count();

    let pool: Vec<&str> = processed
        .iter()
        .filter(|p| p.starts_with(&prefix) && p.chars().count().abs_diff(length) <= MAX_LENGTH_DIFF)
        .map(String::as_str)
        .collect();

    if pool.is_empty() && length <= SHORT_WORD_CHARS {
        processed.iter().map(String::as_str).collect()
    } else {
        pool
    }
}

//! Dictionary-backed spell checking for English tokens.
//!
//! The cleaning pipeline only needs two questions answered: is a word known,
//! and what is the best replacement for an unknown one. [`DictionaryChecker`]
//! is that seam; [`FrequencyChecker`] answers it from a word list with
//! optional frequencies.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::spelling::levenshtein::bounded_distance;

/// A source of known words and replacement suggestions.
pub trait DictionaryChecker: Send + Sync {
    /// Whether `word` is spelled correctly.
    fn is_known(&self, word: &str) -> bool;

    /// The best replacement for `word`, if there is one.
    fn suggest(&self, word: &str) -> Option<String>;

    /// Name of this checker, for logging.
    fn name(&self) -> &'static str;
}

/// A word list with frequencies, suggesting by bounded edit distance.
#[derive(Debug, Clone, Default)]
pub struct FrequencyChecker {
    words: HashMap<String, u32>,
    max_distance: usize,
}

impl FrequencyChecker {
    /// Create an empty checker.
    pub fn new() -> Self {
        FrequencyChecker {
            words: HashMap::new(),
            max_distance: 2,
        }
    }

    /// Set the maximum edit distance for suggestions.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Create a checker from words, each with frequency 1.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = FrequencyChecker::new();
        for word in words {
            checker.increment_word(word.as_ref());
        }
        checker
    }

    /// Add a word with the given frequency.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        *self.words.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Load a word list.
    ///
    /// Each line is either `word` or `word frequency`. Lines holding anything
    /// but letters in the word position are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut checker = FrequencyChecker::new();
        let reader = BufReader::new(File::open(path.as_ref())?);

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            if !word.chars().all(|c| c.is_alphabetic()) {
                continue;
            }
            match parts.next().and_then(|f| f.parse::<u32>().ok()) {
                Some(frequency) => checker.add_word(word, frequency),
                None => checker.increment_word(word),
            }
        }

        debug!(
            "Loaded {} dictionary words from {}",
            checker.word_count(),
            path.as_ref().display()
        );
        Ok(checker)
    }
}

impl DictionaryChecker for FrequencyChecker {
    fn is_known(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Closest word by edit distance, then highest frequency, then alphabetically.
    fn suggest(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();

        self.words
            .iter()
            .filter_map(|(candidate, &frequency)| {
                bounded_distance(&word, candidate, self.max_distance)
                    .map(|distance| (distance, frequency, candidate))
            })
            .min_by(|a, b| {
                a.0.cmp(&b.0)
                    .then_with(|| b.1.cmp(&a.1))
                    .then_with(|| a.2.cmp(b.2))
            })
            .map(|(_, _, candidate)| candidate.clone())
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

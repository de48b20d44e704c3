//! Per-language stopword sets.
//!
//! The store keeps one word set per [`Language`] and persists them as a JSON
//! object keyed by lowercase language name:
//!
//! ```json
//! {
//!   "english": ["a", "and", "the"],
//!   "turkish": ["bu", "ve"]
//! }
//! ```
//!
//! Words are held lowercased. Pipelines take an immutable
//! [`snapshot`](StopwordStore::snapshot) so edits never affect a run that is
//! already in progress.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::{MetinError, Result};
use crate::language::Language;

/// Default Turkish stopwords.
pub const DEFAULT_TURKISH_STOPWORDS: &[&str] = &[
    "ve", "ile", "bu", "bir", "o", "şu", "da", "de", "ki", "mi", "mı", "mu", "mü", "için", "olan",
    "olarak", "ama", "ancak", "çok", "daha", "her", "hiç", "kendi", "ne", "sonra", "var", "yok",
    "şey", "yani",
];

/// Default English stopwords.
pub const DEFAULT_ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "of", "a", "that", "it", "with", "for", "as", "was", "on",
    "are", "but", "they", "be", "at", "one", "have", "this", "from", "or", "had", "by", "word",
    "not", "what", "all",
];

/// Built-in stopwords for a language.
pub fn default_stopwords(language: Language) -> &'static [&'static str] {
    match language {
        Language::Turkish => DEFAULT_TURKISH_STOPWORDS,
        Language::English => DEFAULT_ENGLISH_STOPWORDS,
    }
}

/// Stopword sets for every supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordStore {
    sets: BTreeMap<Language, BTreeSet<String>>,
}

impl Default for StopwordStore {
    fn default() -> Self {
        let mut store = StopwordStore {
            sets: BTreeMap::new(),
        };
        for language in Language::ALL {
            store.reset(language);
        }
        store
    }
}

impl StopwordStore {
    /// Create a store holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the words of one language.
    pub fn set_words<I, S>(&mut self, language: Language, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.sets.insert(language, words);
    }

    /// Add a word, returning `false` if it was already present.
    pub fn add(&mut self, language: Language, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.sets.entry(language).or_default().insert(word)
    }

    /// Remove a word, returning `false` if it was not present.
    pub fn remove(&mut self, language: Language, word: &str) -> bool {
        self.sets
            .get_mut(&language)
            .is_some_and(|set| set.remove(&word.trim().to_lowercase()))
    }

    /// Restore the built-in defaults for one language.
    pub fn reset(&mut self, language: Language) {
        self.set_words(language, default_stopwords(language));
    }

    /// Check if `word` is a stopword, ignoring case.
    pub fn contains(&self, language: Language, word: &str) -> bool {
        self.sets
            .get(&language)
            .is_some_and(|set| set.contains(&word.to_lowercase()))
    }

    /// The words of one language, sorted.
    pub fn words(&self, language: Language) -> Vec<&str> {
        self.sets
            .get(&language)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of words for one language.
    pub fn len(&self, language: Language) -> usize {
        self.sets.get(&language).map_or(0, BTreeSet::len)
    }

    /// An immutable copy of one language's set for a pipeline run.
    pub fn snapshot(&self, language: Language) -> Arc<HashSet<String>> {
        Arc::new(
            self.sets
                .get(&language)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
        )
    }

    /// Load stopwords from a JSON file.
    ///
    /// Languages missing from the file keep their defaults; unknown keys are
    /// ignored with a warning.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(file))?;

        let mut store = StopwordStore::new();
        for (key, words) in raw {
            match key.parse::<Language>() {
                Ok(language) => store.set_words(language, words),
                Err(_) => warn!(
                    "Ignoring unknown stopword language '{key}' in {}",
                    path.as_ref().display()
                ),
            }
        }

        for language in Language::ALL {
            debug!(
                "Loaded {} {language} stopwords from {}",
                store.len(language),
                path.as_ref().display()
            );
        }
        Ok(store)
    }

    /// Load stopwords, falling back to the defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load_from_file(path.as_ref()) {
            Ok(store) => Ok(store),
            Err(MetinError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "{} not found. Using default stopwords.",
                    path.as_ref().display()
                );
                Ok(StopwordStore::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Save all languages as pretty-printed JSON with sorted word lists.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let out: BTreeMap<&str, Vec<&str>> = self
            .sets
            .keys()
            .map(|language| (language.as_str(), self.words(*language)))
            .collect();

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &out)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let store = StopwordStore::new();
        assert!(store.contains(Language::Turkish, "ve"));
        assert!(store.contains(Language::Turkish, "VE"));
        assert!(store.contains(Language::English, "the"));
        assert!(!store.contains(Language::English, "ve"));
        assert_eq!(store.len(Language::Turkish), DEFAULT_TURKISH_STOPWORDS.len());
    }

    #[test]
    fn test_edit_and_reset() {
        let mut store = StopwordStore::new();
        assert!(store.add(Language::Turkish, "Falan"));
        assert!(!store.add(Language::Turkish, "falan"));
        assert!(store.contains(Language::Turkish, "falan"));

        assert!(store.remove(Language::Turkish, "ve"));
        assert!(!store.contains(Language::Turkish, "ve"));

        store.reset(Language::Turkish);
        assert!(store.contains(Language::Turkish, "ve"));
        assert!(!store.contains(Language::Turkish, "falan"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = StopwordStore::new();
        let snapshot = store.snapshot(Language::English);
        store.set_words(Language::English, ["only"]);

        assert!(snapshot.contains("the"));
        assert!(!store.contains(Language::English, "the"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stopwords.json");

        let mut store = StopwordStore::new();
        store.set_words(Language::Turkish, ["şey", "bu", "ve"]);
        store.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"turkish\""));

        let loaded = StopwordStore::load_from_file(&path).unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.words(Language::Turkish), ["bu", "ve", "şey"]);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stopwords.json");
        std::fs::write(&path, r#"{"turkish": ["Bu"], "klingon": ["x"]}"#).unwrap();

        let store = StopwordStore::load_from_file(&path).unwrap();
        assert_eq!(store.words(Language::Turkish), ["bu"]);
        assert_eq!(store.len(Language::English), DEFAULT_ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = StopwordStore::load_or_default(temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(store, StopwordStore::new());
    }
}

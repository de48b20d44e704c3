//! Correction dictionary: explicit wrong → right token mappings.
//!
//! Entries come from user edits and from the corpus learner. Keys are stored
//! lowercased and looked up by exact match. A key never maps to itself.
//!
//! The on-disk format is a flat JSON object, written with sorted keys:
//!
//! ```json
//! {
//!   "gelyior": "geliyor",
//!   "tmm": "tamam"
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{MetinError, Result};

/// How learned corrections are combined with existing entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Existing entries win; only new keys are added.
    #[default]
    KeepExisting,
    /// Learned entries replace existing ones with the same key.
    Overwrite,
}

/// Outcome of [`CorrectionDictionary::merge_learned`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    pub added: usize,
    pub overwritten: usize,
    pub kept: usize,
}

/// A mapping from lowercase wrong tokens to their canonical replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionDictionary {
    entries: HashMap<String, String>,
}

impl CorrectionDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        CorrectionDictionary {
            entries: HashMap::new(),
        }
    }

    /// Build a dictionary from pairs, skipping identity mappings.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = CorrectionDictionary::new();
        for (wrong, right) in pairs {
            dictionary.insert(wrong.as_ref(), right);
        }
        dictionary
    }

    /// Add or replace an entry.
    ///
    /// Returns `false` (and stores nothing) when the key is empty or the
    /// replacement equals the lowercased key.
    pub fn insert<V: Into<String>>(&mut self, wrong: &str, right: V) -> bool {
        let key = wrong.trim().to_lowercase();
        let value = right.into();
        let value = value.trim();
        if key.is_empty() || value.is_empty() || key == value {
            return false;
        }
        self.entries.insert(key, value.to_string());
        true
    }

    /// Remove an entry, returning its replacement.
    pub fn remove(&mut self, wrong: &str) -> Option<String> {
        self.entries.remove(&wrong.to_lowercase())
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up the replacement for a token.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(|s| s.as_str())
    }

    /// Check if a token has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Merge learned corrections under `policy`.
    pub fn merge_learned(
        &mut self,
        learned: &BTreeMap<String, String>,
        policy: MergePolicy,
    ) -> MergeStats {
        let mut stats = MergeStats::default();

        for (wrong, right) in learned {
            let exists = self.contains(wrong);
            if exists && policy == MergePolicy::KeepExisting {
                stats.kept += 1;
                continue;
            }
            if self.insert(wrong, right.as_str()) {
                if exists {
                    stats.overwritten += 1;
                } else {
                    stats.added += 1;
                }
            }
        }

        debug!(
            "Merged learned corrections: {} added, {} overwritten, {} kept",
            stats.added, stats.overwritten, stats.kept
        );
        stats
    }

    /// Load a dictionary from a JSON object file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let raw: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))?;

        let mut dictionary = CorrectionDictionary::new();
        let mut skipped = 0;
        for (wrong, right) in raw {
            if !dictionary.insert(&wrong, right) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(
                "Ignored {skipped} invalid correction entries in {}",
                path.as_ref().display()
            );
        }
        debug!(
            "Loaded {} corrections from {}",
            dictionary.len(),
            path.as_ref().display()
        );

        Ok(dictionary)
    }

    /// Load a dictionary, starting empty when the file does not exist.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load_from_file(path.as_ref()) {
            Ok(dictionary) => Ok(dictionary),
            Err(MetinError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Corrections file {} not found, starting with an empty dictionary",
                    path.as_ref().display()
                );
                Ok(CorrectionDictionary::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Save the dictionary as pretty-printed JSON with sorted keys.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.sorted())?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

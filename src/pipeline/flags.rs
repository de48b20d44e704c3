//! Per-stage switches for the cleaning pipeline.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which optional stages run. Stage order itself is fixed.
///
/// Missing keys take their default when loaded from JSON:
///
/// ```
/// use metin::pipeline::flags::StageFlags;
///
/// let flags: StageFlags = serde_json::from_str(r#"{"strip_numbers": true}"#).unwrap();
/// assert!(flags.strip_numbers);
/// assert!(flags.lowercase);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageFlags {
    pub lowercase: bool,
    /// URLs, mentions, hashtags, emoji and leftover non-word characters.
    pub strip_noise: bool,
    pub normalize: bool,
    pub strip_numbers: bool,
    pub strip_punctuation: bool,
    /// When off, stages 9 to 14 are skipped and the normalized text is returned.
    pub tokenize: bool,
    pub negation: bool,
    pub stopwords: bool,
    pub spell_check: bool,
    pub custom_corrections: bool,
    /// Lemmatize through the morphological analyzer, or stem when it is unavailable.
    pub lemmatize: bool,
}

impl Default for StageFlags {
    fn default() -> Self {
        StageFlags {
            lowercase: true,
            strip_noise: true,
            normalize: true,
            strip_numbers: false,
            strip_punctuation: true,
            tokenize: true,
            negation: true,
            stopwords: true,
            spell_check: true,
            custom_corrections: true,
            lemmatize: true,
        }
    }
}

impl StageFlags {
    /// Every stage enabled, including number stripping.
    pub fn all() -> Self {
        StageFlags {
            strip_numbers: true,
            ..Default::default()
        }
    }

    /// Load flags from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let flags = StageFlags::default();
        assert!(flags.spell_check);
        assert!(!flags.strip_numbers);
        assert!(StageFlags::all().strip_numbers);
    }

    #[test]
    fn test_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.json");
        std::fs::write(&path, r#"{"stopwords": false, "lemmatize": false}"#).unwrap();

        let flags = StageFlags::load(&path).unwrap();
        assert!(!flags.stopwords);
        assert!(!flags.lemmatize);
        assert!(flags.negation);
    }
}

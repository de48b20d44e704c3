use regex::Regex;

use super::CharFilter;
use crate::error::{MetinError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// The pipeline uses it for URL/mention/hashtag removal, digit runs and
/// residual non-word characters.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| MetinError::invalid_config(format!("invalid char filter pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// URLs (`http…`, `www…`), `@mentions` and `#hashtags`.
    pub fn social_noise() -> Result<Self> {
        Self::new(r"http\S+|www\S+|[@#]\w+", "")
    }

    /// Runs of decimal digits.
    pub fn digits() -> Result<Self> {
        Self::new(r"\d+", "")
    }

    /// Anything that is neither a word character nor whitespace.
    pub fn non_word() -> Result<Self> {
        Self::new(r"[^\w\s]", "")
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

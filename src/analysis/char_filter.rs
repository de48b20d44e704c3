//! Char filter implementations for text normalization.
//!
//! Char filters run on the whole record before it is tokenized. Each one
//! implements a single text-level stage of the cleaning pipeline (lowercasing,
//! noise stripping, emoji removal and so on) and never fails.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`emoji::EmojiCharFilter`] - Emoji to placeholder, then placeholder removal
//! - [`normalize::LanguageNormalizeCharFilter`] - Per-language character mapping
//! - [`punctuation::PunctuationCharFilter`] - ASCII punctuation removal
//! - [`whitespace::CollapseWhitespaceCharFilter`] - Whitespace collapsing and trimming
//!
//! # Examples
//!
//! ```
//! use metin::analysis::char_filter::CharFilter;
//! use metin::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("2024 yılı"), " yılı");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod emoji;
pub mod lowercase;
pub mod normalize;
pub mod pattern_replace;
pub mod punctuation;
pub mod whitespace;

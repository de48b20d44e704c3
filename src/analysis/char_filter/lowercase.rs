//! Lowercase char filter.

use super::CharFilter;

/// Lowercases the whole record with Unicode case mapping.
///
/// Turkish capital `İ` maps to a plain `i`. Unicode case mapping would leave a
/// combining dot above behind, and words such as `BİR` would then miss the
/// stopword list.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.contains('İ') {
            input.replace('İ', "i").to_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

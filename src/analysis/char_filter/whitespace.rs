//! Whitespace collapsing.

use super::CharFilter;

/// Collapses whitespace runs to a single space and trims both ends.
#[derive(Clone, Debug, Default)]
pub struct CollapseWhitespaceCharFilter;

impl CollapseWhitespaceCharFilter {
    /// Create a new whitespace collapsing char filter.
    pub fn new() -> Self {
        CollapseWhitespaceCharFilter
    }
}

impl CharFilter for CollapseWhitespaceCharFilter {
    fn filter(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }
}

//! Emoji removal.
//!
//! Emoji are first rewritten to a textual `:emoji:` placeholder and then every
//! `:shortcode:` shaped placeholder is deleted, so shortcodes typed by users
//! (`:smile:`) disappear together with real emoji.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// Pictographic ranges plus the joiners and selectors that glue emoji sequences.
static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F700}-\u{1F77F}", // alchemical symbols
        "\u{1F780}-\u{1F7FF}", // geometric shapes extended
        "\u{1F800}-\u{1F8FF}", // supplemental arrows-C
        "\u{1F900}-\u{1F9FF}", // supplemental symbols and pictographs
        "\u{1FA00}-\u{1FA6F}", // chess symbols
        "\u{1FA70}-\u{1FAFF}", // symbols and pictographs extended-A
        "\u{1F1E6}-\u{1F1FF}", // regional indicators
        "\u{2600}-\u{26FF}",   // miscellaneous symbols
        "\u{2700}-\u{27BF}",   // dingbats
        "\u{FE0F}\u{200D}",
        "]+"
    ))
    .unwrap()
});

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[a-z_&+\-]+:").unwrap());

/// The canonical textual form an emoji run is rewritten to.
pub const EMOJI_PLACEHOLDER: &str = ":emoji:";

/// Replaces emoji with a placeholder and then removes placeholders.
#[derive(Clone, Debug, Default)]
pub struct EmojiCharFilter;

impl EmojiCharFilter {
    /// Create a new emoji char filter.
    pub fn new() -> Self {
        EmojiCharFilter
    }

    /// Rewrite emoji runs to [`EMOJI_PLACEHOLDER`], surrounded by spaces.
    pub fn to_placeholders(&self, input: &str) -> String {
        EMOJI_REGEX
            .replace_all(input, format!(" {EMOJI_PLACEHOLDER} ").as_str())
            .into_owned()
    }
}

impl CharFilter for EmojiCharFilter {
    fn filter(&self, input: &str) -> String {
        let textual = self.to_placeholders(input);
        PLACEHOLDER_REGEX.replace_all(&textual, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "emoji"
    }
}

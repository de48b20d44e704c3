//! Rule-based correction of Turkish social-media spellings.
//!
//! Lookup order for a token:
//!
//! 1. abbreviation table (`tmm` → `tamam`)
//! 2. common-fix table, exact match (`gelyior` → `geliyor`)
//! 3. character fixes (combining dot left over from lowercasing `İ`)
//! 4. protected words, which stop here untouched
//! 5. the ordered [`PatternRule`] chain, each rule seeing the previous output
//!
//! The corrected value is returned only when it differs from the lowercased
//! input; otherwise the token comes back exactly as it was given.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::{MetinError, Result};

/// Letters a Turkish word is made of, in both cases.
const TURKISH_LETTERS: &str = "a-zA-ZçğıöşüÇĞİÖŞÜ";

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("zmn", "zaman"),
    ("slm", "selam"),
    ("mrb", "merhaba"),
    ("krm", "kardeş"),
    ("tşk", "teşekkür"),
    ("prgrm", "program"),
    ("dvn", "divan"),
    ("hyr", "hayır"),
    ("evt", "evet"),
    ("nsl", "nasıl"),
    ("nrd", "nerede"),
    ("ndn", "neden"),
    ("tmm", "tamam"),
    ("grv", "görev"),
    ("blg", "bilgi"),
    ("dkt", "dikkat"),
    ("frk", "fark"),
    ("snc", "sonuç"),
    ("bnm", "benim"),
    ("snin", "senin"),
    ("bzm", "bizim"),
    ("szin", "sizin"),
    ("glb", "galiba"),
    ("hrld", "herhalde"),
    ("kbl", "kabul"),
    ("msl", "mesela"),
    ("rnk", "renk"),
    ("frst", "fırsat"),
    ("sbb", "sebep"),
    ("drm", "durum"),
    ("klt", "kültür"),
    ("trc", "tercih"),
    ("yml", "yemek"),
    ("iş", "iş"),
    ("her", "her"),
];

// Identity entries mark known-good words: the lookup stops on them, so the
// pattern rules never see them.
const COMMON_FIXES: &[(&str, &str)] = &[
    ("güzeel", "güzel"),
    ("mükemmeel", "mükemmel"),
    ("havalimani", "havalimanı"),
    ("yogurt", "yoğurt"),
    ("turkiye", "türkiye"),
    ("turkce", "türkçe"),
    ("ingilizce", "ingilizce"),
    ("arastirma", "araştırma"),
    ("gelisme", "gelişme"),
    ("dusunce", "düşünce"),
    ("kullanici", "kullanıcı"),
    ("saglik", "sağlık"),
    ("egitim", "eğitim"),
    ("ogretmen", "öğretmen"),
    ("universite", "üniversite"),
    // keyboard slips
    ("neseka", "nasılsa"),
    ("yazdıpım", "yazdığım"),
    ("fogurusunu", "doğrusunu"),
    ("sekilde", "şekilde"),
    ("kelimelrien", "kelimelerin"),
    ("değişmeisni", "değiştirmesini"),
    ("isityorum", "istiyorum"),
    ("yazılım", "yazılım"),
    ("porgram", "program"),
    ("proğram", "program"),
    ("comupter", "computer"),
    ("bilgisyar", "bilgisayar"),
    ("teknolji", "teknoloji"),
    ("anlayabilyiorum", "anlayabiliyorum"),
    ("yapabilyiorum", "yapabiliyorum"),
    ("isteyiorum", "istiyorum"),
    ("geliyorum", "geliyorum"),
    ("gidyiorum", "gidiyorum"),
    ("edyiorum", "ediyorum"),
    ("yapiyor", "yapıyor"),
    ("gidyior", "gidiyor"),
    ("gelyior", "geliyor"),
    ("istyior", "istiyor"),
    ("çalışyior", "çalışıyor"),
    ("düşünüyrum", "düşünüyorum"),
    ("söylüyrum", "söylüyorum"),
    ("biliyrum", "biliyorum"),
    ("görüyrum", "görüyorum"),
    ("anlıyorum", "anlıyorum"),
    ("gerekiyor", "gerekiyor"),
    ("lazım", "lazım"),
    ("şimdi", "şimdi"),
    ("sonra", "sonra"),
    ("önce", "önce"),
    ("şöyle", "şöyle"),
    ("böyle", "böyle"),
    ("neden", "neden"),
    ("niçin", "niçin"),
    ("çünkü", "çünkü"),
    ("rğmen", "rağmen"),
    ("dolayi", "dolayı"),
    ("nedeniyle", "nedeniyle"),
    ("sayesinde", "sayesinde"),
    ("aracılgıyla", "aracılığıyla"),
    ("veya", "veya"),
    ("yada", "ya da"),
    ("hemde", "hem de"),
    ("ayrıca", "ayrıca"),
    ("bunun", "bunun"),
    ("şunun", "şunun"),
    ("onun", "onun"),
    ("benım", "benim"),
    ("senın", "senin"),
    ("bizım", "bizim"),
    ("sizın", "sizin"),
    ("onların", "onların"),
    ("yakında", "yakında"),
    ("uzakta", "uzakta"),
    ("burada", "burada"),
    ("şurada", "şurada"),
    ("orada", "orada"),
    ("nerede", "nerede"),
    ("neresi", "neresi"),
    ("hangisi", "hangisi"),
    ("kimse", "kimse"),
    ("hiçbir", "hiçbir"),
    ("herkes", "herkes"),
    ("herkez", "herkes"),
    ("herşey", "her şey"),
    ("hiçbirşey", "hiçbir şey"),
    ("birşey", "bir şey"),
    ("bazıları", "bazıları"),
    ("çoğu", "çoğu"),
    ("hepsi", "hepsi"),
    ("tümü", "tümü"),
    ("yarısı", "yarısı"),
    ("çeyreği", "çeyreği"),
    ("dörtte", "dörtte"),
    ("üçte", "üçte"),
    ("ikide", "ikide"),
    ("birde", "bir de"),
    ("aynı", "aynı"),
    ("farklı", "farklı"),
    ("benzer", "benzer"),
    ("değişik", "değişik"),
    ("başka", "başka"),
    ("diğer", "diğer"),
    ("öteki", "öteki"),
];

const CHAR_FIXES: &[(&str, &str)] = &[("i\u{307}", "i")];

const PROTECTED_WORDS: &[&str] = &[
    "büyük",
    "koruyucu",
    "güzel",
    "mükemmel",
    "havalimanı",
    "yoğun",
    "küçük",
    "oruyucu",
    "üyük",
    "öyle",
    "böyle",
    "sürekli",
    "gerçek",
    "önemli",
    "güvenli",
    "doğru",
    "yuvarlak",
    "oyuncu",
    "sayısal",
    "ayakkabı",
    "yaşlı",
];

const LITERAL_FIXES: &[(&str, &str)] = &[
    ("yapiyor", "yapıyor"),
    ("gelyior", "geliyor"),
    ("gidyior", "gidiyor"),
    ("istyior", "istiyor"),
    // consonant confusions
    ("porgram", "program"),
    ("proğram", "program"),
    ("comupter", "computer"),
    // ğ/g
    ("dogru", "doğru"),
    ("saglik", "sağlık"),
    ("ogrenci", "öğrenci"),
];

/// One rewrite step of the pattern chain.
#[derive(Debug, Clone)]
pub enum PatternRule {
    /// Regex replacement; `replacement` may refer to capture groups.
    Regex { pattern: Regex, replacement: String },
    /// Collapse runs of at least `min_run` identical letters to one letter.
    CollapseRuns { min_run: usize },
    /// Plain substring replacement.
    Literal {
        from: &'static str,
        to: &'static str,
    },
}

impl PatternRule {
    /// Compile a regex rule.
    pub fn regex(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| MetinError::invalid_config(format!("invalid pattern rule: {e}")))?;
        Ok(PatternRule::Regex {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Apply this rule to `word`.
    pub fn apply(&self, word: &str) -> String {
        match self {
            PatternRule::Regex {
                pattern,
                replacement,
            } => pattern.replace_all(word, replacement.as_str()).into_owned(),
            PatternRule::CollapseRuns { min_run } => collapse_runs(word, *min_run),
            PatternRule::Literal { from, to } => word.replace(from, to),
        }
    }
}

fn collapse_runs(word: &str, min_run: usize) -> String {
    let mut collapsed = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let keep = if c.is_alphabetic() && run >= min_run {
            1
        } else {
            run
        };
        collapsed.extend(std::iter::repeat_n(c, keep));
    }

    collapsed
}

/// Table-driven corrector for Turkish tokens.
///
/// # Examples
///
/// ```
/// use metin::spelling::pattern::PatternCorrector;
///
/// let corrector = PatternCorrector::new().unwrap();
/// assert_eq!(corrector.correct("güzeeeel"), "güzel");
/// assert_eq!(corrector.correct("tmm"), "tamam");
/// assert_eq!(corrector.correct("büyük"), "büyük");
/// ```
#[derive(Debug, Clone)]
pub struct PatternCorrector {
    abbreviations: HashMap<&'static str, &'static str>,
    common_fixes: HashMap<&'static str, &'static str>,
    protected: HashSet<&'static str>,
    rules: Vec<PatternRule>,
}

impl PatternCorrector {
    /// Create a corrector with the built-in tables and rule chain.
    pub fn new() -> Result<Self> {
        let rules = vec![
            // -yrum → -yorum at the end of a word
            PatternRule::regex(&format!("([{TURKISH_LETTERS}]+)yrum$"), "${1}yorum")?,
            PatternRule::CollapseRuns { min_run: 3 },
        ]
        .into_iter()
        .chain(
            LITERAL_FIXES
                .iter()
                .map(|&(from, to)| PatternRule::Literal { from, to }),
        )
        .collect();

        Ok(PatternCorrector {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            common_fixes: COMMON_FIXES.iter().copied().collect(),
            protected: PROTECTED_WORDS.iter().copied().collect(),
            rules,
        })
    }

    /// Check if a word is exempt from the pattern rules.
    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(word.to_lowercase().as_str())
    }

    /// Expansion of an abbreviation, if `word` is one.
    pub fn expand_abbreviation(&self, word: &str) -> Option<&'static str> {
        self.abbreviations.get(word.to_lowercase().as_str()).copied()
    }

    /// The rule chain, in application order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Correct a single token.
    pub fn correct(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        let corrected = self.correct_lowercase(&lower);
        if corrected != lower {
            corrected
        } else {
            word.to_string()
        }
    }

    fn correct_lowercase(&self, lower: &str) -> String {
        if let Some(&expansion) = self.abbreviations.get(lower) {
            return expansion.to_string();
        }
        if let Some(&fix) = self.common_fixes.get(lower) {
            return fix.to_string();
        }

        let mut corrected = lower.to_string();
        for &(wrong, right) in CHAR_FIXES {
            corrected = corrected.replace(wrong, right);
        }

        if self.protected.contains(corrected.as_str()) {
            return corrected;
        }

        self.rules
            .iter()
            .fold(corrected, |word, rule| rule.apply(&word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> PatternCorrector {
        PatternCorrector::new().unwrap()
    }

    #[test]
    fn test_collapse_repeated_letters() {
        let corrector = corrector();
        assert_eq!(corrector.correct("güzeeeel"), "güzel");
        assert_eq!(corrector.correct("çoooook"), "çok");
        // two in a row is a legitimate spelling
        assert_eq!(corrector.correct("saat"), "saat");
    }

    #[test]
    fn test_tables() {
        let corrector = corrector();
        assert_eq!(corrector.correct("porgram"), "program");
        assert_eq!(corrector.correct("tmm"), "tamam");
        assert_eq!(corrector.correct("TMM"), "tamam");
        assert_eq!(corrector.correct("herşey"), "her şey");
        assert_eq!(corrector.correct("biliyrum"), "biliyorum");
    }

    #[test]
    fn test_protected_words() {
        let corrector = corrector();
        assert!(corrector.is_protected("Büyük"));
        assert_eq!(corrector.correct("büyük"), "büyük");
        assert_eq!(corrector.correct("yoğun"), "yoğun");
    }

    #[test]
    fn test_yrum_suffix() {
        let corrector = corrector();
        assert_eq!(corrector.correct("istiyrum"), "istiyorum");
        // plain -rum endings are words in their own right
        assert_eq!(corrector.correct("durum"), "durum");
        assert_eq!(corrector.correct("Durum"), "Durum");
    }

    #[test]
    fn test_literal_rules_inside_words() {
        let corrector = corrector();
        assert_eq!(corrector.correct("dogrusu"), "doğrusu");
        assert_eq!(corrector.correct("ogrenciler"), "öğrenciler");
    }

    #[test]
    fn test_dotted_capital_i() {
        let corrector = corrector();
        // "İyi".to_lowercase() leaves a combining dot behind
        assert_eq!(corrector.correct("İyi"), "iyi");
    }

    #[test]
    fn test_uncorrected_keeps_casing() {
        let corrector = corrector();
        assert_eq!(corrector.correct("Merhaba"), "Merhaba");
        assert_eq!(corrector.correct("Neden"), "Neden");
    }

    #[test]
    fn test_rule_chain_order() {
        let corrector = corrector();
        assert!(matches!(corrector.rules()[0], PatternRule::Regex { .. }));
        assert!(matches!(
            corrector.rules()[1],
            PatternRule::CollapseRuns { min_run: 3 }
        ));
        assert_eq!(corrector.rules().len(), 2 + LITERAL_FIXES.len());
    }
}

//! The fixed-order cleaning pipeline.
//!
//! ```text
//!  1 lowercase          6 punctuation        11 stopwords
//!  2 URLs/social        7 special chars      12 spell check
//!  3 emoji              8 whitespace         13 lemmatize / stem
//!  4 normalize          9 tokenize           14 short tokens
//!  5 numbers           10 negation           15 join
//! ```
//!
//! Stages 1 to 8 rewrite the text, 9 to 14 work on tokens. [`StageFlags`]
//! turns individual stages off but never reorders them. A token stage that
//! fails is logged and skipped, keeping the tokens it was given.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::emoji::EmojiCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::normalize::LanguageNormalizeCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::char_filter::whitespace::CollapseWhitespaceCharFilter;
use crate::analysis::token::{IntoTokenStream, Token, join_tokens};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::negation::NegationFilter;
use crate::analysis::token_filter::short_token::ShortTokenFilter;
use crate::analysis::token_filter::spelling::SpellCorrectionFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;
use crate::language::Language;
use crate::pipeline::flags::StageFlags;
use crate::pipeline::resources::PipelineResources;
use crate::pipeline::trace::{Stage, StageStep, StageTrace};
use crate::spelling::corrector::SpellCorrector;

/// Stages that depend on the language.
#[derive(Debug)]
struct LanguageStages {
    normalize: LanguageNormalizeCharFilter,
    tokenizer: WordTokenizer,
    negation: NegationFilter,
    stop: StopFilter,
    stem: StemFilter,
}

/// Collects intermediate texts when a trace was requested.
struct Recorder {
    steps: Option<Vec<StageStep>>,
}

impl Recorder {
    fn record(&mut self, stage: Stage, text: &str) {
        if let Some(steps) = &mut self.steps {
            steps.push(StageStep {
                stage,
                text: text.to_string(),
            });
        }
    }

    fn record_tokens(&mut self, stage: Stage, tokens: &[Token]) {
        if self.steps.is_some() {
            self.record(stage, &join_tokens(tokens));
        }
    }
}

/// Cleans single records of noisy user text.
///
/// A pipeline holds no mutable state; one instance can serve any number of
/// threads.
///
/// # Examples
///
/// ```
/// use metin::language::Language;
/// use metin::pipeline::cleaning::CleaningPipeline;
/// use metin::pipeline::flags::StageFlags;
///
/// let pipeline = CleaningPipeline::with_defaults().unwrap();
/// let cleaned = pipeline.run(
///     "Bu harika bir ürün yapiyor! #tag https://x.com",
///     Language::Turkish,
///     &StageFlags::default(),
/// );
/// assert_eq!(cleaned, "harika ürün yapıyor");
/// ```
#[derive(Debug)]
pub struct CleaningPipeline {
    resources: PipelineResources,
    lowercase: LowercaseCharFilter,
    social_noise: PatternReplaceCharFilter,
    emoji: EmojiCharFilter,
    digits: PatternReplaceCharFilter,
    punctuation: PunctuationCharFilter,
    non_word: PatternReplaceCharFilter,
    whitespace: CollapseWhitespaceCharFilter,
    languages: BTreeMap<Language, LanguageStages>,
    short_tokens: ShortTokenFilter,
}

impl CleaningPipeline {
    /// Build a pipeline over a resource snapshot.
    pub fn new(resources: PipelineResources) -> Result<Self> {
        let languages = Language::ALL
            .into_iter()
            .map(|language| {
                let stages = LanguageStages {
                    normalize: LanguageNormalizeCharFilter::new(language),
                    tokenizer: WordTokenizer::new(language),
                    negation: NegationFilter::new(language),
                    stop: StopFilter::new(resources.stopwords(language)),
                    stem: StemFilter::new(language),
                };
                (language, stages)
            })
            .collect();

        Ok(CleaningPipeline {
            lowercase: LowercaseCharFilter::new(),
            social_noise: PatternReplaceCharFilter::social_noise()?,
            emoji: EmojiCharFilter::new(),
            digits: PatternReplaceCharFilter::digits()?,
            punctuation: PunctuationCharFilter::new(),
            non_word: PatternReplaceCharFilter::non_word()?,
            whitespace: CollapseWhitespaceCharFilter::new(),
            languages,
            short_tokens: ShortTokenFilter::new(),
            resources,
        })
    }

    /// A pipeline with default stopwords and no custom corrections.
    pub fn with_defaults() -> Result<Self> {
        Self::new(PipelineResources::with_defaults()?)
    }

    /// The resources this pipeline was built with.
    pub fn resources(&self) -> &PipelineResources {
        &self.resources
    }

    /// Clean `text`.
    pub fn run(&self, text: &str, language: Language, flags: &StageFlags) -> String {
        let mut recorder = Recorder { steps: None };
        self.execute(text, language, flags, &mut recorder)
    }

    /// Clean `text`, recording the text after every stage that ran.
    pub fn run_traced(&self, text: &str, language: Language, flags: &StageFlags) -> StageTrace {
        let mut recorder = Recorder {
            steps: Some(Vec::new()),
        };
        let output = self.execute(text, language, flags, &mut recorder);

        StageTrace {
            steps: recorder.steps.unwrap_or_default(),
            output,
        }
    }

    fn execute(
        &self,
        text: &str,
        language: Language,
        flags: &StageFlags,
        recorder: &mut Recorder,
    ) -> String {
        recorder.record(Stage::Original, text);
        if text.trim().is_empty() {
            recorder.record(Stage::Final, "");
            return String::new();
        }

        let stages = self.stages(language);
        let mut text = text.to_string();

        let mut apply_char = |stage: Stage, filter: &dyn CharFilter, text: &mut String| {
            *text = filter.filter(text);
            recorder.record(stage, text);
        };

        if flags.lowercase {
            apply_char(Stage::Lowercase, &self.lowercase, &mut text);
        }
        if flags.strip_noise {
            apply_char(Stage::SocialNoise, &self.social_noise, &mut text);
            apply_char(Stage::Emoji, &self.emoji, &mut text);
        }
        if flags.normalize {
            apply_char(Stage::Normalize, &stages.normalize, &mut text);
        }
        if flags.strip_numbers {
            apply_char(Stage::Numbers, &self.digits, &mut text);
        }
        if flags.strip_punctuation {
            apply_char(Stage::Punctuation, &self.punctuation, &mut text);
        }
        if flags.strip_noise {
            apply_char(Stage::SpecialChars, &self.non_word, &mut text);
        }
        apply_char(Stage::Whitespace, &self.whitespace, &mut text);

        if !flags.tokenize {
            recorder.record(Stage::Final, &text);
            return text;
        }

        let mut tokens = self.tokenize(stages, &text);
        recorder.record_tokens(Stage::Tokenize, &tokens);

        if flags.negation {
            tokens = apply_filter(&stages.negation, tokens);
            recorder.record_tokens(Stage::Negation, &tokens);
        }
        if flags.stopwords {
            tokens = apply_filter(&stages.stop, tokens);
            recorder.record_tokens(Stage::Stopwords, &tokens);
        }
        if flags.spell_check {
            let filter = SpellCorrectionFilter::new(self.corrector(flags), language);
            tokens = apply_filter(&filter, tokens);
            recorder.record_tokens(Stage::SpellCheck, &tokens);
        }
        if flags.lemmatize {
            let lemmas = match self.resources.analyzer() {
                Some(analyzer) if analyzer.is_ready() => {
                    let filter = LemmaFilter::new(analyzer.clone());
                    try_filter(&filter, &tokens)
                        .inspect_err(|e| warn!("{} failed, stemming instead: {e}", filter.name()))
                        .ok()
                }
                _ => None,
            };
            match lemmas {
                Some(lemmas) => {
                    tokens = lemmas;
                    recorder.record_tokens(Stage::Lemmatize, &tokens);
                }
                None => {
                    tokens = apply_filter(&stages.stem, tokens);
                    recorder.record_tokens(Stage::Stem, &tokens);
                }
            }
        }

        tokens = apply_filter(&self.short_tokens, tokens);
        recorder.record_tokens(Stage::Cleanup, &tokens);

        let output = self.whitespace.filter(&join_tokens(&tokens));
        recorder.record(Stage::Final, &output);
        output
    }

    fn stages(&self, language: Language) -> &LanguageStages {
        // every language is built in `new`
        &self.languages[&language]
    }

    fn corrector(&self, flags: &StageFlags) -> SpellCorrector {
        SpellCorrector::new(
            self.resources.corrections().clone(),
            self.resources.patterns().clone(),
        )
        .with_checker(self.resources.checker().cloned())
        .with_custom_corrections(flags.custom_corrections)
    }

    fn tokenize(&self, stages: &LanguageStages, text: &str) -> Vec<Token> {
        match stages.tokenizer.tokenize(text) {
            Ok(tokens) => tokens.collect(),
            Err(e) => {
                warn!("Tokenizer failed, falling back to whitespace split: {e}");
                match WhitespaceTokenizer::new().tokenize(text) {
                    Ok(tokens) => tokens.collect(),
                    Err(_) => text
                        .split_whitespace()
                        .enumerate()
                        .map(|(position, word)| Token::from_surface(word, position))
                        .collect(),
                }
            }
        }
    }
}

/// Run a token filter over a copy of `tokens`.
fn try_filter(filter: &dyn Filter, tokens: &[Token]) -> Result<Vec<Token>> {
    let filtered: Vec<Token> = filter.filter(tokens.to_vec().into_token_stream())?.collect();
    debug!(
        "{}: {} -> {} tokens",
        filter.name(),
        tokens.len(),
        filtered.len()
    );
    Ok(filtered)
}

/// Run a token filter, keeping the input tokens if it fails.
fn apply_filter(filter: &dyn Filter, tokens: Vec<Token>) -> Vec<Token> {
    match try_filter(filter, &tokens) {
        Ok(filtered) => filtered,
        Err(e) => {
            warn!("{} stage failed, keeping its input: {e}", filter.name());
            tokens
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::morphology::{MorphologicalAnalyzer, Sentence};
    use crate::analysis::token::TokenStream;
    use crate::error::MetinError;
    use crate::spelling::dictionary::CorrectionDictionary;
    use crate::stopwords::StopwordStore;

    fn pipeline() -> CleaningPipeline {
        CleaningPipeline::with_defaults().unwrap()
    }

    #[test]
    fn test_end_to_end_turkish() {
        let cleaned = pipeline().run(
            "Bu harika bir ürün yapiyor! #tag https://x.com",
            Language::Turkish,
            &StageFlags::default(),
        );
        assert_eq!(cleaned, "harika ürün yapıyor");
    }

    #[test]
    fn test_empty_input() {
        let pipeline = pipeline();
        assert_eq!(pipeline.run("", Language::Turkish, &StageFlags::default()), "");
        assert_eq!(pipeline.run("   ", Language::English, &StageFlags::default()), "");

        let trace = pipeline.run_traced("", Language::Turkish, &StageFlags::default());
        assert_eq!(trace.stages(), [Stage::Original, Stage::Final]);
    }

    #[test]
    fn test_negation_survives_stopwords() {
        let cleaned = pipeline().run(
            "Bu ürün güzel değil",
            Language::Turkish,
            &StageFlags::default(),
        );
        assert_eq!(cleaned, "ürün güzel_NEG");
    }

    #[test]
    fn test_custom_correction_applied() {
        let resources = PipelineResources::new(
            &StopwordStore::new(),
            CorrectionDictionary::from_pairs([("sper", "süper")]),
        )
        .unwrap();
        let pipeline = CleaningPipeline::new(resources).unwrap();

        let flags = StageFlags::default();
        assert_eq!(pipeline.run("Sper ürün", Language::Turkish, &flags), "süper ürün");

        let flags = StageFlags {
            custom_corrections: false,
            ..Default::default()
        };
        assert_eq!(pipeline.run("Sper ürün", Language::Turkish, &flags), "sper ürün");
    }

    #[test]
    fn test_tokenize_off_returns_normalized_text() {
        let flags = StageFlags {
            tokenize: false,
            ..Default::default()
        };
        let cleaned = pipeline().run("Çok   GÜZEL, ve 5 yıldız!", Language::Turkish, &flags);
        assert_eq!(cleaned, "çok güzel ve 5 yıldız");
    }

    #[test]
    fn test_trace_records_only_enabled_stages() {
        let flags = StageFlags {
            strip_noise: false,
            ..Default::default()
        };
        let trace = pipeline().run_traced("Güzel bir gün", Language::Turkish, &flags);

        let stages = trace.stages();
        assert!(!stages.contains(&Stage::SocialNoise));
        assert!(!stages.contains(&Stage::Numbers));
        assert!(stages.contains(&Stage::Stem));
        assert_eq!(stages.first(), Some(&Stage::Original));
        assert_eq!(stages.last(), Some(&Stage::Final));
        assert_eq!(trace.text_at(Stage::Lowercase), Some("güzel bir gün"));
        assert_eq!(trace.text_at(Stage::Final), Some(trace.output.as_str()));
    }

    struct FailingAnalyzer;

    impl MorphologicalAnalyzer for FailingAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<Sentence>> {
            Err(MetinError::analysis("model crashed"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_failing_analyzer_falls_back_to_stemmer() {
        let resources = PipelineResources::with_defaults()
            .unwrap()
            .with_analyzer(Arc::new(FailingAnalyzer));
        let pipeline = CleaningPipeline::new(resources).unwrap();

        let trace = pipeline.run_traced("kitaplar güzel", Language::Turkish, &StageFlags::default());
        assert!(!trace.stages().contains(&Stage::Lemmatize));
        assert_eq!(trace.text_at(Stage::Stem), Some("kitap güzel"));
        assert_eq!(trace.output, "kitap güzel");
    }

    struct FailingFilter;

    impl Filter for FailingFilter {
        fn filter(&self, _tokens: TokenStream) -> Result<TokenStream> {
            Err(MetinError::analysis("broken"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_failing_filter_keeps_tokens() {
        let tokens = vec![Token::new("kitaplar", 0), Token::new("güzel", 1)];
        assert_eq!(apply_filter(&FailingFilter, tokens.clone()), tokens);
    }
}

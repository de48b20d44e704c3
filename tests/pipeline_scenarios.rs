use std::sync::Arc;

use metin::analysis::morphology::{AnalyzedWord, MorphologicalAnalyzer, Sentence, UPos};
use metin::error::Result;
use metin::language::Language;
use metin::pipeline::cleaning::CleaningPipeline;
use metin::pipeline::flags::StageFlags;
use metin::pipeline::resources::PipelineResources;
use metin::pipeline::trace::Stage;
use metin::spelling::dictionary::CorrectionDictionary;
use metin::stopwords::StopwordStore;

fn default_pipeline() -> Result<CleaningPipeline> {
    CleaningPipeline::with_defaults()
}

#[test]
fn turkish_comment_is_cleaned_end_to_end() -> Result<()> {
    let pipeline = default_pipeline()?;
    let cleaned = pipeline.run(
        "Bu harika bir ürün yapiyor! #tag https://x.com @satici",
        Language::Turkish,
        &StageFlags::default(),
    );
    assert_eq!(cleaned, "harika ürün yapıyor");
    Ok(())
}

#[test]
fn cleaning_a_clean_sentence_again_changes_nothing() -> Result<()> {
    let pipeline = default_pipeline()?;
    let flags = StageFlags::default();

    let once = pipeline.run("Bu harika bir ürün yapiyor!", Language::Turkish, &flags);
    let twice = pipeline.run(&once, Language::Turkish, &flags);
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn uppercase_turkish_stopwords_are_removed_on_first_pass() -> Result<()> {
    let pipeline = default_pipeline()?;
    let flags = StageFlags::default();

    let once = pipeline.run("BİR ürün İÇİN", Language::Turkish, &flags);
    assert_eq!(once, "ürün");
    assert_eq!(pipeline.run(&once, Language::Turkish, &flags), once);
    Ok(())
}

#[test]
fn cleaning_stemmed_output_again_changes_nothing() -> Result<()> {
    let pipeline = default_pipeline()?;
    let flags = StageFlags::default();

    let cases = [
        ("Ödemeler hızlı", Language::Turkish),
        ("Gelmeler", Language::Turkish),
        ("Kitaplardan aldım", Language::Turkish),
        ("BİR ürün İÇİN", Language::Turkish),
        ("Bu ürün güzel değil", Language::Turkish),
        ("The presents arrived quickly", Language::English),
    ];
    for (text, language) in cases {
        let once = pipeline.run(text, language, &flags);
        let twice = pipeline.run(&once, language, &flags);
        assert_eq!(once, twice, "second pass changed {text:?}");
        assert!(
            !twice.contains("_NEG") || text.contains("değil"),
            "{text:?} gained a negation tag: {twice:?}"
        );
    }

    assert_eq!(
        pipeline.run("Ödemeler hızlı", Language::Turkish, &flags),
        "ödemeler hızlı"
    );
    assert_eq!(
        pipeline.run("Kitaplardan aldım", Language::Turkish, &flags),
        "kitap aldım"
    );
    Ok(())
}

#[test]
fn negation_scope_survives_stopword_removal() -> Result<()> {
    let pipeline = default_pipeline()?;
    let flags = StageFlags::default();

    assert_eq!(
        pipeline.run("Bu ürün güzel değil", Language::Turkish, &flags),
        "ürün güzel_NEG"
    );
    assert_eq!(
        pipeline.run("değil güzel", Language::Turkish, &flags),
        "güzel_NEG"
    );

    let english = pipeline.run("The product is NOT good!!!", Language::English, &flags);
    assert!(english.split(' ').any(|t| t == "good_NEG"));
    assert!(!english.split(' ').any(|t| t == "the" || t == "not"));
    Ok(())
}

#[test]
fn negation_off_keeps_negation_word_as_stopword_candidate() -> Result<()> {
    let pipeline = default_pipeline()?;
    let flags = StageFlags {
        negation: false,
        ..Default::default()
    };

    let cleaned = pipeline.run("Bu ürün güzel değil", Language::Turkish, &flags);
    assert!(!cleaned.contains("_NEG"));
    assert!(cleaned.contains("değil"));
    Ok(())
}

#[test]
fn user_stopwords_and_corrections_flow_through_snapshot() -> Result<()> {
    let mut stopwords = StopwordStore::new();
    stopwords.add(Language::Turkish, "ürün");
    let corrections = CorrectionDictionary::from_pairs([("kargooo", "kargo")]);

    let pipeline = CleaningPipeline::new(PipelineResources::new(&stopwords, corrections)?)?;
    let cleaned = pipeline.run("Ürün kargooo hızlı", Language::Turkish, &StageFlags::default());
    assert_eq!(cleaned, "kargo hızlı");
    Ok(())
}

#[test]
fn trace_follows_stage_order() -> Result<()> {
    let pipeline = default_pipeline()?;
    let trace = pipeline.run_traced("Güzeeel ürün!!", Language::Turkish, &StageFlags::all());

    let numbers: Vec<u8> = trace.stages().iter().map(Stage::number).collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    assert_eq!(numbers, sorted);

    assert_eq!(trace.text_at(Stage::Original), Some("Güzeeel ürün!!"));
    assert_eq!(trace.text_at(Stage::Whitespace), Some("güzeeel ürün"));
    assert_eq!(trace.text_at(Stage::SpellCheck), Some("güzel ürün"));
    assert_eq!(trace.output, "güzel ürün");
    Ok(())
}

#[test]
fn number_stripping_is_opt_in() -> Result<()> {
    let pipeline = default_pipeline()?;
    let text = "5 yıldız verdim";
    let normalized_only = StageFlags {
        tokenize: false,
        ..Default::default()
    };
    assert_eq!(
        pipeline.run(text, Language::Turkish, &normalized_only),
        "5 yıldız verdim"
    );

    let stripped = StageFlags {
        strip_numbers: true,
        ..normalized_only
    };
    assert_eq!(
        pipeline.run(text, Language::Turkish, &stripped),
        "yıldız verdim"
    );
    Ok(())
}

struct LookupAnalyzer;

impl MorphologicalAnalyzer for LookupAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>> {
        let words = text
            .split_whitespace()
            .map(|w| match w {
                "kitaplar" => AnalyzedWord::new(w, "kitap", UPos::Noun),
                "okudum" => AnalyzedWord::new(w, "oku", UPos::Verb),
                other => AnalyzedWord::new(other, other, UPos::X),
            })
            .collect();
        Ok(vec![words])
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

#[test]
fn analyzer_lemmatizes_content_words() -> Result<()> {
    let resources = PipelineResources::with_defaults()?.with_analyzer(Arc::new(LookupAnalyzer));
    let pipeline = CleaningPipeline::new(resources)?;

    let trace = pipeline.run_traced("Kitaplar okudum", Language::Turkish, &StageFlags::default());
    assert!(trace.stages().contains(&Stage::Lemmatize));
    assert!(!trace.stages().contains(&Stage::Stem));
    assert_eq!(trace.output, "kitap oku kitap_oku");
    Ok(())
}

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use metin::cli::args::MetinArgs;
use metin::cli::commands::execute_command;
use metin::error::Result;
use metin::language::Language;
use metin::spelling::dictionary::CorrectionDictionary;
use metin::stopwords::StopwordStore;

fn run(dir: &Path, args: &[&str]) -> Result<()> {
    let stopwords = dir.join("stopwords.json");
    let corrections = dir.join("custom_corrections.json");
    let mut argv = vec![
        "metin".to_string(),
        "-q".to_string(),
        "--stopwords".to_string(),
        stopwords.display().to_string(),
        "--corrections".to_string(),
        corrections.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));

    let parsed = MetinArgs::try_parse_from(argv).map_err(anyhow::Error::from)?;
    execute_command(parsed)
}

#[test]
fn corrections_are_saved_and_removed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom_corrections.json");

    run(temp_dir.path(), &["corrections", "add", "Tmmdr", "tamamdır"])?;
    let dictionary = CorrectionDictionary::load_from_file(&path)?;
    assert_eq!(dictionary.get("tmmdr"), Some("tamamdır"));

    run(temp_dir.path(), &["corrections", "remove", "tmmdr"])?;
    let dictionary = CorrectionDictionary::load_from_file(&path)?;
    assert!(dictionary.is_empty());
    Ok(())
}

#[test]
fn stopwords_are_edited_and_reset() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("stopwords.json");

    run(temp_dir.path(), &["stopwords", "add", "-l", "english", "very", "really"])?;
    let store = StopwordStore::load_from_file(&path)?;
    assert!(store.contains(Language::English, "very"));
    assert!(store.contains(Language::English, "really"));

    run(temp_dir.path(), &["stopwords", "remove", "ve"])?;
    let store = StopwordStore::load_from_file(&path)?;
    assert!(!store.contains(Language::Turkish, "ve"));

    run(temp_dir.path(), &["stopwords", "reset", "--language", "english"])?;
    let store = StopwordStore::load_from_file(&path)?;
    assert!(!store.contains(Language::English, "very"));
    assert!(!store.contains(Language::Turkish, "ve"));
    Ok(())
}

#[test]
fn learn_merges_unless_dry_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let corpus = temp_dir.path().join("corpus.csv");
    let path = temp_dir.path().join("custom_corrections.json");
    fs::write(
        &corpus,
        "comment,comment_processed\n\
         güzeel ürün,güzel ürün\n\
         güzeel kargo,güzel kargo\n\
         çok güzeel,güzel\n",
    )?;
    let corpus = corpus.display().to_string();

    run(temp_dir.path(), &["learn", &corpus, "--dry-run"])?;
    assert!(!path.exists());

    run(temp_dir.path(), &["learn", &corpus])?;
    let dictionary = CorrectionDictionary::load_from_file(&path)?;
    assert_eq!(dictionary.get("güzeel"), Some("güzel"));
    Ok(())
}

#[test]
fn process_writes_output_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(&input, "review\nBu ürün güzel değil\n")?;

    run(
        temp_dir.path(),
        &[
            "process",
            &input.display().to_string(),
            &output.display().to_string(),
            "--column",
            "review",
        ],
    )?;

    let written = fs::read_to_string(&output)?;
    assert!(written.starts_with("comment_id,review,review_processed"));
    assert!(written.contains("ürün güzel_NEG"));
    Ok(())
}

#[test]
fn invalid_learner_threshold_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let corpus = temp_dir.path().join("corpus.csv");
    fs::write(&corpus, "comment,comment_processed\n")?;

    let result = run(
        temp_dir.path(),
        &["learn", &corpus.display().to_string(), "--cutoff", "1.5"],
    );
    assert!(result.is_err());
    Ok(())
}

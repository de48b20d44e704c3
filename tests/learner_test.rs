use std::fs;

use tempfile::TempDir;

use metin::error::Result;
use metin::learning::learner::{CorrectionLearner, LearnerConfig};
use metin::spelling::dictionary::{CorrectionDictionary, MergePolicy};

const CORPUS: &str = "\
comment,comment_processed
ürün çok güzeel,ürün güzel
güzeel paketlenmiş,güzel paketlenmiş
kargo hızlı ve güzeel,kargo hızlı güzel
beğenmedim,beğen_NEG
";

#[test]
fn learns_repeated_misspelling_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("corpus.csv");
    fs::write(&path, CORPUS)?;

    let learner = CorrectionLearner::new(LearnerConfig::default())?;
    let report = learner.learn_files(&[&path])?;

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.records, 4);
    assert!(report.skipped_files.is_empty());
    assert_eq!(
        report.corrections.get("güzeel").map(String::as_str),
        Some("güzel")
    );
    assert!(!report.corrections.contains_key("beğenmedim"));
    Ok(())
}

#[test]
fn support_is_counted_across_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first = temp_dir.path().join("a.csv");
    let second = temp_dir.path().join("b.csv");
    fs::write(
        &first,
        "comment,comment_processed\nmükemmmel ürün,mükemmel ürün\nmükemmmel,mükemmel\n",
    )?;
    fs::write(&second, "comment,comment_processed\nmükemmmel kargo,mükemmel kargo\n")?;

    let learner = CorrectionLearner::new(LearnerConfig::default())?;

    let single = learner.learn_files(&[&first])?;
    assert!(single.corrections.is_empty());

    let both = learner.learn_files(&[&first, &second])?;
    assert_eq!(both.files_scanned, 2);
    assert_eq!(
        both.corrections.get("mükemmmel").map(String::as_str),
        Some("mükemmel")
    );
    Ok(())
}

#[test]
fn file_without_required_columns_is_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let good = temp_dir.path().join("good.csv");
    let bad = temp_dir.path().join("bad.csv");
    fs::write(&good, CORPUS)?;
    fs::write(&bad, "text,label\nmerhaba,1\n")?;

    let learner = CorrectionLearner::new(LearnerConfig::default())?;
    let report = learner.learn_files(&[&good, &bad])?;

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.skipped_files.len(), 1);
    assert_eq!(report.skipped_files[0].path, bad);
    assert!(report.corrections.contains_key("güzeel"));
    Ok(())
}

#[test]
fn missing_file_fails_the_pass() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let learner = CorrectionLearner::new(LearnerConfig::default())?;

    let result = learner.learn_files(&[temp_dir.path().join("absent.csv")]);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn latin1_corpus_is_decoded() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("latin1.csv");

    // "güzeel" / "güzel" with ü encoded as the single Latin-1 byte 0xFC
    let mut bytes = b"comment,comment_processed\n".to_vec();
    for _ in 0..3 {
        bytes.extend_from_slice(b"g\xfczeel kalite,g\xfczel kalite\n");
    }
    fs::write(&path, bytes)?;

    let learner = CorrectionLearner::new(LearnerConfig::default())?;
    let report = learner.learn_files(&[&path])?;
    assert_eq!(
        report.corrections.get("güzeel").map(String::as_str),
        Some("güzel")
    );
    Ok(())
}

#[test]
fn learned_corrections_do_not_replace_user_entries() -> Result<()> {
    let learner = CorrectionLearner::new(LearnerConfig::default())?;
    let learned = learner.learn_records(vec![("ürün güzeel", "ürün güzel"); 3]);

    let mut dictionary = CorrectionDictionary::from_pairs([("güzeel", "güzeeel")]);
    let stats = dictionary.merge_learned(&learned, MergePolicy::KeepExisting);
    assert_eq!(stats.kept, 1);
    assert_eq!(dictionary.get("güzeel"), Some("güzeeel"));

    let stats = dictionary.merge_learned(&learned, MergePolicy::Overwrite);
    assert_eq!(stats.overwritten, 1);
    assert_eq!(dictionary.get("güzeel"), Some("güzel"));
    Ok(())
}

use std::fs;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use tempfile::TempDir;

use metin::error::{MetinError, Result};
use metin::language::Language;
use metin::pipeline::batch::{BatchProcessor, Sentiment};
use metin::pipeline::cleaning::CleaningPipeline;
use metin::pipeline::flags::StageFlags;

fn processor() -> Result<BatchProcessor> {
    let pipeline = Arc::new(CleaningPipeline::with_defaults()?);
    Ok(BatchProcessor::new(
        pipeline,
        Language::Turkish,
        StageFlags::default(),
    ))
}

fn read_rows(path: &std::path::Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

#[test]
fn csv_column_is_processed_with_extra_columns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("reviews.csv");
    let output = temp_dir.path().join("reviews_processed.csv");
    fs::write(
        &input,
        "comment,score\n\
         Bu ürün güzel değil,2\n\
         \"Bu harika bir ürün yapiyor!\",5\n\
         ,3\n",
    )?;

    let summary = processor()?.process_csv(&input, &output, "comment")?;
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.original_non_empty, 2);
    assert_eq!(summary.processed_non_empty, 2);
    assert!(summary.reduction_percent > 0.0);
    assert!(!summary.cancelled);
    assert_eq!(summary.sentiments.get(&Sentiment::Negative), Some(&1));
    assert_eq!(summary.sentiments.get(&Sentiment::Positive), Some(&1));
    assert_eq!(summary.sentiments.get(&Sentiment::Neutral), Some(&1));

    let (headers, rows) = read_rows(&output)?;
    assert_eq!(
        headers,
        [
            "comment_id",
            "comment",
            "score",
            "comment_processed",
            "comment_length_original",
            "comment_length_processed",
            "sentiment",
        ]
    );
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][3], "ürün güzel_NEG");
    assert_eq!(rows[0][4], "19");
    assert_eq!(rows[0][5], "14");
    assert_eq!(rows[0][6], "negative");
    assert_eq!(rows[1][3], "harika ürün yapıyor");
    assert_eq!(rows[1][6], "positive");
    assert_eq!(rows[2][3], "");
    assert_eq!(rows[2][6], "neutral");
    Ok(())
}

#[test]
fn ids_are_zero_padded_to_row_count() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("many.csv");
    let output = temp_dir.path().join("many_out.csv");

    let mut content = String::from("comment\n");
    for i in 0..12 {
        content.push_str(&format!("yorum {i}\n"));
    }
    fs::write(&input, content)?;

    processor()?.process_csv(&input, &output, "comment")?;

    let (headers, rows) = read_rows(&output)?;
    assert!(!headers.iter().any(|h| h == "sentiment"));
    assert_eq!(rows[0][0], "01");
    assert_eq!(rows[11][0], "12");
    Ok(())
}

#[test]
fn missing_column_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("reviews.csv");
    fs::write(&input, "text\nmerhaba\n")?;

    let result = processor()?.process_csv(&input, temp_dir.path().join("out.csv"), "comment");
    assert!(matches!(result, Err(MetinError::InvalidArgument(_))));
    Ok(())
}

#[test]
fn cancelled_batch_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("reviews.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(&input, "comment\nbir\niki\n")?;

    let processor = processor()?;
    processor.cancel_flag().store(true, Ordering::SeqCst);

    let summary = processor.process_csv(&input, &output, "comment")?;
    assert!(summary.cancelled);
    assert_eq!(summary.processed, 0);
    assert!(!output.exists());
    Ok(())
}

#[test]
fn records_are_processed_in_input_order() -> Result<()> {
    let pipeline = Arc::new(CleaningPipeline::with_defaults()?);
    let flags = StageFlags::default();
    let processor = BatchProcessor::new(Arc::clone(&pipeline), Language::Turkish, flags);

    let words = ["kitaplardan", "güzeeel", "değil", "tmm", "harika", "istiyrum"];
    let texts: Vec<String> = (0..200)
        .map(|i| format!("{} {}", words[i % words.len()], words[(i * 7) % words.len()]))
        .collect();

    let outputs = processor.process_texts(&texts);
    assert_eq!(outputs.len(), texts.len());
    for (text, output) in texts.iter().zip(&outputs) {
        assert_eq!(
            output.as_deref(),
            Some(pipeline.run(text, Language::Turkish, &flags).as_str())
        );
    }
    Ok(())
}

//! Parallel batch cleaning of many records.
//!
//! Records are independent, so they are cleaned in parallel over a shared
//! [`CleaningPipeline`]. Cancellation is cooperative: the flag is checked
//! before each record starts, and records that never started come back as
//! `None`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MetinError, Result};
use crate::language::Language;
use crate::learning::corpus::decode_field;
use crate::pipeline::cleaning::CleaningPipeline;
use crate::pipeline::flags::StageFlags;

/// Column holding the generated record id.
pub const ID_COLUMN: &str = "comment_id";
/// Column holding a 1 to 5 rating, if present.
pub const SCORE_COLUMN: &str = "score";

/// Sentiment label derived from a 1 to 5 rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
    Unknown,
}

impl Sentiment {
    /// Label a raw score: 1 to 2 negative, 3 neutral, 4 to 5 positive.
    pub fn from_score(score: &str) -> Self {
        match score.trim().parse::<f64>() {
            Ok(s) if s == 1.0 || s == 2.0 => Sentiment::Negative,
            Ok(s) if s == 3.0 => Sentiment::Neutral,
            Ok(s) if s == 4.0 || s == 5.0 => Sentiment::Positive,
            _ => Sentiment::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
            Sentiment::Unknown => "unknown",
        }
    }
}

/// Zero-padded 1-based ids, as wide as the row count.
pub fn record_ids(rows: usize) -> Vec<String> {
    let width = rows.to_string().len();
    (1..=rows).map(|i| format!("{i:0width$}")).collect()
}

/// Statistics of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub rows: usize,
    /// Records that were cleaned before cancellation.
    pub processed: usize,
    pub original_non_empty: usize,
    pub processed_non_empty: usize,
    /// Average length in characters.
    pub average_original_length: f64,
    pub average_processed_length: f64,
    /// Length reduction of the averages, in percent.
    pub reduction_percent: f64,
    /// Label counts, present when the input had a score column.
    pub sentiments: BTreeMap<Sentiment, usize>,
    pub cancelled: bool,
}

impl BatchSummary {
    fn from_outputs<S: AsRef<str>>(texts: &[S], outputs: &[Option<String>]) -> Self {
        let rows = texts.len();
        let original_lengths: Vec<usize> =
            texts.iter().map(|t| t.as_ref().chars().count()).collect();
        let processed_lengths: Vec<usize> = outputs
            .iter()
            .map(|o| o.as_deref().map_or(0, |t| t.chars().count()))
            .collect();

        let average = |lengths: &[usize]| {
            if lengths.is_empty() {
                0.0
            } else {
                lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
            }
        };
        let average_original_length = average(&original_lengths);
        let average_processed_length = average(&processed_lengths);
        let reduction_percent = if average_original_length > 0.0 {
            (average_original_length - average_processed_length) / average_original_length * 100.0
        } else {
            0.0
        };

        BatchSummary {
            rows,
            processed: outputs.iter().filter(|o| o.is_some()).count(),
            original_non_empty: original_lengths.iter().filter(|&&l| l > 0).count(),
            processed_non_empty: processed_lengths.iter().filter(|&&l| l > 0).count(),
            average_original_length,
            average_processed_length,
            reduction_percent,
            sentiments: BTreeMap::new(),
            cancelled: outputs.iter().any(Option::is_none),
        }
    }
}

/// Cleans record collections with one pipeline configuration.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    pipeline: Arc<CleaningPipeline>,
    language: Language,
    flags: StageFlags,
    cancel: Arc<AtomicBool>,
}

impl BatchProcessor {
    /// Create a batch processor.
    pub fn new(pipeline: Arc<CleaningPipeline>, language: Language, flags: StageFlags) -> Self {
        BatchProcessor {
            pipeline,
            language,
            flags,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The shared cancellation flag; set it to stop the batch.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Clean every text; `None` marks records skipped after cancellation.
    pub fn process_texts<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Option<String>> {
        texts
            .par_iter()
            .map(|text| {
                if self.is_cancelled() {
                    None
                } else {
                    Some(self.pipeline.run(text.as_ref(), self.language, &self.flags))
                }
            })
            .collect()
    }

    /// Clean one column of a CSV file into a new file.
    ///
    /// The output holds `comment_id` first, then the input columns, then
    /// `<column>_processed`, both text lengths and, if the input has a
    /// `score` column, a `sentiment` label. When the batch is cancelled
    /// nothing is written and the summary says so.
    pub fn process_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        column: &str,
    ) -> Result<BatchSummary> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(input.as_ref())?;

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| decode_field(h).trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let column_index = headers.iter().position(|h| h == column).ok_or_else(|| {
            MetinError::invalid_argument(format!(
                "Column '{column}' not found in {}",
                input.as_ref().display()
            ))
        })?;
        let score_index = headers.iter().position(|h| h == SCORE_COLUMN);

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut record = ByteRecord::new();
        while reader.read_byte_record(&mut record)? {
            let mut row: Vec<String> = record.iter().map(decode_field).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
        debug!(
            "Read {} rows from {}",
            rows.len(),
            input.as_ref().display()
        );

        let texts: Vec<&str> = rows.iter().map(|row| row[column_index].as_str()).collect();
        let outputs = self.process_texts(&texts);

        let mut summary = BatchSummary::from_outputs(&texts, &outputs);
        if summary.cancelled {
            warn!(
                "Processing cancelled after {} of {} rows; no output written",
                summary.processed, summary.rows
            );
            return Ok(summary);
        }

        let mut writer = WriterBuilder::new().from_path(output.as_ref())?;
        let processed_column = format!("{column}_processed");
        let mut out_headers = vec![ID_COLUMN.to_string()];
        out_headers.extend(headers.iter().cloned());
        out_headers.push(processed_column);
        out_headers.push("comment_length_original".to_string());
        out_headers.push("comment_length_processed".to_string());
        if score_index.is_some() {
            out_headers.push("sentiment".to_string());
        }
        writer.write_record(&out_headers)?;

        let ids = record_ids(rows.len());
        for ((row, id), processed) in rows.iter().zip(ids).zip(&outputs) {
            let processed = processed.as_deref().unwrap_or_default();
            let mut out = Vec::with_capacity(out_headers.len());
            out.push(id);
            out.extend(row.iter().cloned());
            out.push(processed.to_string());
            out.push(row[column_index].chars().count().to_string());
            out.push(processed.chars().count().to_string());
            if let Some(score_index) = score_index {
                let sentiment = Sentiment::from_score(&row[score_index]);
                *summary.sentiments.entry(sentiment).or_insert(0) += 1;
                out.push(sentiment.as_str().to_string());
            }
            writer.write_record(&out)?;
        }
        writer.flush()?;

        info!(
            "Processed {} rows: average length {:.1} -> {:.1} chars ({:.1}% reduction)",
            summary.rows,
            summary.average_original_length,
            summary.average_processed_length,
            summary.reduction_percent
        );
        Ok(summary)
    }
}

//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{MetinArgs, OutputFormat};
use crate::error::Result;
use crate::language::Language;
use crate::learning::learner::SkippedFile;
use crate::pipeline::batch::BatchSummary;
use crate::pipeline::trace::StageTrace;
use crate::spelling::dictionary::MergeStats;

/// Result of cleaning one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanResult {
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<StageTrace>,
}

/// Result of a `process` run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub summary: BatchSummary,
}

/// Result of a `learn` run.
#[derive(Debug, Serialize, Deserialize)]
pub struct LearnResult {
    pub learned: BTreeMap<String, String>,
    pub files_scanned: usize,
    pub records: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub merge: Option<MergeStats>,
    pub dictionary_size: usize,
    pub dry_run: bool,
}

/// A stopword list.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopwordList {
    pub language: Language,
    pub words: Vec<String>,
}

/// A correction listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionList {
    pub corrections: BTreeMap<String, String>,
}

/// Outcome of an edit command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditResult {
    pub changed: Vec<String>,
    pub unchanged: Vec<String>,
    pub total: usize,
}

/// Something the CLI can print for humans.
pub trait HumanOutput {
    fn print_human(&self, args: &MetinArgs);
}

impl HumanOutput for CleanResult {
    fn print_human(&self, _args: &MetinArgs) {
        if let Some(trace) = &self.trace {
            print_trace(trace);
        } else {
            println!("{}", self.output);
        }
    }
}

impl HumanOutput for ProcessResult {
    fn print_human(&self, _args: &MetinArgs) {
        let summary = &self.summary;
        if summary.cancelled {
            println!(
                "Processing cancelled after {} of {} rows; nothing written",
                summary.processed, summary.rows
            );
            return;
        }

        println!("Processing Statistics:");
        println!("══════════════════════");
        println!("Total rows: {}", summary.rows);
        println!("Original non-empty: {}", summary.original_non_empty);
        println!("Processed non-empty: {}", summary.processed_non_empty);
        println!(
            "Average length: {:.1} -> {:.1} chars",
            summary.average_original_length, summary.average_processed_length
        );
        println!("Reduction: {:.1}%", summary.reduction_percent);

        if !summary.sentiments.is_empty() {
            println!();
            println!("Sentiment:");
            println!("──────────");
            for (sentiment, count) in &summary.sentiments {
                println!("  {}: {count}", sentiment.as_str());
            }
        }

        println!();
        println!("Wrote {}", self.output.display());
    }
}

impl HumanOutput for LearnResult {
    fn print_human(&self, args: &MetinArgs) {
        if args.verbosity() > 1 {
            for (wrong, right) in &self.learned {
                println!("  {wrong} -> {right}");
            }
        }

        println!(
            "Learned {} corrections from {} records in {} files",
            self.learned.len(),
            self.records,
            self.files_scanned
        );
        for skipped in &self.skipped_files {
            println!("Skipped {}: {}", skipped.path.display(), skipped.reason);
        }
        match &self.merge {
            Some(merge) => println!(
                "Added {}, overwritten {}, kept {}; dictionary now has {} entries",
                merge.added, merge.overwritten, merge.kept, self.dictionary_size
            ),
            None if self.dry_run => println!("Dry run, nothing saved"),
            None => {}
        }
    }
}

impl HumanOutput for StopwordList {
    fn print_human(&self, args: &MetinArgs) {
        if args.verbosity() > 0 {
            println!("{} stopwords ({}):", self.language, self.words.len());
        }
        for word in &self.words {
            println!("{word}");
        }
    }
}

impl HumanOutput for CorrectionList {
    fn print_human(&self, args: &MetinArgs) {
        if args.verbosity() > 0 {
            println!("{} corrections:", self.corrections.len());
        }
        for (wrong, right) in &self.corrections {
            println!("{wrong} -> {right}");
        }
    }
}

impl HumanOutput for EditResult {
    fn print_human(&self, _args: &MetinArgs) {
        if !self.changed.is_empty() {
            println!("Updated: {}", self.changed.join(", "));
        }
        if !self.unchanged.is_empty() {
            println!("Unchanged: {}", self.unchanged.join(", "));
        }
        println!("Total entries: {}", self.total);
    }
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &MetinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MetinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Print every recorded stage, then the result.
pub fn print_trace(trace: &StageTrace) {
    println!("Step-by-step Analysis:");
    println!("══════════════════════");
    for step in &trace.steps {
        println!();
        println!("{}", step.stage);
        println!("{}", "─".repeat(step.stage.to_string().chars().count()));
        if step.text.is_empty() {
            println!("(empty)");
        } else {
            println!("{}", step.text);
        }
    }
}

//! Command implementations for the metin CLI.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::learning::learner::{CorrectionLearner, LearnerConfig};
use crate::pipeline::batch::BatchProcessor;
use crate::pipeline::cleaning::CleaningPipeline;
use crate::pipeline::flags::StageFlags;
use crate::pipeline::resources::ResourceStore;
use crate::spelling::checker::FrequencyChecker;
use crate::spelling::dictionary::MergePolicy;

/// Execute a CLI command.
pub fn execute_command(args: MetinArgs) -> Result<()> {
    let store = open_store(&args)?;

    match &args.command {
        Command::Clean(clean_args) => clean_text(clean_args, &store, &args),
        Command::Process(process_args) => process_file(process_args, &store, &args),
        Command::Learn(learn_args) => learn_corrections(learn_args, &store, &args),
        Command::Stopwords(command) => manage_stopwords(command, &store, &args),
        Command::Corrections(command) => manage_corrections(command, &store, &args),
    }
}

/// Open the resource files named on the command line.
fn open_store(args: &MetinArgs) -> Result<ResourceStore> {
    let mut store = ResourceStore::open(&args.stopwords, &args.corrections)?;

    if let Some(path) = &args.english_dictionary {
        let checker = FrequencyChecker::load_from_file(path)?;
        store = store.with_checker(Arc::new(checker));
    }
    Ok(store)
}

/// Resolve stage flags from an optional file plus command line switches.
fn resolve_flags(stages: &StageArgs) -> Result<StageFlags> {
    let base = match &stages.flags_file {
        Some(path) => StageFlags::load(path)?,
        None => StageFlags::default(),
    };
    let flags = stages.apply(base);
    debug!("Stage flags: {flags:?}");
    Ok(flags)
}

/// Clean a single text, or stdin line by line.
fn clean_text(args: &CleanArgs, store: &ResourceStore, cli_args: &MetinArgs) -> Result<()> {
    let flags = resolve_flags(&args.stages)?;
    let pipeline = CleaningPipeline::new(store.snapshot()?)?;

    let clean_one = |text: &str| -> Result<()> {
        let result = if args.trace {
            let trace = pipeline.run_traced(text, args.language, &flags);
            CleanResult {
                input: text.to_string(),
                output: trace.output.clone(),
                trace: Some(trace),
            }
        } else {
            CleanResult {
                input: text.to_string(),
                output: pipeline.run(text, args.language, &flags),
                trace: None,
            }
        };
        output_result(&result, cli_args)
    };

    match &args.text {
        Some(text) => clean_one(text),
        None => {
            for line in io::stdin().lock().lines() {
                clean_one(&line?)?;
            }
            Ok(())
        }
    }
}

/// Clean one column of a CSV file.
fn process_file(args: &ProcessArgs, store: &ResourceStore, cli_args: &MetinArgs) -> Result<()> {
    let flags = resolve_flags(&args.stages)?;
    let pipeline = Arc::new(CleaningPipeline::new(store.snapshot()?)?);
    let processor = BatchProcessor::new(pipeline, args.language, flags);

    let start_time = Instant::now();
    let summary = processor.process_csv(&args.input, &args.output, &args.column)?;
    info!(
        "Processed {} in {:.2}s",
        args.input.display(),
        start_time.elapsed().as_secs_f64()
    );

    output_result(
        &ProcessResult {
            input: args.input.clone(),
            output: args.output.clone(),
            column: args.column.clone(),
            summary,
        },
        cli_args,
    )
}

/// Learn corrections from corpora and merge them into the corrections file.
fn learn_corrections(args: &LearnArgs, store: &ResourceStore, cli_args: &MetinArgs) -> Result<()> {
    let learner = CorrectionLearner::new(LearnerConfig {
        raw_column: args.raw_column.clone(),
        processed_column: args.processed_column.clone(),
        min_support: args.min_support,
        cutoff: args.cutoff,
        min_share: args.min_share,
    })?;
    let report = learner.learn_files(&args.files)?;

    let merge = if args.dry_run {
        None
    } else {
        let policy = if args.overwrite {
            MergePolicy::Overwrite
        } else {
            MergePolicy::KeepExisting
        };
        let stats = store.update_corrections(|c| c.merge_learned(&report.corrections, policy));
        store.save_corrections()?;
        Some(stats)
    };

    output_result(
        &LearnResult {
            learned: report.corrections,
            files_scanned: report.files_scanned,
            records: report.records,
            skipped_files: report.skipped_files,
            merge,
            dictionary_size: store.corrections().len(),
            dry_run: args.dry_run,
        },
        cli_args,
    )
}

fn manage_stopwords(
    command: &StopwordsCommand,
    store: &ResourceStore,
    cli_args: &MetinArgs,
) -> Result<()> {
    let (language, result) = match command {
        StopwordsCommand::List(list_args) => {
            let words = store
                .stopwords()
                .words(list_args.language)
                .into_iter()
                .map(str::to_string)
                .collect();
            return output_result(
                &StopwordList {
                    language: list_args.language,
                    words,
                },
                cli_args,
            );
        }
        StopwordsCommand::Add(edit_args) => {
            let result = edit_words(&edit_args.words, |word| {
                store.update_stopwords(|s| s.add(edit_args.language, word))
            });
            (edit_args.language, result)
        }
        StopwordsCommand::Remove(edit_args) => {
            let result = edit_words(&edit_args.words, |word| {
                store.update_stopwords(|s| s.remove(edit_args.language, word))
            });
            (edit_args.language, result)
        }
        StopwordsCommand::Reset(list_args) => {
            store.update_stopwords(|s| s.reset(list_args.language));
            (
                list_args.language,
                EditResult {
                    changed: vec![list_args.language.to_string()],
                    unchanged: Vec::new(),
                    total: 0,
                },
            )
        }
    };

    store.save_stopwords()?;
    let result = EditResult {
        total: store.stopwords().len(language),
        ..result
    };
    output_result(&result, cli_args)
}

fn manage_corrections(
    command: &CorrectionsCommand,
    store: &ResourceStore,
    cli_args: &MetinArgs,
) -> Result<()> {
    let result = match command {
        CorrectionsCommand::List => {
            let corrections = store
                .corrections()
                .sorted()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            return output_result(&CorrectionList { corrections }, cli_args);
        }
        CorrectionsCommand::Add { wrong, right } => {
            edit_words(std::slice::from_ref(wrong), |word| {
                store.update_corrections(|c| c.insert(word, right.as_str()))
            })
        }
        CorrectionsCommand::Remove { words } => edit_words(words, |word| {
            store.update_corrections(|c| c.remove(word).is_some())
        }),
        CorrectionsCommand::Clear => {
            let removed = store.update_corrections(|c| {
                let keys: Vec<String> = c.sorted().keys().map(|k| k.to_string()).collect();
                c.clear();
                keys
            });
            EditResult {
                changed: removed,
                unchanged: Vec::new(),
                total: 0,
            }
        }
    };

    store.save_corrections()?;
    let result = EditResult {
        total: store.corrections().len(),
        ..result
    };
    output_result(&result, cli_args)
}

/// Apply `edit` to each word, splitting them by whether anything changed.
fn edit_words(words: &[String], mut edit: impl FnMut(&str) -> bool) -> EditResult {
    let (changed, unchanged): (Vec<String>, Vec<String>) =
        words.iter().cloned().partition(|word| edit(word.as_str()));
    EditResult {
        changed,
        unchanged,
        total: 0,
    }
}

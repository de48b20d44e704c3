//! Command line argument parsing for the metin CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::pipeline::flags::StageFlags;

/// Metin - normalization and spell correction for noisy Turkish/English comments
#[derive(Parser, Debug, Clone)]
#[command(name = "metin")]
#[command(about = "Normalize, negation-tag and spell-correct noisy Turkish/English comments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MetinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Stopword file (JSON, one list per language)
    #[arg(
        long,
        env = "METIN_STOPWORDS",
        value_name = "FILE",
        default_value = "stopwords.json"
    )]
    pub stopwords: PathBuf,

    /// Custom corrections file (JSON object, wrong -> right)
    #[arg(
        long,
        env = "METIN_CORRECTIONS",
        value_name = "FILE",
        default_value = "custom_corrections.json"
    )]
    pub corrections: PathBuf,

    /// English word frequency list used to spell-check English text
    #[arg(long, env = "METIN_ENGLISH_DICTIONARY", value_name = "FILE")]
    pub english_dictionary: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MetinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clean a text, or every line of stdin
    Clean(CleanArgs),

    /// Clean one column of a CSV file
    Process(ProcessArgs),

    /// Learn corrections from raw/processed CSV corpora
    Learn(LearnArgs),

    /// Manage stopword lists
    #[command(subcommand)]
    Stopwords(StopwordsCommand),

    /// Manage custom corrections
    #[command(subcommand)]
    Corrections(CorrectionsCommand),
}

/// Per-stage switches shared by `clean` and `process`.
#[derive(Args, Debug, Clone, Default)]
pub struct StageArgs {
    /// Load stage flags from a JSON file before applying the switches below
    #[arg(long = "flags", value_name = "FILE")]
    pub flags_file: Option<PathBuf>,

    /// Keep the original casing
    #[arg(long)]
    pub no_lowercase: bool,

    /// Keep URLs, mentions, hashtags and emoji
    #[arg(long)]
    pub keep_noise: bool,

    /// Skip character normalization
    #[arg(long)]
    pub no_normalize: bool,

    /// Remove digits
    #[arg(long)]
    pub strip_numbers: bool,

    /// Keep punctuation
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Stop after whitespace cleanup and return the normalized text
    #[arg(long)]
    pub no_tokenize: bool,

    /// Skip negation tagging
    #[arg(long)]
    pub no_negation: bool,

    /// Keep stopwords
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip spell correction
    #[arg(long)]
    pub no_spell_check: bool,

    /// Ignore the custom corrections file
    #[arg(long)]
    pub no_custom_corrections: bool,

    /// Skip lemmatization and stemming
    #[arg(long)]
    pub no_lemmatize: bool,
}

impl StageArgs {
    /// Apply the switches on top of `base`.
    pub fn apply(&self, base: StageFlags) -> StageFlags {
        StageFlags {
            lowercase: base.lowercase && !self.no_lowercase,
            strip_noise: base.strip_noise && !self.keep_noise,
            normalize: base.normalize && !self.no_normalize,
            strip_numbers: base.strip_numbers || self.strip_numbers,
            strip_punctuation: base.strip_punctuation && !self.keep_punctuation,
            tokenize: base.tokenize && !self.no_tokenize,
            negation: base.negation && !self.no_negation,
            stopwords: base.stopwords && !self.keep_stopwords,
            spell_check: base.spell_check && !self.no_spell_check,
            custom_corrections: base.custom_corrections && !self.no_custom_corrections,
            lemmatize: base.lemmatize && !self.no_lemmatize,
        }
    }
}

/// Arguments for cleaning text
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Text to clean; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Language of the text
    #[arg(short, long, default_value = "turkish")]
    pub language: Language,

    /// Show the text after every stage
    #[arg(short, long)]
    pub trace: bool,

    #[command(flatten)]
    pub stages: StageArgs,
}

/// Arguments for batch processing a CSV file
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Input CSV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Column to clean
    #[arg(short, long, default_value = "comment")]
    pub column: String,

    /// Language of the column
    #[arg(short, long, default_value = "turkish")]
    pub language: Language,

    #[command(flatten)]
    pub stages: StageArgs,
}

/// Arguments for learning corrections
#[derive(Parser, Debug, Clone)]
pub struct LearnArgs {
    /// Corpus CSV files with raw and processed columns
    #[arg(value_name = "CSV", required = true)]
    pub files: Vec<PathBuf>,

    /// Column holding the raw text
    #[arg(long, default_value = "comment")]
    pub raw_column: String,

    /// Column holding the processed text
    #[arg(long, default_value = "comment_processed")]
    pub processed_column: String,

    /// Minimum votes for a learned correction
    #[arg(long, default_value = "3")]
    pub min_support: usize,

    /// Minimum similarity for a candidate
    #[arg(long, default_value = "0.84")]
    pub cutoff: f64,

    /// Minimum share of votes the winner must hold
    #[arg(long, default_value = "0.7")]
    pub min_share: f64,

    /// Replace existing corrections with learned ones
    #[arg(long)]
    pub overwrite: bool,

    /// Report what would be learned without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Stopword subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum StopwordsCommand {
    /// List the stopwords of a language
    List(StopwordsListArgs),
    /// Add stopwords
    Add(StopwordsEditArgs),
    /// Remove stopwords
    Remove(StopwordsEditArgs),
    /// Restore the built-in list of a language
    Reset(StopwordsListArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct StopwordsListArgs {
    #[arg(short, long, default_value = "turkish")]
    pub language: Language,
}

#[derive(Parser, Debug, Clone)]
pub struct StopwordsEditArgs {
    #[arg(short, long, default_value = "turkish")]
    pub language: Language,

    /// Words to add or remove
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Correction subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CorrectionsCommand {
    /// List all corrections
    List,
    /// Add or replace a correction
    Add {
        /// Misspelled token
        wrong: String,
        /// Replacement, may contain several words
        right: String,
    },
    /// Remove a correction
    Remove {
        #[arg(value_name = "WRONG", required = true)]
        words: Vec<String>,
    },
    /// Remove every correction
    Clear,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_clean_command() {
        let args = MetinArgs::try_parse_from([
            "metin",
            "clean",
            "Bu ürün güzel değil",
            "--language",
            "tr",
            "--trace",
            "--keep-stopwords",
        ])
        .unwrap();

        if let Command::Clean(clean_args) = args.command {
            assert_eq!(clean_args.text.as_deref(), Some("Bu ürün güzel değil"));
            assert_eq!(clean_args.language, Language::Turkish);
            assert!(clean_args.trace);

            let flags = clean_args.stages.apply(StageFlags::default());
            assert!(!flags.stopwords);
            assert!(flags.negation);
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn test_process_command() {
        let args = MetinArgs::try_parse_from([
            "metin",
            "process",
            "in.csv",
            "out.csv",
            "--column",
            "review",
            "-l",
            "english",
        ])
        .unwrap();

        if let Command::Process(process_args) = args.command {
            assert_eq!(process_args.input, PathBuf::from("in.csv"));
            assert_eq!(process_args.output, PathBuf::from("out.csv"));
            assert_eq!(process_args.column, "review");
            assert_eq!(process_args.language, Language::English);
        } else {
            panic!("Expected Process command");
        }
    }

    #[test]
    fn test_learn_defaults() {
        let args = MetinArgs::try_parse_from(["metin", "learn", "a.csv", "b.csv"]).unwrap();

        if let Command::Learn(learn_args) = args.command {
            assert_eq!(learn_args.files.len(), 2);
            assert_eq!(learn_args.min_support, 3);
            assert_eq!(learn_args.cutoff, 0.84);
            assert!(!learn_args.overwrite);
        } else {
            panic!("Expected Learn command");
        }
    }

    #[test]
    fn test_learn_requires_files() {
        assert!(MetinArgs::try_parse_from(["metin", "learn"]).is_err());
    }

    #[test]
    fn test_resource_paths() {
        let args = MetinArgs::try_parse_from(["metin", "corrections", "list"]).unwrap();
        assert_eq!(args.stopwords, PathBuf::from("stopwords.json"));
        assert_eq!(args.corrections, PathBuf::from("custom_corrections.json"));

        let args = MetinArgs::try_parse_from([
            "metin",
            "--corrections",
            "/tmp/fixes.json",
            "corrections",
            "add",
            "tmm",
            "tamam",
        ])
        .unwrap();
        assert_eq!(args.corrections, PathBuf::from("/tmp/fixes.json"));
        assert!(matches!(
            args.command,
            Command::Corrections(CorrectionsCommand::Add { .. })
        ));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = MetinArgs::try_parse_from(["metin", "corrections", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = MetinArgs::try_parse_from(["metin", "-vv", "corrections", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = MetinArgs::try_parse_from(["metin", "-q", "corrections", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_stage_args_apply() {
        let stages = StageArgs {
            strip_numbers: true,
            no_spell_check: true,
            ..Default::default()
        };
        let flags = stages.apply(StageFlags::default());
        assert!(flags.strip_numbers);
        assert!(!flags.spell_check);
        assert!(flags.lemmatize);
    }

    #[test]
    fn test_output_format() {
        let args =
            MetinArgs::try_parse_from(["metin", "--format", "json", "stopwords", "list"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}

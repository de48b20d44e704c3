//! Error types for the Metin library.
//!
//! All fallible operations return [`MetinError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use metin::error::{MetinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MetinError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Metin operations.
///
/// Transformation failures inside the cleaning pipeline are recovered locally
/// and never surface as this type; it is reserved for input, configuration and
/// file-system problems the caller has to see.
#[derive(Error, Debug)]
pub enum MetinError {
    /// I/O errors (dictionary files, corpus files, output files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, lemmatization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (missing columns, undecodable records)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MetinError.
pub type Result<T> = std::result::Result<T, MetinError>;

impl MetinError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MetinError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        MetinError::Corpus(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        MetinError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MetinError::InvalidArgument(msg.into())
    }
}

//! # Metin
//!
//! Normalization, negation tagging and spell correction for noisy
//! Turkish and English user comments.
//!
//! ## Features
//!
//! - Fixed-order cleaning pipeline with per-stage switches and traces
//! - Negation tagging that survives stopword removal
//! - Pattern, dictionary and similarity based spell correction
//! - Learning corrections from raw/processed comment corpora
//! - Turkish and English suffix stemming
//! - Parallel, cancellable CSV batch processing

pub mod analysis;
pub mod cli;
pub mod error;
pub mod language;
pub mod learning;
pub mod pipeline;
pub mod spelling;
pub mod stopwords;

pub mod prelude {
    pub use crate::error::{MetinError, Result};
    pub use crate::language::Language;
    pub use crate::pipeline::batch::{BatchProcessor, BatchSummary};
    pub use crate::pipeline::cleaning::CleaningPipeline;
    pub use crate::pipeline::flags::StageFlags;
    pub use crate::pipeline::resources::{PipelineResources, ResourceStore};
    pub use crate::pipeline::trace::{Stage, StageTrace};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

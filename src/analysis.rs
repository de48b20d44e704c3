//! Text analysis building blocks for Metin.
//!
//! This module provides the stages the cleaning pipeline is assembled from:
//! char filters that rewrite the raw record, tokenizers that split it into
//! words, and token filters that tag, drop, correct and reduce those words.

pub mod char_filter;
pub mod morphology;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

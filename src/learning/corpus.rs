//! Reading (raw, processed) text pairs from CSV corpora.
//!
//! The first row is the header. Only the two configured columns are read;
//! other columns are ignored:
//!
//! ```csv
//! comment_id,comment,comment_processed,score
//! 01,Ürün çok güzeeel,ürün güzel,5
//! ```
//!
//! Fields that are not valid UTF-8 are decoded as Latin-1, so corpora
//! exported by older spreadsheet tools still load.

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{MetinError, Result};

/// One row of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    /// The original, uncleaned text.
    pub raw: String,
    /// The same text after cleaning.
    pub processed: String,
}

/// Reader for CSV corpora with a raw and a processed text column.
#[derive(Debug, Clone)]
pub struct CorpusReader {
    raw_column: String,
    processed_column: String,
}

impl CorpusReader {
    /// Create a reader for the given column names.
    pub fn new<R: Into<String>, P: Into<String>>(raw_column: R, processed_column: P) -> Self {
        CorpusReader {
            raw_column: raw_column.into(),
            processed_column: processed_column.into(),
        }
    }

    /// Read all records of a corpus file.
    ///
    /// Fails with [`MetinError::Corpus`] when either column is missing from
    /// the header.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<CorpusRecord>> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| decode_field(h).trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let raw_index = self.column_index(&headers, &self.raw_column, path)?;
        let processed_index = self.column_index(&headers, &self.processed_column, path)?;

        let mut records = Vec::new();
        let mut record = ByteRecord::new();
        while reader.read_byte_record(&mut record)? {
            records.push(CorpusRecord {
                raw: record.get(raw_index).map(decode_field).unwrap_or_default(),
                processed: record
                    .get(processed_index)
                    .map(decode_field)
                    .unwrap_or_default(),
            });
        }

        Ok(records)
    }

    fn column_index(&self, headers: &[String], column: &str, path: &Path) -> Result<usize> {
        headers.iter().position(|h| h == column).ok_or_else(|| {
            MetinError::corpus(format!(
                "column '{column}' not found in {}",
                path.display()
            ))
        })
    }
}

/// Decode a CSV field as UTF-8, falling back to Latin-1.
pub fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

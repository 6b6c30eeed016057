//! CSV importers for the four input files.
//!
//! Every importer follows the same pipeline:
//!
//! 1. read the file and decode it to text ([`decode`]),
//! 2. check the header row against the fixed column list,
//! 3. turn each non-blank data row into `Ok(record)` or a [`RowError`]
//!    carrying the file line number,
//! 4. stop at the first row error; a file is imported completely or not
//!    at all.
//!
//! Step 3 is exposed on its own (`parse_*` functions) so callers can
//! inspect every row outcome instead of aborting.

pub mod corrections;
pub mod dates;
pub mod decode;
pub mod issues;
pub mod visits;
pub mod workdays;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a single data row was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {line}: {reason}")]
pub struct RowError {
    /// 1-based line in the file, header included.
    pub line: u64,
    pub reason: String,
}

/// Outcome of parsing one data row.
pub type RowResult<T> = Result<T, RowError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row differs from the expected column list.
    #[error("unexpected header: expected [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error(transparent)]
    Row(#[from] RowError),
}

/// A data row with its line number.
pub(crate) struct Row<'a> {
    record: &'a StringRecord,
    line: u64,
}

impl Row<'_> {
    pub(crate) fn line(&self) -> u64 {
        self.line
    }

    /// Trimmed cell, empty when the row is shorter than the header.
    pub(crate) fn get(&self, index: usize) -> &str {
        self.record.get(index).unwrap_or("")
    }

    pub(crate) fn required(&self, index: usize, column: &str) -> RowResult<&str> {
        let value = self.get(index);
        if value.is_empty() {
            return Err(self.error(format!("missing {}", column)));
        }
        Ok(value)
    }

    pub(crate) fn optional(&self, index: usize) -> Option<String> {
        let value = self.get(index);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub(crate) fn error(&self, reason: impl Into<String>) -> RowError {
        RowError {
            line: self.line,
            reason: reason.into(),
        }
    }
}

/// Reads and decodes an input file.
pub fn read_text(path: &Path) -> Result<String, ImportError> {
    let bytes = fs::read(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(decode::decode(&bytes))
}

fn check_header(found: &StringRecord, expected: &[&str]) -> Result<(), ImportError> {
    let mut found: Vec<&str> = found.iter().collect();
    // Spreadsheet exports often pad the header with empty columns.
    while found.last().is_some_and(|h| h.is_empty()) {
        found.pop();
    }

    if found != expected {
        return Err(ImportError::HeaderMismatch {
            expected: expected.join(", "),
            found: found.join(", "),
        });
    }
    Ok(())
}

/// Checks the header and parses every non-blank data row.
pub(crate) fn parse_rows<T, F>(text: &str, expected: &[&str], parse: F) -> Result<Vec<RowResult<T>>, ImportError>
where
    F: Fn(&Row) -> RowResult<T>,
{
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    check_header(reader.headers()?, expected)?;

    let mut rows = vec![];
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(parse(&Row { record: &record, line }));
    }

    tracing::debug!(rows = rows.len(), "parsed CSV rows");
    Ok(rows)
}

/// Keeps every parsed record, or fails with the first row error.
pub fn collect_rows<T>(rows: Vec<RowResult<T>>) -> Result<Vec<T>, ImportError> {
    let records = rows.into_iter().collect::<Result<Vec<T>, RowError>>()?;
    Ok(records)
}

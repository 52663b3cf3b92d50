//! Error types for store persistence and CSV import.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while writing the store or assigning ids. Read failures never
/// surface: a missing or corrupt file loads as an empty store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No task id left to assign")]
    IdsExhausted,

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recoverable problem with one field of an imported row. The row is still
/// imported with a corrected or defaulted value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    #[error("line {line}: invalid UUID '{value}', a new UUID was generated")]
    InvalidUuid { line: u64, value: String },

    #[error("line {line}: invalid priority '{value}', ignored")]
    InvalidPriority { line: u64, value: String },

    #[error("line {line}: invalid due date '{value}', ignored")]
    InvalidDue { line: u64, value: String },

    #[error("line {line}: invalid created timestamp '{value}', current time used")]
    InvalidCreated { line: u64, value: String },

    #[error("line {line}: invalid updated timestamp '{value}', current time used")]
    InvalidUpdated { line: u64, value: String },

    #[error("line {line}: unknown conflict strategy '{strategy}', task skipped")]
    UnknownStrategy { line: u64, strategy: String },
}

/// A row that could not be imported at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("line {line}: CSV parse error: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("line {line}: empty text, task skipped")]
    EmptyText { line: u64 },
}

/// Whole-file import failures.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV header: {0}")]
    Header(String),

    #[error("Required column 'Text' is missing from the CSV header")]
    MissingTextColumn,

    #[error("No valid task found in the CSV file")]
    NoValidRows { errors: Vec<RowError> },

    #[error("Import cancelled by the user")]
    Cancelled,

    #[error(transparent)]
    Store(#[from] StoreError),
}

//! Run-level errors. Every variant ends the run with a non-zero exit code.

use std::{io, path::PathBuf};

use pii_redaction::{NormalizeError, RecordError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(
        "Input file '{}' not found. Provide the path as argument or place it in the current directory.",
        .0.display()
    )]
    InputNotFound(PathBuf),

    #[error("No '{column}' column found. Available columns: {available:?}")]
    MissingColumn {
        column: &'static str,
        available: Vec<String>,
    },

    #[error("record_id {value:?} on line {line} is not an integer")]
    InvalidRecordId { line: u64, value: String },

    /// Every normalization strategy failed for a payload.
    #[error("Invalid JSON for record_id: {id}")]
    InvalidPayload {
        id: i64,
        payload: String,
        #[source]
        source: NormalizeError,
    },

    #[error(transparent)]
    Record(RecordError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Wraps a record failure, keeping the raw payload for the diagnostic.
    pub fn from_record(err: RecordError, payload: String) -> Self {
        match err {
            RecordError::InvalidPayload { id, source } => Self::InvalidPayload {
                id,
                payload,
                source,
            },
            other => Self::Record(other),
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Text printed for the user before exiting.
    ///
    /// A payload failure prints the record identifier, the raw payload and
    /// the parse error on separate lines.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::InvalidPayload {
                id,
                payload,
                source,
            } => format!("Invalid JSON for record_id: {id}\n{payload}\n{source}"),
            other => format!("Error: {other}"),
        }
    }
}

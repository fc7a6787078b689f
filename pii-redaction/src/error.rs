//! Error types for payload normalization and record processing.
//!
//! Field-level validation failures are not errors: a value that does not match
//! its detector is left untouched and never surfaces here.

use thiserror::Error;

/// Failure of a single normalization strategy.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text is not valid interchange notation.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The text is not a valid native literal.
    #[error("{message} at offset {offset}")]
    Literal { message: String, offset: usize },

    /// The text parsed, but not to a key-value mapping.
    #[error("expected a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },
}

impl ParseError {
    pub(crate) fn literal(message: impl Into<String>, offset: usize) -> Self {
        Self::Literal {
            message: message.into(),
            offset,
        }
    }
}

/// Every normalization strategy failed for a payload.
///
/// Displays as the error of the last strategy attempted.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct NormalizeError {
    /// Names of the strategies attempted, in order.
    pub attempted: Vec<&'static str>,
    /// Error reported by the last strategy.
    #[source]
    pub source: ParseError,
}

/// Failure to turn a [`crate::Record`] into a [`crate::RedactedRecord`].
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid payload for record_id {id}: {source}")]
    InvalidPayload {
        id: i64,
        #[source]
        source: NormalizeError,
    },

    #[error("failed to serialize redacted payload for record_id {id}: {source}")]
    Serialize {
        id: i64,
        #[source]
        source: serde_json::Error,
    },
}

impl RecordError {
    /// Identifier of the record that failed.
    pub fn record_id(&self) -> i64 {
        match self {
            Self::InvalidPayload { id, .. } | Self::Serialize { id, .. } => *id,
        }
    }
}

//! Adapters for emitting redacted records through `slog`.
//!
//! This module connects [`RedactedRecord`] with `slog` by providing
//! `slog::Value` implementations that serialize the redacted mapping as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the redacted mapping, never the
//!   raw payload.
//! - Avoiding fallible logging APIs: nothing here returns an error of its own.
//!
//! It does not configure `slog`.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{classification::Classification, record::RedactedRecord};

/// A `slog::Value` that emits an owned redacted payload as structured JSON.
pub struct RedactedJson {
    value: JsonValue,
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their redacted form as JSON.
///
/// ## Example
/// ```ignore
/// use pii_redaction::slog::IntoRedactedJson;
///
/// debug!(logger, "record redacted"; "payload" => redacted.redacted_json());
/// ```
pub trait IntoRedactedJson {
    /// Returns a `slog::Value` that serializes the redacted form as structured JSON.
    fn redacted_json(&self) -> RedactedJson;
}

impl IntoRedactedJson for RedactedRecord {
    fn redacted_json(&self) -> RedactedJson {
        RedactedJson {
            value: JsonValue::Object(self.redacted.clone()),
        }
    }
}

/// Logs the masked categories as a comma-separated list of field names.
pub struct MaskedFields<'a>(pub &'a [Classification]);

impl SlogValue for MaskedFields<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let fields: Vec<&str> = self.0.iter().map(|c| c.field()).collect();
        serializer.emit_str(key, &fields.join(","))
    }
}

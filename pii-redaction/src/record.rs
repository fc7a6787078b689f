//! Record-level processing: one raw payload in, one redacted payload out.

use std::{borrow::Cow, io};

use serde::{ser::Error as _, Serialize};
use serde_json::{ser::Formatter, Serializer, Value};

use crate::{
    classification::Classification,
    error::RecordError,
    normalize::{normalize, Mapping},
    redaction::{assess, redact_assessed},
};

/// An input record: an identifier and its raw payload text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub raw_payload: String,
}

impl Record {
    pub fn new(id: i64, raw_payload: impl Into<String>) -> Self {
        Self {
            id,
            raw_payload: raw_payload.into(),
        }
    }
}

/// The redacted form of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub struct RedactedRecord {
    pub id: i64,
    /// The mapping after masking.
    pub redacted: Mapping,
    /// `redacted` in interchange notation.
    pub redacted_payload: String,
    pub is_pii: bool,
    /// Categories whose field was masked.
    pub masked: Vec<Classification>,
}

/// Normalizes, classifies and redacts a single record.
pub fn process_record(record: &Record) -> Result<RedactedRecord, RecordError> {
    let mapping = normalize(&record.raw_payload).map_err(|source| RecordError::InvalidPayload {
        id: record.id,
        source,
    })?;

    let assessment = assess(&mapping);
    let redacted = redact_assessed(mapping, &assessment);
    let redacted_payload =
        to_interchange(&redacted).map_err(|source| RecordError::Serialize {
            id: record.id,
            source,
        })?;

    Ok(RedactedRecord {
        id: record.id,
        redacted,
        redacted_payload,
        is_pii: assessment.is_pii(),
        masked: assessment.masked,
    })
}

/// Text form of a value as seen by detectors and maskers.
///
/// Strings are used verbatim; numbers use their interchange text; booleans
/// and null use `True`, `False` and `None`; nested values use compact
/// interchange text.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Null => Cow::Borrowed("None"),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Writes `", "` between items and `": "` after keys.
struct InterchangeFormatter;

impl Formatter for InterchangeFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `mapping` in key order with spaced separators. Non-ASCII text is
/// written as-is.
pub fn to_interchange(mapping: &Mapping) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, InterchangeFormatter);
    mapping.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{process_record, stringify, to_interchange, Record};
    use crate::{Classification, RecordError};

    #[test]
    fn interchange_uses_spaced_separators() {
        let value = json!({"a": 1, "b": [1, 2], "c": {"d": null}});
        let text = to_interchange(value.as_object().unwrap()).unwrap();
        assert_eq!(text, r#"{"a": 1, "b": [1, 2], "c": {"d": null}}"#);
    }

    #[test]
    fn interchange_keeps_non_ascii() {
        let value = json!({"city": "Bengaluru ಬೆಂಗಳೂರು"});
        let text = to_interchange(value.as_object().unwrap()).unwrap();
        assert_eq!(text, r#"{"city": "Bengaluru ಬೆಂಗಳೂರು"}"#);
    }

    #[test]
    fn stringify_matches_detector_view() {
        assert_eq!(stringify(&json!("x")), "x");
        assert_eq!(stringify(&json!(9_876_543_210_u64)), "9876543210");
        assert_eq!(stringify(&json!(true)), "True");
        assert_eq!(stringify(&json!(null)), "None");
        assert_eq!(stringify(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn record_is_redacted_and_reserialized() {
        let record = Record::new(7, r#"{"phone": "+91-9876543210", "note": "hi"}"#);
        let redacted = process_record(&record).unwrap();
        assert_eq!(redacted.id, 7);
        assert!(redacted.is_pii);
        assert_eq!(redacted.masked, [Classification::Phone]);
        assert_eq!(
            redacted.redacted_payload,
            r#"{"phone": "+91-98XXXXXX10", "note": "hi"}"#
        );
    }

    #[test]
    fn single_quoted_record_is_reserialized_as_interchange() {
        let record = Record::new(1, "{'email': 'john.doe@example.com'}");
        let redacted = process_record(&record).unwrap();
        assert!(!redacted.is_pii);
        assert_eq!(
            redacted.redacted_payload,
            r#"{"email": "john.doe@example.com"}"#
        );
    }

    #[test]
    fn unparseable_record_reports_its_id() {
        let err = process_record(&Record::new(99, "{{{")).unwrap_err();
        assert_eq!(err.record_id(), 99);
        assert!(matches!(err, RecordError::InvalidPayload { .. }));
    }
}

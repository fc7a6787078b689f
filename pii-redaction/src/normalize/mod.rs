//! Payload normalization: raw text to a key-value mapping.
//!
//! Payloads are expected to be interchange notation but are often produced
//! loosely. [`normalize`] tries each entry of [`STRATEGIES`] in order and
//! returns the first mapping produced:
//!
//! 1. `strict`: interchange notation as-is.
//! 2. `quote_swap`: single quotes replaced by double quotes.
//! 3. `literal`: native literal syntax (see [`literal`]).
//! 4. `separator_repair`: quote-swapped text with missing commas inserted
//!    between a value and the key that follows it.
//!
//! Each strategy is a pure function and is tried once.

pub mod literal;

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{NormalizeError, ParseError};

/// A parsed payload. Keys keep their original order.
pub type Mapping = serde_json::Map<String, Value>;

/// A named parsing strategy.
#[derive(Clone, Copy, Debug)]
pub struct Strategy {
    pub name: &'static str,
    pub parse: fn(&str) -> Result<Mapping, ParseError>,
}

/// Normalization strategies in the order they are attempted.
pub static STRATEGIES: [Strategy; 4] = [
    Strategy {
        name: "strict",
        parse: strict,
    },
    Strategy {
        name: "quote_swap",
        parse: quote_swap,
    },
    Strategy {
        name: "literal",
        parse: literal::parse_mapping,
    },
    Strategy {
        name: "separator_repair",
        parse: separator_repair,
    },
];

// A value end (digit, letter, closing quote or bracket) separated by
// whitespace from the start of the next key or object.
#[allow(clippy::unwrap_used)]
static MISSING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([0-9A-Za-z"\]}])(\s+)(["{])"#).unwrap());

/// Parses `raw` with the first strategy that succeeds.
pub fn normalize(raw: &str) -> Result<Mapping, NormalizeError> {
    let mut attempted = Vec::with_capacity(STRATEGIES.len());
    let mut last = None;
    for strategy in &STRATEGIES {
        attempted.push(strategy.name);
        match (strategy.parse)(raw) {
            Ok(mapping) => return Ok(mapping),
            Err(err) => last = Some(err),
        }
    }
    Err(NormalizeError {
        attempted,
        source: last.unwrap_or(ParseError::NotAMapping { found: "nothing" }),
    })
}

fn into_mapping(value: Value) -> Result<Mapping, ParseError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::NotAMapping {
            found: literal::value_kind(&other),
        }),
    }
}

fn strict(text: &str) -> Result<Mapping, ParseError> {
    into_mapping(serde_json::from_str(text)?)
}

fn swap_quotes(text: &str) -> String {
    text.replace('\'', "\"")
}

fn quote_swap(text: &str) -> Result<Mapping, ParseError> {
    strict(&swap_quotes(text))
}

fn separator_repair(text: &str) -> Result<Mapping, ParseError> {
    let swapped = swap_quotes(text);
    let repaired = MISSING_SEPARATOR.replace_all(&swapped, "$1,$2$3");
    strict(&repaired)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{normalize, separator_repair, ParseError, STRATEGIES};

    fn winning_strategy(raw: &str) -> Option<&'static str> {
        STRATEGIES
            .iter()
            .find(|strategy| (strategy.parse)(raw).is_ok())
            .map(|strategy| strategy.name)
    }

    #[test]
    fn strategies_are_ordered() {
        let names: Vec<_> = STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["strict", "quote_swap", "literal", "separator_repair"]
        );
    }

    #[test]
    fn strict_interchange_wins_first() {
        let raw = r#"{"phone": "9876543210", "count": 2}"#;
        assert_eq!(winning_strategy(raw), Some("strict"));
        let map = normalize(raw).unwrap();
        assert_eq!(map["count"], 2);
    }

    #[test]
    fn single_quotes_are_handled_by_quote_swap() {
        let raw = "{'phone': '9876543210'}";
        assert_eq!(winning_strategy(raw), Some("quote_swap"));
        assert_eq!(normalize(raw).unwrap()["phone"], "9876543210");
    }

    #[test]
    fn native_literals_fall_through_to_literal() {
        let raw = "{'verified': True, 'tags': ('a', 'b')}";
        assert_eq!(winning_strategy(raw), Some("literal"));
        let map = normalize(raw).unwrap();
        assert_eq!(map["verified"], true);
        assert_eq!(map["tags"], json!(["a", "b"]));
    }

    #[test]
    fn missing_comma_is_repaired_last() {
        let raw = r#"{"name": "Asha Rao" "email": "asha@example.com"}"#;
        assert_eq!(winning_strategy(raw), Some("separator_repair"));
        let map = normalize(raw).unwrap();
        assert_eq!(map["name"], "Asha Rao");
        assert_eq!(map["email"], "asha@example.com");
    }

    #[test]
    fn repair_inserts_between_number_and_key() {
        let map = separator_repair(r#"{"a": 1 "b": {"c": 2} "d": true}"#).unwrap();
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"], json!({"c": 2}));
        assert_eq!(map["d"], true);
    }

    #[test]
    fn repair_leaves_string_contents_alone() {
        let map = separator_repair(r#"{"address": "12 Main Road" "pin": "560001"}"#).unwrap();
        assert_eq!(map["address"], "12 Main Road");
    }

    #[test]
    fn key_order_is_preserved() {
        let map = normalize(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn hopeless_payload_reports_every_attempt() {
        let err = normalize("{not even close").unwrap_err();
        assert_eq!(
            err.attempted,
            ["strict", "quote_swap", "literal", "separator_repair"]
        );
        assert!(matches!(err.source, ParseError::Json(_)));
    }

    #[test]
    fn top_level_sequence_is_rejected() {
        let err = normalize("[1, 2, 3]").unwrap_err();
        assert!(matches!(err.source, ParseError::NotAMapping { .. }));
    }
}

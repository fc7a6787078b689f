//! PII classification and redaction of a parsed mapping.
//!
//! Classification always runs against the original values. Masking is applied
//! afterwards from the resulting [`Assessment`] and never feeds back into it.

use serde_json::Value;

use super::rules::{
    Requires, Signal, COMBINATORIAL_RULES, QUALIFYING_COMBINATIONS, STANDALONE_RULES,
};
use crate::{classification::Classification, normalize::Mapping, record::stringify};

/// The outcome of classifying one mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assessment {
    /// Standalone fields present whose value validated.
    pub standalone: Vec<Classification>,
    /// Whether a full-name signal exists.
    pub full_name: bool,
    /// Whether the combinatorial fields form a qualifying combination.
    pub combination: bool,
    /// Fields to mask, in masking order.
    pub masked: Vec<Classification>,
}

impl Assessment {
    /// The verdict: any validated standalone field, or a qualifying combination.
    pub fn is_pii(&self) -> bool {
        !self.standalone.is_empty() || self.combination
    }

    /// Mapping keys that will be masked.
    pub fn masked_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.masked.iter().map(|c| c.field())
    }
}

fn has_full_name(mapping: &Mapping) -> bool {
    let multi_word_name = mapping
        .get(Classification::Name.field())
        .is_some_and(|name| stringify(name).split_whitespace().count() >= 2);
    multi_word_name
        || (mapping.contains_key(Classification::FirstName.field())
            && mapping.contains_key(Classification::LastName.field()))
}

fn signal_present(mapping: &Mapping, full_name: bool, signal: Signal) -> bool {
    let present = |c: Classification| mapping.contains_key(c.field());
    match signal {
        Signal::FullName => full_name,
        Signal::Email => present(Classification::Email),
        Signal::Address => present(Classification::Address),
        Signal::Network => present(Classification::IpAddress) || present(Classification::DeviceId),
    }
}

/// Classifies `mapping` without modifying it.
pub fn assess(mapping: &Mapping) -> Assessment {
    let standalone: Vec<Classification> = STANDALONE_RULES
        .iter()
        .filter(|rule| {
            mapping
                .get(rule.classification.field())
                .is_some_and(|value| (rule.validate)(&stringify(value)))
        })
        .map(|rule| rule.classification)
        .collect();

    let full_name = has_full_name(mapping);
    let combination = QUALIFYING_COMBINATIONS.iter().any(|&(a, b)| {
        signal_present(mapping, full_name, a) && signal_present(mapping, full_name, b)
    });

    let mut masked = standalone.clone();
    if combination {
        masked.extend(
            COMBINATORIAL_RULES
                .iter()
                .filter(|rule| rule.requires == Requires::Presence || full_name)
                .filter(|rule| mapping.contains_key(rule.classification.field()))
                .map(|rule| rule.classification),
        );
    }

    Assessment {
        standalone,
        full_name,
        combination,
        masked,
    }
}

fn masker(classification: Classification) -> Option<fn(&str) -> String> {
    STANDALONE_RULES
        .iter()
        .find(|rule| rule.classification == classification)
        .map(|rule| rule.mask)
        .or_else(|| {
            COMBINATORIAL_RULES
                .iter()
                .find(|rule| rule.classification == classification)
                .map(|rule| rule.mask)
        })
}

/// Masks every field listed in `assessment`. Masked values are written back as strings.
#[must_use]
pub fn redact_assessed(mut mapping: Mapping, assessment: &Assessment) -> Mapping {
    for &classification in &assessment.masked {
        let Some(mask) = masker(classification) else {
            continue;
        };
        if let Some(value) = mapping.get_mut(classification.field()) {
            let masked = mask(&stringify(value));
            *value = Value::String(masked);
        }
    }
    mapping
}

/// Classifies `mapping` and returns its redacted form with the verdict.
///
/// Fields absent from the mapping are never synthesized, and fields that do
/// not contribute to the verdict are returned unchanged.
pub fn classify_and_redact(mapping: Mapping) -> (Mapping, bool) {
    let assessment = assess(&mapping);
    let verdict = assessment.is_pii();
    (redact_assessed(mapping, &assessment), verdict)
}

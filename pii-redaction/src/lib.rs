//! Field-level PII detection and format-preserving masking for key-value payloads.
//!
//! This crate separates:
//! - **Normalization**: turning a loosely formatted text blob into a mapping.
//! - **Classification**: deciding which fields carry PII, alone or in combination.
//! - **Policy**: how a confirmed field is masked.
//!
//! Key rules:
//! - Standalone fields (phone, aadhar, passport, upi_id) are PII on their own
//!   when their value validates, and are masked whenever they validate.
//! - Combinatorial fields (name, email, address, device_id, ip_address) are PII
//!   only alongside a qualifying partner, and are masked only then.
//! - The verdict is computed from the original values before any masking.
//! - Fields that fail validation or are not part of a qualifying combination
//!   pass through unchanged.
//!
//! What this crate does:
//! - parses payloads through an ordered chain of fallback strategies
//! - classifies and redacts a parsed mapping
//! - re-serializes the redacted mapping
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - read or write files
//! - decide what happens to a run when a payload cannot be parsed

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod classification;
mod error;
mod normalize;
mod record;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classification::{Classification, FieldKind};
pub use error::{NormalizeError, ParseError, RecordError};
pub use normalize::{literal, normalize, Mapping, Strategy, STRATEGIES};
pub use record::{process_record, stringify, to_interchange, Record, RedactedRecord};
pub use redaction::{
    assess, classify_and_redact, is_national_id, is_passport, is_payment_handle, is_phone,
    mask_address, mask_device_id, mask_email, mask_ip_address, mask_name, mask_national_id,
    mask_passport, mask_payment_handle, mask_phone, redact_assessed, Assessment,
    CombinatorialRule, KeepConfig, MaskConfig, Requires, Signal, StandaloneRule,
    TextRedactionPolicy, COMBINATORIAL_RULES, DEFAULT_MASK_CHAR, PAYMENT_PROVIDERS,
    QUALIFYING_COMBINATIONS, STANDALONE_RULES,
};

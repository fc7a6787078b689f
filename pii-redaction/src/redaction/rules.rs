//! Declarative detection and masking rules.
//!
//! Adding a field category means adding a row here; the classifier walks these
//! tables and has no per-field branches of its own.

use std::sync::LazyLock;

use regex::Regex;

use super::mask::{
    mask_address, mask_device_id, mask_email, mask_ip_address, mask_name, mask_national_id,
    mask_passport, mask_payment_handle, mask_phone,
};
use crate::classification::Classification;

/// UPI provider suffixes accepted after the `@` of a payment handle.
pub const PAYMENT_PROVIDERS: [&str; 13] = [
    "upi",
    "ybl",
    "axisbank",
    "phonepe",
    "gpay",
    "oksbi",
    "okicici",
    "okaxis",
    "okhdfcbank",
    "paytm",
    "apl",
    "jio",
    "airtel",
];

#[allow(clippy::unwrap_used)]
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+91[-\s]?)?[0-9]{10}$").unwrap());

#[allow(clippy::unwrap_used)]
static NATIONAL_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

#[allow(clippy::unwrap_used)]
static PASSPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{7,8}$").unwrap());

#[allow(clippy::unwrap_used)]
static PAYMENT_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    let providers = PAYMENT_PROVIDERS.join("|");
    Regex::new(&format!(r"^[\w.-]+@(?:{providers})$")).unwrap()
});

/// Optional `+91` prefix (with an optional `-` or whitespace separator) and ten digits.
pub fn is_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Twelve digits once internal whitespace is removed.
pub fn is_national_id(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    NATIONAL_ID.is_match(&cleaned)
}

/// One uppercase letter followed by seven or eight digits.
pub fn is_passport(value: &str) -> bool {
    PASSPORT.is_match(value)
}

/// A local part, `@`, and one of [`PAYMENT_PROVIDERS`].
pub fn is_payment_handle(value: &str) -> bool {
    PAYMENT_HANDLE.is_match(value)
}

/// A field whose validated value alone constitutes PII.
#[derive(Clone, Copy, Debug)]
pub struct StandaloneRule {
    pub classification: Classification,
    pub validate: fn(&str) -> bool,
    pub mask: fn(&str) -> String,
}

/// Standalone rules, in evaluation order.
pub static STANDALONE_RULES: [StandaloneRule; 4] = [
    StandaloneRule {
        classification: Classification::Phone,
        validate: is_phone,
        mask: mask_phone,
    },
    StandaloneRule {
        classification: Classification::NationalId,
        validate: is_national_id,
        mask: mask_national_id,
    },
    StandaloneRule {
        classification: Classification::Passport,
        validate: is_passport,
        mask: mask_passport,
    },
    StandaloneRule {
        classification: Classification::PaymentHandle,
        validate: is_payment_handle,
        mask: mask_payment_handle,
    },
];

/// Which combination signal a combinatorial field must contribute before it is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requires {
    /// Masked only when a full-name signal exists.
    FullName,
    /// Masked whenever present.
    Presence,
}

/// A field that is PII only in a qualifying combination.
#[derive(Clone, Copy, Debug)]
pub struct CombinatorialRule {
    pub classification: Classification,
    pub requires: Requires,
    pub mask: fn(&str) -> String,
}

/// Combinatorial masking rules, applied in order once a combination qualifies.
pub static COMBINATORIAL_RULES: [CombinatorialRule; 7] = [
    CombinatorialRule {
        classification: Classification::Name,
        requires: Requires::FullName,
        mask: mask_name,
    },
    CombinatorialRule {
        classification: Classification::FirstName,
        requires: Requires::FullName,
        mask: mask_name,
    },
    CombinatorialRule {
        classification: Classification::LastName,
        requires: Requires::FullName,
        mask: mask_name,
    },
    CombinatorialRule {
        classification: Classification::Email,
        requires: Requires::Presence,
        mask: mask_email,
    },
    CombinatorialRule {
        classification: Classification::Address,
        requires: Requires::Presence,
        mask: mask_address,
    },
    CombinatorialRule {
        classification: Classification::DeviceId,
        requires: Requires::Presence,
        mask: mask_device_id,
    },
    CombinatorialRule {
        classification: Classification::IpAddress,
        requires: Requires::Presence,
        mask: mask_ip_address,
    },
];

/// A combination signal derived from the combinatorial fields of a mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// A multi-word `name`, or both `first_name` and `last_name`.
    FullName,
    /// An `email` field is present.
    Email,
    /// An `address` field is present.
    Address,
    /// An `ip_address` or `device_id` field is present.
    Network,
}

/// Signal pairs that together make a record PII.
pub static QUALIFYING_COMBINATIONS: [(Signal, Signal); 5] = [
    (Signal::FullName, Signal::Email),
    (Signal::FullName, Signal::Address),
    (Signal::Email, Signal::Address),
    (Signal::FullName, Signal::Network),
    (Signal::Email, Signal::Network),
];

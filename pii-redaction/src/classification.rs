//! Categories of personal data recognised in a payload.
//!
//! Each category governs exactly one mapping key. Keys outside this set are
//! never inspected.

use std::fmt;

/// Whether a category identifies a person on its own or only with a partner field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A validated value alone is sufficient for a PII verdict.
    Standalone,
    /// Contributes to a verdict only alongside a qualifying partner field.
    Combinatorial,
}

/// A category of personal data, tied to the mapping key it governs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Indian mobile number, optionally `+91`-prefixed.
    Phone,
    /// 12-digit Aadhaar number.
    NationalId,
    /// Indian passport number.
    Passport,
    /// UPI payment handle.
    PaymentHandle,
    /// Free-form full or partial name.
    Name,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Physical address.
    Address,
    /// Device identifier.
    DeviceId,
    /// IPv4-shaped network address.
    IpAddress,
}

impl Classification {
    /// Every category, standalone ones first.
    pub const ALL: [Classification; 11] = [
        Classification::Phone,
        Classification::NationalId,
        Classification::Passport,
        Classification::PaymentHandle,
        Classification::Name,
        Classification::FirstName,
        Classification::LastName,
        Classification::Email,
        Classification::Address,
        Classification::DeviceId,
        Classification::IpAddress,
    ];

    /// The mapping key this category governs.
    pub fn field(self) -> &'static str {
        match self {
            Classification::Phone => "phone",
            Classification::NationalId => "aadhar",
            Classification::Passport => "passport",
            Classification::PaymentHandle => "upi_id",
            Classification::Name => "name",
            Classification::FirstName => "first_name",
            Classification::LastName => "last_name",
            Classification::Email => "email",
            Classification::Address => "address",
            Classification::DeviceId => "device_id",
            Classification::IpAddress => "ip_address",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Classification::Phone
            | Classification::NationalId
            | Classification::Passport
            | Classification::PaymentHandle => FieldKind::Standalone,
            _ => FieldKind::Combinatorial,
        }
    }

    /// Looks up the category governing `field`. Matching is exact.
    pub fn from_field(field: &str) -> Option<Classification> {
        Self::ALL.into_iter().find(|c| c.field() == field)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

//! Classification, masking policies, and the rule tables tying them together.
//!
//! - **`policy`**: how text is masked (`TextRedactionPolicy`, `KeepConfig`, `MaskConfig`)
//! - **`mask`**: per-category maskers built on the policies
//! - **`rules`**: which fields are detected, how they validate, how they are masked
//! - **`classifier`**: the verdict and the redacted mapping
//!
//! Categories live in `crate::classification`.

mod classifier;
mod mask;
mod policy;
mod rules;

pub use classifier::{assess, classify_and_redact, redact_assessed, Assessment};
pub use mask::{
    mask_address, mask_device_id, mask_email, mask_ip_address, mask_name, mask_national_id,
    mask_passport, mask_payment_handle, mask_phone,
};
pub use policy::{KeepConfig, MaskConfig, TextRedactionPolicy, DEFAULT_MASK_CHAR};
pub use rules::{
    is_national_id, is_passport, is_payment_handle, is_phone, CombinatorialRule, Requires,
    Signal, StandaloneRule, COMBINATORIAL_RULES, PAYMENT_PROVIDERS, QUALIFYING_COMBINATIONS,
    STANDALONE_RULES,
};

//! Redaction policies for string-like values.
//!
//! Policies are pure string transformations. They do not look at field names,
//! validate values, or make decisions about sensitivity.

use std::borrow::Cow;

/// Character used to mask hidden positions unless overridden.
pub const DEFAULT_MASK_CHAR: char = 'X';

/// Configuration that keeps selected segments visible while masking the remainder.
///
/// The policy operates on Unicode scalar values. If the configuration keeps the
/// entire value visible, the output is unchanged.
#[derive(Clone, Copy, Debug)]
pub struct KeepConfig {
    /// Number of leading characters to keep visible.
    visible_prefix: usize,
    /// Number of trailing characters to keep visible.
    visible_suffix: usize,
    /// Symbol used to mask the middle.
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` scalar values.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self::both(visible_prefix, 0)
    }

    /// Keeps only the last `visible_suffix` scalar values.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self::both(0, visible_suffix)
    }

    /// Keeps both leading and trailing characters visible.
    ///
    /// If `visible_prefix + visible_suffix >= total_length`, the entire value
    /// is kept visible (no masking occurs).
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();

        // If keep spans cover or exceed the total length, return unchanged
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return value.to_string();
        }

        chars[self.visible_prefix..(total - self.visible_suffix)].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// Configuration that masks selected segments while leaving the remainder unchanged.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::struct_field_names)]
pub struct MaskConfig {
    /// Number of leading characters to mask.
    mask_prefix: usize,
    /// Number of trailing characters to mask.
    mask_suffix: usize,
    /// Symbol used to mask the selected segments.
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the initial `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self::both(mask_prefix, 0)
    }

    /// Masks only the final `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self::both(0, mask_suffix)
    }

    /// Masks every character, preserving length.
    #[must_use]
    pub fn all() -> Self {
        Self::both(usize::MAX, 0)
    }

    /// Masks both leading and trailing characters.
    ///
    /// If `mask_prefix + mask_suffix >= total_length`, the entire value
    /// is masked.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();

        if self.mask_prefix.saturating_add(self.mask_suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }

        chars[..self.mask_prefix].fill(self.mask_char);
        chars[total - self.mask_suffix..].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// A redaction strategy for string-like values.
///
/// All strategies operate on Unicode scalar values and return an owned `String`.
#[derive(Clone, Debug)]
pub enum TextRedactionPolicy {
    /// Replace the entire value with a fixed placeholder.
    Full {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured segments visible while masking everything else.
    Keep(KeepConfig),
    /// Mask configured segments while leaving the remainder untouched.
    Mask(MaskConfig),
}

impl TextRedactionPolicy {
    /// Constructs [`TextRedactionPolicy::Full`] using a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keeps only the first `visible_prefix` scalar values in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps `visible_prefix` leading and `visible_suffix` trailing values.
    #[must_use]
    pub fn keep_both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::both(visible_prefix, visible_suffix))
    }

    /// Masks every scalar value, preserving length.
    #[must_use]
    pub fn mask_all() -> Self {
        Self::Mask(MaskConfig::all())
    }

    /// Applies the policy to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            TextRedactionPolicy::Full { placeholder } => placeholder.clone().into_owned(),
            TextRedactionPolicy::Keep(config) => config.apply_to(value),
            TextRedactionPolicy::Mask(config) => config.apply_to(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, MaskConfig, TextRedactionPolicy};

    #[test]
    fn keep_policy_allows_full_visibility() {
        let policy = TextRedactionPolicy::keep_first(3);
        assert_eq!(policy.apply_to("ab"), "ab");
    }

    #[test]
    fn keep_policy_masks_with_x_by_default() {
        let policy = TextRedactionPolicy::keep_first(2);
        assert_eq!(policy.apply_to("abcdef"), "abXXXX");
    }

    #[test]
    fn keep_policy_respects_mask_char() {
        let policy = TextRedactionPolicy::Keep(KeepConfig::last(2).with_mask_char('#'));
        assert_eq!(policy.apply_to("abcdef"), "####ef");
    }

    #[test]
    fn full_policy_uses_placeholder() {
        let policy = TextRedactionPolicy::full_with("X.X.X.X");
        assert_eq!(policy.apply_to("anything"), "X.X.X.X");
    }

    #[test]
    fn mask_policy_masks_first_and_last_segments() {
        let policy = TextRedactionPolicy::Mask(MaskConfig::first(2));
        assert_eq!(policy.apply_to("abcdef"), "XXcdef");

        let policy = TextRedactionPolicy::Mask(MaskConfig::last(3).with_mask_char('*'));
        assert_eq!(policy.apply_to("abcdef"), "abc***");
    }

    #[test]
    fn mask_all_preserves_length() {
        let policy = TextRedactionPolicy::mask_all();
        assert_eq!(policy.apply_to("560001"), "XXXXXX");
        assert_eq!(policy.apply_to("秘密"), "XX");
    }

    #[test]
    fn empty_string_returns_empty_for_keep_and_mask() {
        assert_eq!(TextRedactionPolicy::keep_first(4).apply_to(""), "");
        assert_eq!(TextRedactionPolicy::mask_all().apply_to(""), "");
    }

    #[test]
    fn keep_both_overlap_keeps_entire_value() {
        let policy = TextRedactionPolicy::keep_both(2, 2);
        assert_eq!(policy.apply_to("abc"), "abc"); // 2 + 2 = 4 >= 3
        assert_eq!(policy.apply_to("abcd"), "abcd"); // 2 + 2 = 4 >= 4
    }

    #[test]
    fn keep_both_no_overlap() {
        let policy = TextRedactionPolicy::keep_both(2, 2);
        assert_eq!(policy.apply_to("abcdef"), "abXXef");
    }

    #[test]
    fn mask_both_overlap_masks_entire_value() {
        let policy = TextRedactionPolicy::Mask(MaskConfig::both(2, 2));
        assert_eq!(policy.apply_to("abc"), "XXX");
        assert_eq!(policy.apply_to("abcdef"), "XXcdXX");
    }
}

//! Format-preserving maskers, one per field category.
//!
//! Maskers are total: they accept any text and never fail. Standalone maskers
//! assume their validator accepted the value; combinatorial maskers accept
//! anything.

use super::policy::{TextRedactionPolicy, DEFAULT_MASK_CHAR};

const PHONE_PREFIX: &str = "+91";

/// Keeps the first character of `token` and masks the rest.
fn mask_token(token: &str) -> String {
    TextRedactionPolicy::keep_first(1).apply_to(token)
}

fn mask_words(text: &str) -> String {
    text.split_whitespace()
        .map(mask_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `+91-98XXXXXX10` for any accepted separator style, `98XXXXXX10` without prefix.
pub fn mask_phone(value: &str) -> String {
    let (prefix, digits) = match value.strip_prefix(PHONE_PREFIX) {
        Some(rest) => (
            "+91-",
            rest.strip_prefix(|ch: char| ch == '-' || ch.is_whitespace())
                .unwrap_or(rest),
        ),
        None => ("", value),
    };
    format!(
        "{prefix}{}",
        TextRedactionPolicy::keep_both(2, 2).apply_to(digits)
    )
}

/// Reveals the first and last four digits: `1234XXXX9012`.
///
/// Internal whitespace is dropped before masking.
pub fn mask_national_id(value: &str) -> String {
    let digits: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    TextRedactionPolicy::keep_both(4, 4).apply_to(&digits)
}

/// Reveals the first and last character.
pub fn mask_passport(value: &str) -> String {
    TextRedactionPolicy::keep_both(1, 1).apply_to(value)
}

/// Masks the second half of the handle's local part; the provider is kept.
pub fn mask_payment_handle(value: &str) -> String {
    let Some((local, provider)) = value.split_once('@') else {
        return value.to_string();
    };
    let visible = local.chars().count() / 2;
    let masked = TextRedactionPolicy::keep_first(visible).apply_to(local);
    format!("{masked}@{provider}")
}

/// Masks each whitespace-separated word: `Asha Rao` becomes `AXXX RXX`.
pub fn mask_name(value: &str) -> String {
    mask_words(value)
}

/// Masks each dot-separated segment of the local part; the domain is kept.
pub fn mask_email(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    let masked = local.split('.').map(mask_token).collect::<Vec<_>>().join(".");
    format!("{masked}@{domain}")
}

/// Masks each comma-separated segment. Purely numeric segments are fully
/// masked, others word by word. Segments are rejoined with `", "`.
pub fn mask_address(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .map(|segment| {
            if !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit()) {
                TextRedactionPolicy::mask_all().apply_to(segment)
            } else {
                mask_words(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reveals the first three characters. Shorter identifiers are left as-is.
pub fn mask_device_id(value: &str) -> String {
    TextRedactionPolicy::keep_first(3).apply_to(value)
}

/// Keeps the first two octets: `192.168.X.X`. Anything not shaped like four
/// dotted parts becomes `X.X.X.X`.
pub fn mask_ip_address(value: &str) -> String {
    let parts: Vec<&str> = value.split('.').collect();
    match parts.as_slice() {
        [first, second, _, _] => format!("{first}.{second}.{DEFAULT_MASK_CHAR}.{DEFAULT_MASK_CHAR}"),
        _ => TextRedactionPolicy::full_with("X.X.X.X").apply_to(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_with_prefix_keeps_two_digits_each_side() {
        assert_eq!(mask_phone("+91-9876543210"), "+91-98XXXXXX10");
        assert_eq!(mask_phone("+91 9876543210"), "+91-98XXXXXX10");
        assert_eq!(mask_phone("+919876543210"), "+91-98XXXXXX10");
    }

    #[test]
    fn phone_without_prefix() {
        assert_eq!(mask_phone("9876543210"), "98XXXXXX10");
    }

    #[test]
    fn national_id_reveals_four_each_side() {
        assert_eq!(mask_national_id("123456789012"), "1234XXXX9012");
        assert_eq!(mask_national_id("1234 5678 9012"), "1234XXXX9012");
    }

    #[test]
    fn passport_reveals_ends() {
        assert_eq!(mask_passport("P1234567"), "PXXXXXX7");
        assert_eq!(mask_passport("K12345678"), "KXXXXXXX8");
    }

    #[test]
    fn payment_handle_masks_ceiling_half_of_local_part() {
        assert_eq!(mask_payment_handle("user@ybl"), "usXX@ybl");
        assert_eq!(mask_payment_handle("abc@upi"), "aXX@upi");
        assert_eq!(mask_payment_handle("a@paytm"), "X@paytm");
    }

    #[test]
    fn name_masks_every_word() {
        assert_eq!(mask_name("Asha Rao"), "AXXX RXX");
        assert_eq!(mask_name("  Ravi   Kumar Singh "), "RXXX KXXXX SXXXX");
        assert_eq!(mask_name("A"), "A");
    }

    #[test]
    fn email_masks_each_local_segment() {
        assert_eq!(mask_email("john.doe@example.com"), "jXXX.dXX@example.com");
        assert_eq!(mask_email("asha@example.com"), "aXXX@example.com");
        assert_eq!(mask_email("not-an-email"), "not-an-email");
    }

    #[test]
    fn email_keeps_empty_local_segments() {
        assert_eq!(mask_email("asha..rao@example.com"), "aXXX..rXX@example.com");
        assert_eq!(mask_email(".asha@example.com"), ".aXXX@example.com");
    }

    #[test]
    fn address_numeric_segments_are_fully_masked() {
        assert_eq!(
            mask_address("12 MG Road, Bengaluru, 560001"),
            "1X MX RXXX, BXXXXXXXX, XXXXXX"
        );
    }

    #[test]
    fn address_alphanumeric_segment_is_word_masked() {
        assert_eq!(mask_address("221B, Baker Street"), "2XXX, BXXXX SXXXXX");
    }

    #[test]
    fn device_id_short_values_are_kept() {
        assert_eq!(mask_device_id("DEV12345"), "DEVXXXXX");
        assert_eq!(mask_device_id("abc"), "abc");
    }

    #[test]
    fn ip_address_keeps_two_octets() {
        assert_eq!(mask_ip_address("192.168.1.10"), "192.168.X.X");
        assert_eq!(mask_ip_address("fe80::1"), "X.X.X.X");
        assert_eq!(mask_ip_address("10.0.0"), "X.X.X.X");
    }
}
